mod common;

use coldoutside_core::{
    AnyWeather, Config, ConversionError, Location, ProviderId, ServiceError, Units, WeatherService,
    provider::{metno::MetnoClient, openweather::OpenWeatherMapClient, provider_from_config},
};
use common::{metno_week, owm_payload};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const ONECALL: &str = "/data/3.0/onecall";
const LOCATIONFORECAST: &str = "/weatherapi/locationforecast/2.0/complete";

fn greenwich() -> Location {
    Location::new(51.477, 0.0).with_name("Greenwich")
}

#[tokio::test]
async fn openweathermap_fetches_and_normalises() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ONECALL))
        .and(query_param("appid", "secret"))
        .and(query_param("units", "metric"))
        .and(query_param("lat", "51.477"))
        .respond_with(ResponseTemplate::new(200).set_body_json(owm_payload(180.0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenWeatherMapClient::new("secret").with_base_url(server.uri());
    let weather = client
        .get_weather(Units::Metric, &greenwich())
        .await
        .expect("weather should load");

    let AnyWeather::Metric(weather) = weather else {
        panic!("expected metric weather");
    };
    assert_eq!(weather.location().name.as_deref(), Some("Greenwich"));
    assert_eq!(weather.current().temp.temperature(), 20.0);
    assert_eq!(weather.hours().count(), 48);
    assert_eq!(weather.daily().len(), 8);
}

#[tokio::test]
async fn openweathermap_status_errors_keep_a_short_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ONECALL))
        .respond_with(ResponseTemplate::new(401).set_body_string("x".repeat(500)))
        .mount(&server)
        .await;

    let client = OpenWeatherMapClient::new("wrong").with_base_url(server.uri());
    let err = client.get_weather(Units::Metric, &greenwich()).await.unwrap_err();

    let ServiceError::Status { provider, status, body } = &err else {
        panic!("expected a status error, got {err:?}");
    };
    assert_eq!(*provider, ProviderId::OpenWeatherMap);
    assert_eq!(status.as_u16(), 401);
    assert_eq!(body.len(), 203);
    assert!(body.ends_with("..."));
    assert!(!err.is_invalid_upstream_data());
}

#[tokio::test]
async fn openweathermap_bad_wind_direction_is_a_conversion_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ONECALL))
        .respond_with(ResponseTemplate::new(200).set_body_json(owm_payload(500.0)))
        .mount(&server)
        .await;

    let client = OpenWeatherMapClient::new("secret").with_base_url(server.uri());
    let err = client.get_weather(Units::Imperial, &greenwich()).await.unwrap_err();

    assert!(err.is_invalid_upstream_data());
    assert_eq!(
        err.conversion_error(),
        Some(&ConversionError::InvalidWindDirection(500.0))
    );
}

#[tokio::test]
async fn metno_sends_user_agent_and_rounded_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOCATIONFORECAST))
        .and(header("user-agent", "coldoutside-tests/1.0 test@example.com"))
        .and(query_param("lat", "59.91"))
        .and(query_param("lon", "10.75"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metno_week()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MetnoClient::new("coldoutside-tests/1.0 test@example.com").with_base_url(server.uri());
    let weather = client
        .get_weather(Units::Imperial, &Location::new(59.91234, 10.74961))
        .await
        .expect("weather should load");

    assert_eq!(weather.units(), Units::Imperial);
    let AnyWeather::Imperial(weather) = weather else {
        panic!("expected imperial weather");
    };
    assert_eq!(weather.hours().count(), 48);
    assert_eq!(weather.daily().len(), 7);
}

#[tokio::test]
async fn metno_invalid_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOCATIONFORECAST))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = MetnoClient::new("coldoutside-tests").with_base_url(server.uri());
    let err = client.get_weather(Units::Metric, &greenwich()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Decode { provider: ProviderId::MetNo, .. }));
    assert!(err.is_invalid_upstream_data());
    assert!(err.conversion_error().is_none());
}

#[tokio::test]
async fn metno_server_error_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOCATIONFORECAST))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&server)
        .await;

    let client = MetnoClient::new("coldoutside-tests").with_base_url(server.uri());
    let err = client.get_weather(Units::Metric, &greenwich()).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "metno request failed with status 503 Service Unavailable: try later"
    );
}

#[tokio::test]
async fn configured_base_url_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ONECALL))
        .and(query_param("appid", "from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(owm_payload(90.0)))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.upsert_provider_api_key(ProviderId::OpenWeatherMap, "from-config".to_string());
    config
        .providers
        .get_mut(ProviderId::OpenWeatherMap.as_str())
        .expect("provider entry should exist")
        .base_url = Some(server.uri());

    let service = provider_from_config(ProviderId::OpenWeatherMap, &config).expect("should build");
    let weather = service
        .get_weather(Units::Metric, &greenwich())
        .await
        .expect("weather should load");

    assert_eq!(weather.units(), Units::Metric);
}
