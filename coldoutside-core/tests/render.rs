mod common;

use coldoutside_core::{
    AnyWeather, Location, Rendered, Units,
    provider::openweather::{RawWeatherResponse, build_weather},
    render::{HtmlOptions, JsonOptions, RenderOptions, Renderer, TextOptions},
};
use common::owm_payload;

fn weather(units: Units, location: Location) -> AnyWeather {
    let raw: RawWeatherResponse =
        serde_json::from_value(owm_payload(180.0)).expect("fixture should deserialize");
    build_weather(units, location, &raw).expect("fixture should convert")
}

fn render(weather: &AnyWeather, options: &RenderOptions) -> Rendered {
    Renderer::new()
        .expect("templates should compile")
        .render(weather, options)
        .expect("weather should render")
}

fn greenwich() -> Location {
    Location::new(51.477, 0.0).with_name("Greenwich").with_country("UK")
}

#[test]
fn plain_text_summary() {
    let rendered = render(
        &weather(Units::Metric, greenwich()),
        &RenderOptions::Text(TextOptions { colour: false }),
    );

    let body = &rendered.body;
    assert_eq!(rendered.content_type, "text/plain; charset=utf-8");
    assert!(body.starts_with("Greenwich, UK\n\n"));
    assert!(body.contains("broken clouds: 51-84%, 20°C, Wind 5–10 m/s ↓"));
    assert!(body.contains("Humidity 81% · Pressure 1012 hPa · Clouds 75%"));
    assert!(body.contains("Sunrise 08:00 · Sunset 16:00 UTC"));
    assert!(body.contains("\nHourly\nMon 01 Jan\n"));
    assert!(body.contains("\nDaily\n"));
    assert!(!body.contains('\u{1b}'));
    assert!(body.ends_with('\n'));
}

#[test]
fn coloured_text_uses_ansi_escapes() {
    let rendered = render(
        &weather(Units::Metric, greenwich()),
        &RenderOptions::Text(TextOptions { colour: true }),
    );

    assert!(rendered.body.contains('\u{1b}'));
}

#[test]
fn imperial_text_uses_imperial_units() {
    let rendered = render(&weather(Units::Imperial, greenwich()), &RenderOptions::default());

    assert!(rendered.body.contains("68°F"));
    assert!(rendered.body.contains(" mph "));
    assert!(!rendered.body.contains("°C"));
}

#[test]
fn html_is_a_page_with_escaped_text() {
    let location = Location::new(51.477, 0.0).with_name("<Tom & Jerry>");
    let rendered = render(&weather(Units::Metric, location), &RenderOptions::Html(HtmlOptions));

    let body = &rendered.body;
    assert_eq!(rendered.content_type, "text/html; charset=utf-8");
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>&lt;Tom &amp; Jerry&gt;</title>"));
    assert!(body.contains("<h1>&lt;Tom &amp; Jerry&gt;</h1>"));
    assert!(!body.contains("<Tom"));
    assert!(body.contains("<pre><span class=\""));
    assert!(body.contains("Wind <span class=\""));
    assert!(!body.contains("&lt;span"));
    assert!(body.contains(".greenBright { color: #40e040; }"));
    assert!(body.contains("<section class=\"hourly\">"));
    assert!(body.contains("<section class=\"daily\">"));
}

#[test]
fn json_matches_the_model() {
    let rendered = render(
        &weather(Units::Metric, greenwich()),
        &RenderOptions::Json(JsonOptions { pretty: false }),
    );

    assert_eq!(rendered.content_type, "application/json");
    assert!(rendered.body.ends_with('\n'));
    assert!(!rendered.body.trim_end().contains('\n'));

    let json: serde_json::Value = serde_json::from_str(&rendered.body).unwrap();
    assert_eq!(json["units"], "metric");
    assert_eq!(json["location"]["name"], "Greenwich");
    assert_eq!(json["current"]["temp"]["temperature"], 20.0);
    assert_eq!(json["current"]["temp"]["unit"], "°C");
    assert_eq!(json["current"]["wind"]["speed"]["speed"], 5.0);
    assert_eq!(json["current"]["wind"]["gusts"]["speed"], 10.0);
    assert_eq!(json["current"]["wind"]["direction"], "↓");
    assert_eq!(json["hourly"]["2024-01-01"].as_array().map(Vec::len), Some(24));
    assert_eq!(json["hourly"]["2024-01-02"].as_array().map(Vec::len), Some(24));
    assert_eq!(json["daily"].as_array().map(Vec::len), Some(8));
}

#[test]
fn pretty_json_is_indented() {
    let rendered = render(
        &weather(Units::Imperial, greenwich()),
        &RenderOptions::Json(JsonOptions { pretty: true }),
    );

    assert!(rendered.body.starts_with("{\n  "));
    let json: serde_json::Value = serde_json::from_str(&rendered.body).unwrap();
    assert_eq!(json["units"], "imperial");
    assert_eq!(json["current"]["temp"]["unit"], "°F");
}

#[test]
fn headers_describe_the_location() {
    let rendered = render(&weather(Units::Metric, greenwich()), &RenderOptions::default());

    assert_eq!(
        rendered.headers,
        vec![
            ("x-coldoutside-latlon", "51.477,0".to_string()),
            ("x-coldoutside-location", "Greenwich, UK".to_string()),
        ]
    );
}
