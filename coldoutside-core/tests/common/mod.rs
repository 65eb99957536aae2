//! Raw provider payloads shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};

pub const EPS: f64 = 1e-6;

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// A met.no step. `next` is the period key carrying the symbol, or `None`
/// for the trailing step met.no sends without one.
pub fn metno_step(time: DateTime<Utc>, next: Option<&str>, temp: f64) -> Value {
    let mut data = json!({
        "instant": {
            "details": {
                "air_pressure_at_sea_level": 1010.5,
                "air_temperature": temp,
                "cloud_area_fraction": 40.0,
                "relative_humidity": 75.0,
                "wind_from_direction": 180.0,
                "wind_speed": 5.0,
                "wind_speed_of_gust": 10.0
            }
        }
    });
    if let Some(next) = next {
        data[next] = json!({ "summary": { "symbol_code": "partlycloudy_day" }, "details": {} });
    }
    json!({ "time": time.to_rfc3339(), "data": data })
}

pub fn metno_payload(steps: Vec<Value>) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [10.75, 59.91, 10] },
        "properties": {
            "meta": { "updated_at": "2023-12-31T22:00:00Z", "units": {} },
            "timeseries": steps
        }
    })
}

/// Now, two full days of hourly steps, seven days of 6-hourly steps, and a
/// trailing step with no period after it.
pub fn metno_week() -> Value {
    let now = utc(2023, 12, 31, 23);
    let mut steps = vec![metno_step(now, Some("next_1_hours"), 2.0)];

    let hourly_start = utc(2024, 1, 1, 0);
    for i in 0..48_i32 {
        let temp = f64::from(i % 24) / 2.0;
        steps.push(metno_step(hourly_start + Duration::hours(i.into()), Some("next_1_hours"), temp));
    }

    let six_hourly_start = utc(2024, 1, 3, 0);
    for i in 0..28_i32 {
        let temp = f64::from(i % 4) * 3.0 - 1.0;
        steps.push(metno_step(six_hourly_start + Duration::hours(i64::from(i) * 6), Some("next_6_hours"), temp));
    }

    steps.push(metno_step(utc(2024, 1, 10, 0), None, 0.0));
    metno_payload(steps)
}

fn owm_point(dt: i64, wind_deg: f64) -> Value {
    json!({
        "dt": dt,
        "pressure": 1012,
        "humidity": 81,
        "dew_point": 16.6,
        "uvi": 0.2,
        "clouds": 75,
        "wind_speed": 5.0,
        "wind_deg": wind_deg,
        "wind_gust": 10.0,
        "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }]
    })
}

/// A One Call response with 48 hourly and 8 daily points.
pub fn owm_payload(wind_deg: f64) -> Value {
    let start = 1_704_067_200; // 2024-01-01T00:00:00Z

    let mut current = owm_point(start, wind_deg);
    current["temp"] = json!(20.0);
    current["feels_like"] = json!(19.8);
    current["visibility"] = json!(10000);
    current["sunrise"] = json!(start + 8 * 3600);
    current["sunset"] = json!(start + 16 * 3600);

    let hourly: Vec<Value> = (0..48)
        .map(|i| {
            let mut hour = owm_point(start + i * 3600, 200.0);
            hour["temp"] = json!(15.0 + (i % 24) as f64 / 4.0);
            hour["feels_like"] = json!(14.0);
            hour["visibility"] = json!(10000);
            hour["pop"] = json!(0.1);
            hour
        })
        .collect();

    let daily: Vec<Value> = (0..8)
        .map(|i| {
            let mut day = owm_point(start + 12 * 3600 + i * 86_400, 90.0);
            day["temp"] = json!({ "day": 18, "min": 10, "max": 21, "night": 11, "eve": 17, "morn": 12 });
            day["feels_like"] = json!({ "day": 17, "night": 10, "eve": 16, "morn": 11 });
            day["sunrise"] = json!(start + 8 * 3600 + i * 86_400);
            day["sunset"] = json!(start + 16 * 3600 + i * 86_400);
            day
        })
        .collect();

    json!({
        "lat": 51.477,
        "lon": 0.0,
        "timezone": "Europe/London",
        "timezone_offset": 0,
        "current": current,
        "hourly": hourly,
        "daily": daily
    })
}
