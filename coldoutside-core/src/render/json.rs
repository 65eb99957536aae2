use super::JsonOptions;
use crate::weather::AnyWeather;

pub fn render(weather: &AnyWeather, options: &JsonOptions) -> Result<String, serde_json::Error> {
    let mut body = if options.pretty {
        serde_json::to_string_pretty(weather)?
    } else {
        serde_json::to_string(weather)?
    };
    body.push('\n');
    Ok(body)
}
