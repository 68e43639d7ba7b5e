//! JSON handler for the sensor query endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};

use rfbridge_app::latest_cache::LatestValueCache;
use rfbridge_domain::reading::{Reading, ReadingTag};

/// Possible responses from the sensor query endpoint.
pub enum SensorResponse {
    /// A reading exists for the requested key.
    Found(Json<Value>),
    /// No reading observed yet, or the path names no known key.
    NotFound(Json<Value>),
}

impl IntoResponse for SensorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Found(json) => json.into_response(),
            Self::NotFound(json) => (StatusCode::NOT_FOUND, json).into_response(),
        }
    }
}

/// `GET /sensor/{instance}/{tag}`
///
/// The path segments are parsed here rather than rejected by the extractor:
/// an unknown tag token or non-numeric instance is the same "nothing here"
/// case as a cache miss, and answers 404 either way.
pub async fn get_sensor(
    State(cache): State<Arc<LatestValueCache>>,
    Path((instance, tag)): Path<(String, String)>,
) -> SensorResponse {
    let (Ok(instance), Ok(tag)) = (instance.parse(), tag.parse::<ReadingTag>()) else {
        return not_found(&instance, &tag);
    };
    match cache.lookup(instance, tag) {
        Some(reading) => SensorResponse::Found(Json(reading_body(&reading))),
        None => not_found(&instance.to_string(), tag.as_str()),
    }
}

/// Response body with the value field named after the tag:
/// `{"instance": 51, "tag": "temperature", "temperature": 21.5, "ts": …}`.
fn reading_body(reading: &Reading) -> Value {
    let mut body = Map::new();
    body.insert("instance".to_string(), json!(reading.instance));
    body.insert("tag".to_string(), json!(reading.tag));
    body.insert(reading.tag.as_str().to_string(), json!(reading.value));
    body.insert("ts".to_string(), json!(reading.observed_at));
    Value::Object(body)
}

fn not_found(instance: &str, tag: &str) -> SensorResponse {
    SensorResponse::NotFound(Json(json!({
        "error": format!("no reading for sensor {instance}/{tag}"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfbridge_domain::instance::InstanceId;
    use rfbridge_domain::time::now;

    #[test]
    fn should_name_value_field_after_tag() {
        let reading = Reading {
            instance: InstanceId::new(51),
            tag: ReadingTag::Humidity,
            value: 40.0,
            observed_at: now(),
        };
        let body = reading_body(&reading);
        assert_eq!(body["instance"], 51);
        assert_eq!(body["tag"], "humidity");
        assert_eq!(body["humidity"], 40.0);
        assert!(body["ts"].is_string());
        assert!(body.get("value").is_none());
    }
}
