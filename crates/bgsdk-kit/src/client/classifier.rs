//! Response classification: raw 2xx body in, typed [`Outcome`] out.

use std::borrow::Cow;
use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::types::{Outcome, ResponseShape};

/// Decode a body with serde_json. The default decoder for typed calls.
pub fn json<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(body)
}

/// Reshape a body according to `shape` before decoding.
///
/// An empty (or whitespace-only) body becomes `null` so unit and `Option`
/// payloads decode from `204 No Content`.
///
/// # Example
///
/// ```
/// use bgsdk_kit::{ResponseShape, normalize};
///
/// let shape = ResponseShape::wrap_array("result");
/// assert_eq!(normalize(r#"[1,2]"#, &shape).unwrap(), r#"{"result":[1,2]}"#);
/// assert_eq!(normalize(r#"{"result":[1,2]}"#, &shape).unwrap(), r#"{"result":[1,2]}"#);
/// ```
pub fn normalize<'a>(body: &'a str, shape: &ResponseShape) -> Result<Cow<'a, str>, String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(Cow::Borrowed("null"));
    }
    let is_array = trimmed.starts_with('[');

    match shape {
        ResponseShape::AsIs => Ok(Cow::Borrowed(body)),
        ResponseShape::WrapArray { field } if is_array => {
            let key = serde_json::Value::String(field.clone());
            Ok(Cow::Owned(format!("{{{key}:{trimmed}}}")))
        }
        ResponseShape::SingleElement if is_array => {
            let items: Vec<serde_json::Value> =
                serde_json::from_str(trimmed).map_err(|e| e.to_string())?;
            match items.into_iter().next() {
                Some(first) => Ok(Cow::Owned(first.to_string())),
                None => Err("expected a single-element array, got an empty array".to_string()),
            }
        }
        ResponseShape::WrapArray { .. } | ResponseShape::SingleElement => {
            Ok(Cow::Borrowed(body))
        }
    }
}

/// Classify a 2xx body with `decode`, without reshaping.
pub fn classify<T, E, F>(raw_body: String, status: u16, decode: F) -> Outcome<T>
where
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    classify_shaped(raw_body, status, &ResponseShape::AsIs, decode)
}

/// Classify a 2xx body: normalize per `shape`, then decode.
///
/// Decode failures become [`Outcome::MalformedPayload`] carrying the original
/// body; they never panic or propagate.
pub fn classify_shaped<T, E, F>(
    raw_body: String,
    status: u16,
    shape: &ResponseShape,
    decode: F,
) -> Outcome<T>
where
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    let decoded = match normalize(&raw_body, shape) {
        Ok(body) => decode(&body).map_err(|e| e.to_string()),
        Err(reason) => Err(reason),
    };

    match decoded {
        Ok(payload) => Outcome::Success { payload, status },
        Err(reason) => {
            tracing::warn!(status, %reason, "response body did not match the expected shape");
            Outcome::MalformedPayload {
                error: format!("An error occurred while processing JSON results: {reason}"),
                raw_body,
                status,
            }
        }
    }
}
