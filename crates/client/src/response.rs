//! Response normalization
//!
//! Every endpoint answers with `{ success, data, message }`. Some answer
//! with a bare array or object. [`normalize_response`] folds both shapes and
//! all failure cases into `Result<Value, ClientError>` without doing any I/O,
//! so the rules can be exercised directly.

use crate::error::ClientError;
use serde_json::Value;

/// Standard response envelope
///
/// Keys are read one by one so that a key of an unexpected type only loses
/// that key. `message` and `error` may arrive as strings, lists of strings,
/// or objects carrying their own `message`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub success: Option<bool>,
    pub data: Option<Value>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Envelope {
    /// Read the envelope keys of a body; anything but an object is empty
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            success: object.get("success").and_then(Value::as_bool),
            data: object.get("data").filter(|d| !d.is_null()).cloned(),
            message: object.get("message").and_then(message_text),
            error: object.get("error").and_then(message_text),
        }
    }

    /// Server-supplied message, preferring `message` over `error`
    pub fn server_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}

fn message_text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(message_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(map) => map.get("message").and_then(message_text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(_) | Value::Null => None,
    }
}

/// Fallback text when the body carries no message
pub fn fallback_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Turn a status code and raw body into the payload or an error
pub fn normalize_response(status: u16, body: &[u8]) -> Result<Value, ClientError> {
    let success = (200..300).contains(&status);

    if body.iter().all(u8::is_ascii_whitespace) {
        return if success {
            Ok(Value::Null)
        } else {
            Err(ClientError::api(status, fallback_message(status)))
        };
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) if success => return Err(ClientError::Parse(e.to_string())),
        Err(_) => return Err(ClientError::api(status, fallback_message(status))),
    };

    let envelope = Envelope::from_value(&value);

    if !success || envelope.success == Some(false) {
        let message = envelope
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback_message(status));
        return Err(ClientError::api(status, message));
    }

    Ok(match envelope.data {
        Some(data) => data,
        None => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let payload = normalize_response(
            200,
            &body(json!({ "success": true, "data": [{ "_id": "1" }] })),
        )
        .unwrap();
        assert_eq!(payload, json!([{ "_id": "1" }]));
    }

    #[test]
    fn test_bare_payload_is_accepted() {
        assert_eq!(
            normalize_response(200, &body(json!([1, 2]))).unwrap(),
            json!([1, 2])
        );
        assert_eq!(
            normalize_response(201, &body(json!({ "_id": "9" }))).unwrap(),
            json!({ "_id": "9" })
        );
    }

    #[test]
    fn test_empty_success_body() {
        assert_eq!(normalize_response(204, b"").unwrap(), Value::Null);
    }

    #[test]
    fn test_error_message_from_body() {
        let err = normalize_response(
            409,
            &body(json!({ "success": false, "message": "Email already exists" })),
        )
        .unwrap_err();
        assert_eq!(err, ClientError::api(409, "Email already exists"));

        let err = normalize_response(400, &body(json!({ "error": "Bad faculty id" }))).unwrap_err();
        assert_eq!(err.user_message(), "Bad faculty id");
    }

    #[test]
    fn test_error_fallback_message() {
        let err = normalize_response(500, b"<html>oops</html>").unwrap_err();
        assert_eq!(err, ClientError::api(500, "Request failed with status 500"));

        let err = normalize_response(502, b"").unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status 502");

        let err = normalize_response(404, &body(json!({ "message": "  " }))).unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status 404");
    }

    #[test]
    fn test_success_flag_false_with_ok_status() {
        let err = normalize_response(
            200,
            &body(json!({ "success": false, "message": "Event not found" })),
        )
        .unwrap_err();
        assert_eq!(err, ClientError::api(200, "Event not found"));
    }

    #[test]
    fn test_success_flag_false_with_list_message() {
        let err = normalize_response(
            200,
            &body(json!({ "success": false, "message": ["Email is taken"] })),
        )
        .unwrap_err();
        assert_eq!(err, ClientError::api(200, "Email is taken"));

        let err = normalize_response(
            201,
            &body(json!({ "success": false, "message": { "message": "Duplicate event" } })),
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "Duplicate event");

        let err = normalize_response(200, &body(json!({ "success": false, "message": 42 })))
            .unwrap_err();
        assert_eq!(err, ClientError::api(200, "42"));
    }

    #[test]
    fn test_envelope_keeps_keys_of_the_right_type() {
        let envelope = Envelope::from_value(&json!({
            "success": "yes",
            "data": [1],
            "message": ["a", "b"],
            "error": null
        }));
        assert_eq!(envelope.success, None);
        assert_eq!(envelope.data, Some(json!([1])));
        assert_eq!(envelope.server_message(), Some("a; b"));
        assert_eq!(Envelope::from_value(&json!([1, 2])), Envelope::default());
    }

    #[test]
    fn test_unparsable_success_body() {
        assert!(matches!(
            normalize_response(200, b"not json"),
            Err(ClientError::Parse(_))
        ));
    }
}
