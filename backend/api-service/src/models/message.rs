use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const MISSING_FIELDS: &str = "Please provide name, email, and message";

/// Body of `POST /api/messages`.
///
/// Fields are kept as raw JSON so that any truthy value is accepted and
/// echoed back as sent; only presence is checked, in [`NewMessage::validate`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

/// A submitted message whose fields all passed the presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMessage {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

impl NewMessage {
    /// A field counts as missing when it is absent or falsy in the JavaScript
    /// sense: `null`, `false`, `0` and `""`.
    pub fn validate(self) -> Result<ValidMessage, AppError> {
        match (present(self.name), present(self.email), present(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(ValidMessage {
                name,
                email,
                message,
            }),
            _ => Err(AppError::BadRequest(MISSING_FIELDS.to_string())),
        }
    }
}

fn present(field: Option<Value>) -> Option<Value> {
    field.filter(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Confirmation of a received message. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub name: Value,
    pub email: Value,
    pub message: Value,
    #[serde(with = "super::iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: u64, body: ValidMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: body.name,
            email: body.email,
            message: body.message,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> NewMessage {
        NewMessage {
            name: Some(json!("Ada")),
            email: Some(json!("ada@example.com")),
            message: Some(json!("hello")),
        }
    }

    #[test]
    fn complete_payload_passes() {
        let valid = complete().validate().unwrap();
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.email, "ada@example.com");
        assert_eq!(valid.message, "hello");
    }

    #[test]
    fn each_missing_or_falsy_field_is_rejected() {
        let mutations: [fn(&mut NewMessage); 9] = [
            |m| m.name = None,
            |m| m.email = None,
            |m| m.message = None,
            |m| m.name = Some(json!("")),
            |m| m.email = Some(json!("")),
            |m| m.message = Some(json!("")),
            |m| m.name = Some(json!(0)),
            |m| m.email = Some(json!(false)),
            |m| m.message = Some(json!(0.0)),
        ];

        for mutate in mutations {
            let mut payload = complete();
            mutate(&mut payload);
            match payload.validate() {
                Err(AppError::BadRequest(msg)) => assert_eq!(msg, MISSING_FIELDS),
                other => panic!("expected bad request, got {:?}", other),
            }
        }
    }

    #[test]
    fn truthy_non_string_values_are_kept_as_sent() {
        let mut payload = complete();
        payload.name = Some(json!(5));
        payload.email = Some(json!(true));
        payload.message = Some(json!(["hi"]));

        let valid = payload.validate().unwrap();
        assert_eq!(valid.name, json!(5));
        assert_eq!(valid.email, json!(true));
        assert_eq!(valid.message, json!(["hi"]));
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let payload: NewMessage =
            serde_json::from_str(r#"{"name": null, "email": "a@b.c"}"#).unwrap();
        assert!(payload.name.is_none());
        assert!(payload.message.is_none());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn message_uses_camel_case_timestamp() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        let msg = Message::new(42, complete().validate().unwrap(), created_at);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00.500Z");
        assert!(json.get("created_at").is_none());
    }
}
