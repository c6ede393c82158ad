use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailSubmission {
    pub email: String,
}

/// A user as served by the backend's user collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub team: String,
    #[serde(default, deserialize_with = "lenient_birthday")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub homeaddress: String,
    #[serde(default)]
    pub gender: String,
    #[serde(
        default,
        rename = "profileImage",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

// Phone numbers arrive as either strings or bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

// A malformed birthday on one record must not fail the whole collection.
// Accepts RFC 3339, naive date-times and plain dates (read as UTC) and epoch
// milliseconds; anything else reads as absent.
fn lenient_birthday<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => parse_birthday(raw.trim()),
        Some(Value::Number(millis)) => millis
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}

fn parse_birthday(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

const SERVER_ERROR: &str = "SERVER_ERROR";
const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
const UNKNOWN: &str = "UNKNOWN";
const REQUEST_FAILED: &str = "REQUEST_FAILED";

fn default_error_code() -> String {
    SERVER_ERROR.to_string()
}

/// Where an error's text came from. Never read from or written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ErrorOrigin {
    /// Backend body or form validation; safe to show.
    #[default]
    Reported,
    /// Built by the client from a transport or decoding failure.
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default = "default_error_code")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip)]
    origin: ErrorOrigin,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str, origin: ErrorOrigin) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
            origin,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, VALIDATION_ERROR, ErrorOrigin::Reported)
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::with_code(msg, SERVER_ERROR, ErrorOrigin::Reported)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, UNKNOWN, ErrorOrigin::Internal)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, REQUEST_FAILED, ErrorOrigin::Internal)
    }

    /// True when the text came from the backend or from form validation and
    /// is meant to be shown to the user as is. The wire `code` plays no part.
    pub fn is_server_reported(&self) -> bool {
        self.origin == ErrorOrigin::Reported && !self.error.trim().is_empty()
    }
}
