//! HTTP API Client
//!
//! Functions for communicating with the health-tracking REST backend. The
//! backend owns all entity schemas and validation; fetched records are kept
//! as raw `serde_json::Value` and rendered as-is.

use gloo_net::http::{Request, Response};
use serde_json::Value;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL.
///
/// Resolved once per call site from the compile-time `BACKEND_URL`
/// environment override, falling back to [`DEFAULT_API_BASE`].
pub fn api_base() -> &'static str {
    option_env!("BACKEND_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

// ============ Request Payloads ============

/// New user profile. Optional fields serialize as `null` when absent.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

/// Daily wellness log entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NewHealthLog {
    pub user_email: String,
    pub mood: Option<String>,
    pub sleep_hours: Option<f64>,
    pub hydration_ml: Option<u32>,
    pub activity_minutes: Option<u32>,
}

/// Genetic marker record.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NewMarker {
    pub user_email: String,
    pub gene: String,
    pub snp: String,
    pub risk_level: String,
    pub note: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

// ============ Field Coercion ============

/// Empty text input becomes an absent value; anything else passes
/// through verbatim.
pub fn opt_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Numeric input coercion: empty becomes absent, non-empty parses.
///
/// The input widget constrains what the user can type; anything that still
/// fails to parse is treated as absent rather than sent as garbage.
pub fn opt_number<T: std::str::FromStr>(value: &str) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

// ============ URL Building ============

/// Build a collection URL, appending the percent-encoded email filter
/// when one is given.
fn collection_url(base: &str, path: &str, filter: Option<&str>) -> String {
    match filter {
        Some(email) => format!("{}{}?user_email={}", base, path, urlencoding::encode(email)),
        None => format!("{}{}", base, path),
    }
}

/// Extract a user-facing message from a non-success response body.
///
/// The backend reports application errors as a JSON object with an optional
/// `detail` string; anything else falls back to a generic status message.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or_else(|| format!("Error {}", status))
}

async fn response_error(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body)
}

// ============ API Functions ============

/// Create a user profile
pub async fn create_user(payload: &NewUser) -> Result<Value, String> {
    let response = Request::post(&format!("{}/users", api_base()))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a daily health log entry
pub async fn create_log(payload: &NewHealthLog) -> Result<Value, String> {
    let response = Request::post(&format!("{}/logs", api_base()))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a genetic marker record
pub async fn create_marker(payload: &NewMarker) -> Result<Value, String> {
    let response = Request::post(&format!("{}/markers", api_base()))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all users. The email filter never applies here.
pub async fn fetch_users() -> Result<Vec<Value>, String> {
    fetch_collection("/users", None).await
}

/// Fetch health logs, optionally narrowed to one user's email
pub async fn fetch_logs(filter: Option<&str>) -> Result<Vec<Value>, String> {
    fetch_collection("/logs", filter).await
}

/// Fetch genetic markers, optionally narrowed to one user's email
pub async fn fetch_markers(filter: Option<&str>) -> Result<Vec<Value>, String> {
    fetch_collection("/markers", filter).await
}

async fn fetch_collection(path: &str, filter: Option<&str>) -> Result<Vec<Value>, String> {
    let url = collection_url(api_base(), path, filter);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_numeric_fields_serialize_as_null() {
        let user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: opt_number(""),
            gender: opt_text(""),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["age"], Value::Null);
        assert_eq!(value["gender"], Value::Null);
    }

    #[test]
    fn test_numeric_fields_serialize_as_numbers() {
        let log = NewHealthLog {
            user_email: "ada@example.com".to_string(),
            mood: opt_text("good"),
            sleep_hours: opt_number("7.5"),
            hydration_ml: opt_number("2000"),
            activity_minutes: opt_number(""),
        };

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["sleep_hours"], json!(7.5));
        assert_eq!(value["hydration_ml"], json!(2000));
        assert_eq!(value["activity_minutes"], Value::Null);
        assert_eq!(value["mood"], json!("good"));
    }

    #[test]
    fn test_marker_without_note_has_null_note() {
        let marker = NewMarker {
            user_email: "ada@example.com".to_string(),
            gene: "MTHFR".to_string(),
            snp: "rs1801133".to_string(),
            risk_level: "moderate".to_string(),
            note: opt_text(""),
        };

        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value["gene"], json!("MTHFR"));
        assert_eq!(value["snp"], json!("rs1801133"));
        assert_eq!(value["risk_level"], json!("moderate"));
        assert_eq!(value["note"], Value::Null);
    }

    #[test]
    fn test_opt_text_passes_text_through_verbatim() {
        assert_eq!(opt_text(""), None);
        assert_eq!(opt_text(" x "), Some(" x ".to_string()));
        assert_eq!(opt_text("good"), Some("good".to_string()));
    }

    #[test]
    fn test_opt_number_rejects_garbage() {
        assert_eq!(opt_number::<u32>("abc"), None);
        assert_eq!(opt_number::<u32>("  "), None);
        assert_eq!(opt_number::<u32>("42"), Some(42));
    }

    #[test]
    fn test_collection_url_without_filter() {
        assert_eq!(
            collection_url("http://localhost:8000", "/logs", None),
            "http://localhost:8000/logs"
        );
    }

    #[test]
    fn test_collection_url_encodes_email_filter() {
        assert_eq!(
            collection_url("http://localhost:8000", "/logs", Some("a@b.com")),
            "http://localhost:8000/logs?user_email=a%40b.com"
        );
        assert_eq!(
            collection_url("http://localhost:8000", "/markers", Some("a@b.com")),
            "http://localhost:8000/markers?user_email=a%40b.com"
        );
    }

    #[test]
    fn test_error_message_uses_detail_field() {
        assert_eq!(
            error_message(422, r#"{"detail": "email already registered"}"#),
            "email already registered"
        );
    }

    #[test]
    fn test_error_message_falls_back_on_status() {
        assert_eq!(error_message(500, "not json at all"), "Error 500");
        assert_eq!(error_message(422, r#"{"other": "shape"}"#), "Error 422");
    }

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }
}
