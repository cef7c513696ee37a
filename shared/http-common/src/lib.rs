//! Shared HTTP utilities for the ParsFit portal workspace.
//!
//! Framework-agnostic pieces the server builds on: the JSON error envelope,
//! the session cookie codec, redirect targets and time formatting.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::SystemTime;

// ============================================================================
// JSON Response Helpers
// ============================================================================

/// Create a structured error JSON with a default message based on the code.
///
/// Returns: `{"error": {"code": "<code>", "message": "<default message>"}}`
pub fn json_err(code: &str) -> serde_json::Value {
    let message = match code {
        "not_found" => "Resource not found",
        "bad_request" => "Bad request",
        "invalid_input" => "Invalid input",
        "unauthorized" => "Authentication required",
        "forbidden" => "Access denied",
        "conflict" => "Resource already exists",
        "invalid_credentials" => "Invalid email or password",
        "error" | "internal" => "Internal server error",
        _ => code, // Fallback to code as message for unknown codes
    };
    serde_json::json!({"error": {"code": code, "message": message}})
}

/// Create a structured error JSON with a custom message.
///
/// Returns: `{"error": {"code": "<code>", "message": "<message>"}}`
pub fn json_error_with_message(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"error": {"code": code, "message": message}})
}

/// Like [`json_error_with_message`], with per-field details attached.
///
/// Returns: `{"error": {"code", "message", "fields": <fields>}}`
pub fn json_error_with_fields(code: &str, message: &str, fields: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"error": {"code": code, "message": message, "fields": fields}})
}

// ============================================================================
// Session Cookie
// ============================================================================

/// Name of the cookie carrying the logged-in user.
pub const SESSION_COOKIE: &str = "currentUser";

/// Session lifetime: seven days.
pub const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Encode a value as base64url (no padding) JSON, suitable for a cookie value.
pub fn encode_cookie_value<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a cookie value written by [`encode_cookie_value`].
///
/// Anything that is not valid base64url JSON of the expected shape yields
/// `None`.
pub fn decode_cookie_value<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let bytes = URL_SAFE_NO_PAD.decode(raw.trim()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn cookie_attributes(max_age: u64, secure: bool) -> String {
    let mut attrs = format!("Path=/; HttpOnly; SameSite=Lax; Max-Age={}", max_age);
    if secure {
        attrs.push_str("; Secure");
    }
    attrs
}

/// `Set-Cookie` value storing an encoded session.
pub fn session_cookie(encoded: &str, secure: bool) -> String {
    format!(
        "{}={}; {}",
        SESSION_COOKIE,
        encoded,
        cookie_attributes(SESSION_MAX_AGE_SECS, secure)
    )
}

/// `Set-Cookie` value that expires the session immediately.
pub fn clear_session_cookie(secure: bool) -> String {
    format!("{}=; {}", SESSION_COOKIE, cookie_attributes(0, secure))
}

/// Find a cookie by name in a `Cookie` request header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

// ============================================================================
// Redirects
// ============================================================================

/// Build a login URL that returns to `next` after signing in.
///
/// `next` is percent-encoded; an empty `next` yields the bare login path.
pub fn login_redirect(login_path: &str, next: &str) -> String {
    if next.is_empty() {
        return login_path.to_string();
    }
    format!("{}?next={}", login_path, urlencoding::encode(next))
}

// ============================================================================
// Time Utilities
// ============================================================================

/// Convert SystemTime to RFC3339 string (seconds precision, UTC).
pub fn system_time_to_rfc3339(t: SystemTime) -> String {
    let dt: DateTime<Utc> = t.into();
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
