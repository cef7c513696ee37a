//! Cookie-backed sessions and the role checks built on them.

use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use domain::auth::SessionUser;
use domain::guard::{authorize, Access, LOGIN_PATH, UNAUTHORIZED_PATH};
use domain::Role;
use http_common::SESSION_COOKIE;
use tracing::debug;

use crate::error::ApiError;

/// The logged-in user carried by the request, if any.
///
/// A cookie that does not decode to a session counts as no session.
pub fn current_user(headers: &HeaderMap) -> Option<SessionUser> {
    let raw = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|h| http_common::cookie_value(h, SESSION_COOKIE))?;
    let user = http_common::decode_cookie_value(raw);
    if user.is_none() {
        debug!("ignoring malformed session cookie");
    }
    user
}

/// Guard for API routes: 401 without a session, 403 on a role mismatch.
pub fn require(headers: &HeaderMap, required: Option<Role>) -> Result<SessionUser, ApiError> {
    let session = current_user(headers);
    match authorize(session.as_ref(), required) {
        Access::Granted => session.ok_or(ApiError::Unauthorized),
        Access::RedirectToLogin => Err(ApiError::Unauthorized),
        Access::RedirectToUnauthorized => Err(ApiError::Forbidden),
    }
}

/// Guard for browser pages: redirects instead of error bodies.
pub fn require_page(
    headers: &HeaderMap,
    required: Option<Role>,
    path: &str,
) -> Result<SessionUser, Response> {
    let session = current_user(headers);
    match (authorize(session.as_ref(), required), session) {
        (Access::Granted, Some(user)) => Ok(user),
        (Access::RedirectToUnauthorized, _) => {
            Err(Redirect::to(UNAUTHORIZED_PATH).into_response())
        }
        _ => Err(Redirect::to(&http_common::login_redirect(LOGIN_PATH, path)).into_response()),
    }
}

/// `Set-Cookie` header value storing `user`.
pub fn login_cookie(user: &SessionUser, secure: bool) -> Result<HeaderValue, ApiError> {
    let encoded = http_common::encode_cookie_value(user)
        .map_err(|e| ApiError::Internal(format!("encode session: {}", e)))?;
    HeaderValue::from_str(&http_common::session_cookie(&encoded, secure))
        .map_err(|e| ApiError::Internal(format!("session header: {}", e)))
}

/// `Set-Cookie` header value ending the session.
pub fn logout_cookie(secure: bool) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&http_common::clear_session_cookie(secure))
        .map_err(|e| ApiError::Internal(format!("session header: {}", e)))
}
