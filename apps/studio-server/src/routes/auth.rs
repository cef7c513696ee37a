use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use domain::auth::{landing_path, login as check_credentials, SessionUser};
use domain::validate::validate_login_form;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::session::{current_user, login_cookie, logout_cookie};
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginReq {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOut {
    user: SessionUser,
    redirect_to: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginReq>,
) -> Result<impl IntoResponse, ApiError> {
    validate_login_form(&body.email, &body.password)?;
    state.latency.read().await;

    let Some(user) = check_credentials(body.email.trim(), &body.password) else {
        warn!(email = %body.email, "login rejected");
        return Err(ApiError::InvalidCredentials);
    };
    info!(user_id = %user.id, role = user.role.as_str(), "login ok");

    let cookie = login_cookie(&user, state.cookie_secure)?;
    let out = LoginOut {
        redirect_to: landing_path(user.role),
        user,
    };
    Ok(([(header::SET_COOKIE, cookie)], Json(out)))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(user) = current_user(&headers) {
        info!(user_id = %user.id, "logout");
    }
    let cookie = logout_cookie(state.cookie_secure)?;
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

pub async fn me(headers: HeaderMap) -> Result<Json<SessionUser>, ApiError> {
    current_user(&headers).map(Json).ok_or(ApiError::Unauthorized)
}
