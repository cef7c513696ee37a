//! Member dashboard API and the guarded dashboard pages.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use domain::dashboard::MemberDashboard;
use domain::Role;

use crate::error::ApiError;
use crate::session::{require, require_page};
use crate::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MemberDashboard>, ApiError> {
    let user = require(&headers, Some(Role::User))?;
    state.latency.read().await;
    Ok(Json(state.service.member_dashboard(&user)?))
}

/// `GET /user-dashboard`
pub async fn user_dashboard_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_page(&headers, Some(Role::User), "/user-dashboard") {
        Ok(u) => u,
        Err(redirect) => return redirect,
    };
    state.latency.read().await;
    match state.service.member_dashboard(&user) {
        Ok(dash) => Json(dash).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// `GET /admin`
pub async fn admin_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(redirect) = require_page(&headers, Some(Role::Admin), "/admin") {
        return redirect;
    }
    state.latency.read().await;
    match state.service.admin_overview() {
        Ok(overview) => Json(overview).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
