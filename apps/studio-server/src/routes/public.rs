//! Read-only endpoints behind the marketing pages, plus the contact form.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::model::{
    AboutContent, BlogPost, Branch, ContactInfo, HeroContent, PricingPlan, ServiceContent,
    Testimonial,
};
use domain::service::Scope;
use domain::validate::validate_contact_message;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// Everything the landing page renders, in one response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    hero: HeroContent,
    about: AboutContent,
    branches: Vec<Branch>,
    services: Vec<ServiceContent>,
    pricing_plans: Vec<PricingPlan>,
    testimonials: Vec<Testimonial>,
    blog_posts: Vec<BlogPost>,
    contact_info: ContactInfo,
}

pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, ApiError> {
    state.latency.read().await;
    let svc = &state.service;
    Ok(Json(HomePage {
        hero: svc.hero()?,
        about: svc.about()?,
        branches: svc.branches(Scope::Public)?,
        services: svc.services(Scope::Public)?,
        pricing_plans: svc.pricing_plans(Scope::Public)?,
        testimonials: svc.testimonials(Scope::Public)?,
        blog_posts: svc.published_posts()?,
        contact_info: svc.contact_info()?,
    }))
}

pub async fn branches(State(state): State<AppState>) -> Result<Json<Vec<Branch>>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.branches(Scope::Public)?))
}

pub async fn hero(State(state): State<AppState>) -> Result<Json<HeroContent>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.hero()?))
}

pub async fn about(State(state): State<AppState>) -> Result<Json<AboutContent>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.about()?))
}

pub async fn services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceContent>>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.services(Scope::Public)?))
}

pub async fn pricing(State(state): State<AppState>) -> Result<Json<Vec<PricingPlan>>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.pricing_plans(Scope::Public)?))
}

pub async fn testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.testimonials(Scope::Public)?))
}

#[derive(Deserialize)]
pub struct BlogQuery {
    category: Option<String>,
    search: Option<String>,
}

pub async fn blog(
    State(state): State<AppState>,
    Query(q): Query<BlogQuery>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    state.latency.read().await;
    let posts = state
        .service
        .search_posts(q.category.as_deref(), q.search.as_deref())?;
    Ok(Json(posts))
}

pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.post_by_slug(&slug)?))
}

pub async fn contact_info(State(state): State<AppState>) -> Result<Json<ContactInfo>, ApiError> {
    state.latency.read().await;
    Ok(Json(state.service.contact_info()?))
}

#[derive(Deserialize)]
pub struct ContactReq {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    message: String,
}

/// Contact form submissions are validated and logged; nothing is stored.
pub async fn contact(Json(body): Json<ContactReq>) -> Result<impl IntoResponse, ApiError> {
    validate_contact_message(&body.name, &body.email, &body.message)?;
    info!(
        name = %body.name,
        email = %body.email,
        phone = body.phone.as_deref().unwrap_or("-"),
        length = body.message.len(),
        "contact message received"
    );
    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({"status": "received"})),
    ))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "time": http_common::system_time_to_rfc3339(std::time::SystemTime::now()),
    }))
}
