//! Admin panel API. Every handler requires an admin session.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use domain::auth::SessionUser;
use domain::dashboard::AdminOverview;
use domain::model::*;
use domain::service::Scope;
use domain::{RecordId, Role};
use tracing::info;

use crate::error::ApiError;
use crate::session::require;
use crate::AppState;

fn admin(headers: &HeaderMap) -> Result<SessionUser, ApiError> {
    require(headers, Some(Role::Admin))
}

/// Path ids that could never have been assigned cannot match a record.
fn record_id(raw: String, kind: &'static str) -> Result<RecordId, ApiError> {
    RecordId::new(raw).map_err(|_| ApiError::NotFound(kind))
}

pub async fn overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminOverview>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.admin_overview()?))
}

// ---- branches ----

pub async fn list_branches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Branch>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.branches(Scope::All)?))
}

pub async fn create_branch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Branch>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_branch(body)?;
    info!(id = %created.id, by = %user.email, "branch created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_branch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<BranchPatch>,
) -> Result<Json<Branch>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "branch")?;
    state.latency.write().await;
    Ok(Json(state.service.update_branch(&id, patch)?))
}

pub async fn delete_branch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "branch")?;
    state.latency.write().await;
    state.service.delete_branch(&id)?;
    info!(%id, by = %user.email, "branch deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---- services ----

pub async fn list_services(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ServiceContent>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.services(Scope::All)?))
}

pub async fn create_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ServiceContent>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_service(body)?;
    info!(id = %created.id, by = %user.email, "service created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<ServiceContent>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "service")?;
    state.latency.write().await;
    Ok(Json(state.service.update_service(&id, patch)?))
}

pub async fn delete_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "service")?;
    state.latency.write().await;
    state.service.delete_service(&id)?;
    info!(%id, by = %user.email, "service deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---- pricing ----

pub async fn list_pricing(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PricingPlan>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.pricing_plans(Scope::All)?))
}

pub async fn create_pricing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<PricingPlan>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_pricing_plan(body)?;
    info!(id = %created.id, by = %user.email, "pricing plan created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_pricing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<PricingPlanPatch>,
) -> Result<Json<PricingPlan>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "pricing plan")?;
    state.latency.write().await;
    Ok(Json(state.service.update_pricing_plan(&id, patch)?))
}

pub async fn delete_pricing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "pricing plan")?;
    state.latency.write().await;
    state.service.delete_pricing_plan(&id)?;
    info!(%id, by = %user.email, "pricing plan deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---- testimonials ----

pub async fn list_testimonials(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.testimonials(Scope::All)?))
}

pub async fn create_testimonial(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Testimonial>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_testimonial(body)?;
    info!(id = %created.id, by = %user.email, "testimonial created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_testimonial(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<TestimonialPatch>,
) -> Result<Json<Testimonial>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "testimonial")?;
    state.latency.write().await;
    Ok(Json(state.service.update_testimonial(&id, patch)?))
}

pub async fn delete_testimonial(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "testimonial")?;
    state.latency.write().await;
    state.service.delete_testimonial(&id)?;
    info!(%id, by = %user.email, "testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---- blog ----

pub async fn list_posts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.all_posts()?))
}

pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<BlogPost>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_post(body)?;
    info!(id = %created.id, slug = %created.slug, by = %user.email, "blog post created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<BlogPostPatch>,
) -> Result<Json<BlogPost>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "blog post")?;
    state.latency.write().await;
    Ok(Json(state.service.update_post(&id, patch)?))
}

pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "blog post")?;
    state.latency.write().await;
    state.service.delete_post(&id)?;
    info!(%id, by = %user.email, "blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---- users ----

pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.users()?))
}

pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UserProfile>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_user(body)?;
    info!(id = %created.id, by = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<UserProfilePatch>,
) -> Result<Json<UserProfile>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "user")?;
    state.latency.write().await;
    Ok(Json(state.service.update_user(&id, patch)?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "user")?;
    state.latency.write().await;
    state.service.delete_user(&id)?;
    info!(%id, by = %user.email, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---- appointments ----

pub async fn list_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    admin(&headers)?;
    state.latency.read().await;
    Ok(Json(state.service.appointments()?))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<NewAppointment>,
) -> Result<impl IntoResponse, ApiError> {
    let user = admin(&headers)?;
    state.latency.write().await;
    let created = state.service.create_appointment(body)?;
    info!(
        id = %created.id,
        date = %created.date,
        time = %created.time,
        by = %user.email,
        "appointment booked"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<AppointmentPatch>,
) -> Result<Json<Appointment>, ApiError> {
    admin(&headers)?;
    let id = record_id(id, "appointment")?;
    state.latency.write().await;
    Ok(Json(state.service.update_appointment(&id, patch)?))
}

pub async fn cancel_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    let user = admin(&headers)?;
    let id = record_id(id, "appointment")?;
    state.latency.write().await;
    let cancelled = state.service.cancel_appointment(&id)?;
    info!(%id, by = %user.email, "appointment cancelled");
    Ok(Json(cancelled))
}

// ---- homepage documents ----

pub async fn update_hero(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(patch): Json<HeroPatch>,
) -> Result<Json<HeroContent>, ApiError> {
    admin(&headers)?;
    state.latency.write().await;
    Ok(Json(state.service.update_hero(patch)?))
}

pub async fn update_about(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(patch): Json<AboutPatch>,
) -> Result<Json<AboutContent>, ApiError> {
    admin(&headers)?;
    state.latency.write().await;
    Ok(Json(state.service.update_about(patch)?))
}

pub async fn update_contact_info(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(patch): Json<ContactInfoPatch>,
) -> Result<Json<ContactInfo>, ApiError> {
    admin(&headers)?;
    state.latency.write().await;
    Ok(Json(state.service.update_contact_info(patch)?))
}
