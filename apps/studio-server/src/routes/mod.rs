pub mod admin;
pub mod auth;
pub mod member;
pub mod public;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::AppState;

/// Every route the server answers, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(public::health))
        // public site
        .route("/api/home", get(public::home))
        .route("/api/branches", get(public::branches))
        .route("/api/hero", get(public::hero))
        .route("/api/about", get(public::about))
        .route("/api/services", get(public::services))
        .route("/api/pricing", get(public::pricing))
        .route("/api/testimonials", get(public::testimonials))
        .route("/api/blog", get(public::blog))
        .route("/api/blog/:slug", get(public::blog_post))
        .route("/api/contact-info", get(public::contact_info))
        .route("/api/contact", post(public::contact))
        // session
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // admin panel
        .route("/api/admin/overview", get(admin::overview))
        .route(
            "/api/admin/branches",
            get(admin::list_branches).post(admin::create_branch),
        )
        .route(
            "/api/admin/branches/:id",
            patch(admin::update_branch).delete(admin::delete_branch),
        )
        .route(
            "/api/admin/services",
            get(admin::list_services).post(admin::create_service),
        )
        .route(
            "/api/admin/services/:id",
            patch(admin::update_service).delete(admin::delete_service),
        )
        .route(
            "/api/admin/pricing",
            get(admin::list_pricing).post(admin::create_pricing),
        )
        .route(
            "/api/admin/pricing/:id",
            patch(admin::update_pricing).delete(admin::delete_pricing),
        )
        .route(
            "/api/admin/testimonials",
            get(admin::list_testimonials).post(admin::create_testimonial),
        )
        .route(
            "/api/admin/testimonials/:id",
            patch(admin::update_testimonial).delete(admin::delete_testimonial),
        )
        .route(
            "/api/admin/blog",
            get(admin::list_posts).post(admin::create_post),
        )
        .route(
            "/api/admin/blog/:id",
            patch(admin::update_post).delete(admin::delete_post),
        )
        .route(
            "/api/admin/users",
            get(admin::list_users).post(admin::create_user),
        )
        .route(
            "/api/admin/users/:id",
            patch(admin::update_user).delete(admin::delete_user),
        )
        .route(
            "/api/admin/appointments",
            get(admin::list_appointments).post(admin::create_appointment),
        )
        .route(
            "/api/admin/appointments/:id",
            patch(admin::update_appointment),
        )
        .route(
            "/api/admin/appointments/:id/cancel",
            post(admin::cancel_appointment),
        )
        .route("/api/admin/hero", patch(admin::update_hero))
        .route("/api/admin/about", patch(admin::update_about))
        .route("/api/admin/contact-info", patch(admin::update_contact_info))
        // members
        .route("/api/member/dashboard", get(member::dashboard))
        // guarded pages
        .route("/admin", get(member::admin_page))
        .route("/user-dashboard", get(member::user_dashboard_page))
}
