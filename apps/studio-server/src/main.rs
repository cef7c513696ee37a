//! studio-server — HTTP API for the ParsFit studio portal.
//!
//! Serves the public marketing content, demo-credential login with a cookie
//! session, the admin panel API and the member dashboard. All data lives in
//! one in-memory store per process.
//!
//! Run:
//! ```bash
//! # pretty logs (default); PORT optional
//! cargo run -p studio-server
//!
//! # JSON logs, empty store, simulated backend latency
//! LOG_FORMAT=json SEED_DATA=false READ_LATENCY_MS=300 WRITE_LATENCY_MS=500 \
//!   cargo run -p studio-server
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.
//!

mod config;
mod error;
mod routes;
mod session;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use domain::service::ContentService;
use domain::store::SiteStore;
use domain::{Clock, IdGenerator, RecordId};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Clone)]
struct StdClock;
impl Clock for StdClock {
    fn now(&self) -> std::time::SystemTime {
        std::time::SystemTime::now()
    }
}

/// Random v4 UUIDs in simple (hyphen-free) form.
struct UuidIds;
impl IdGenerator for UuidIds {
    fn next_id(&self) -> RecordId {
        RecordId::new(uuid::Uuid::new_v4().simple().to_string()).unwrap_or_default()
    }
}

/// Artificial delay in front of store access, standing in for a remote
/// backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Latency {
    read: Duration,
    write: Duration,
}

impl Latency {
    pub async fn read(&self) {
        if !self.read.is_zero() {
            tokio::time::sleep(self.read).await;
        }
    }

    pub async fn write(&self) {
        if !self.write.is_zero() {
            tokio::time::sleep(self.write).await;
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    service: Arc<ContentService<UuidIds, StdClock>>,
    latency: Latency,
    cookie_secure: bool,
}

impl AppState {
    fn new(store: SiteStore, latency: Latency, cookie_secure: bool) -> Self {
        Self {
            service: Arc::new(ContentService::new(Arc::new(store), UuidIds, StdClock)),
            latency,
            cookie_secure,
        }
    }
}

#[tokio::main]
async fn main() {
    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&cfg);
    cfg.warn_if_insecure();

    let store = if cfg.seed_data {
        SiteStore::seeded()
    } else {
        info!("SEED_DATA=false: starting with an empty store");
        SiteStore::empty()
    };
    let state = AppState::new(
        store,
        Latency {
            read: cfg.read_latency,
            write: cfg.write_latency,
        },
        cfg.session_cookie_secure,
    );

    // CORS - already validated in Config::from_env()
    let cors = if cfg.cors_allow_origin == HeaderValue::from_static("*") {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([cfg.cors_allow_origin.clone()]))
            .allow_credentials(true)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };
    let app = app(state).layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, err = %e, "bind failed");
            std::process::exit(1);
        }
    };
    info!(%addr, "studio-server listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(err = %e, "server error");
        std::process::exit(1);
    }
}

/// Routes plus request-id and tracing middleware.
fn app(state: AppState) -> Router {
    // Request ID header name
    let x_request_id = axum::http::HeaderName::from_static("x-request-id");

    routes::routes()
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .with_state(state)
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn router() -> Router {
        app(AppState::new(SiteStore::seeded(), Latency::default(), false))
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut b = Request::builder().uri(uri);
        if let Some(c) = cookie {
            b = b.header(header::COOKIE, c);
        }
        b.body(Body::empty()).unwrap()
    }

    fn send(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut b = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(c) = cookie {
            b = b.header(header::COOKIE, c);
        }
        b.body(Body::from(body.to_string())).unwrap()
    }

    /// Log in and return the `name=value` pair to send back as a cookie.
    async fn login(router: &Router, email: &str, password: &str) -> String {
        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/auth/login",
                None,
                json!({"email": email, "password": password}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let set_cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_and_request_id() {
        let resp = router().oneshot(get("/health", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("x-request-id").is_some());
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn public_listings() {
        let router = router();
        let resp = router.clone().oneshot(get("/api/home", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let home = body_json(resp).await;
        assert_eq!(home["hero"]["buttonLink"], "/randevu");
        assert_eq!(home["services"].as_array().unwrap().len(), 4);
        assert_eq!(home["blogPosts"][0]["id"], "blog-1");

        let resp = router
            .clone()
            .oneshot(get("/api/blog?category=Beslenme", None))
            .await
            .unwrap();
        let posts = body_json(resp).await;
        assert_eq!(posts.as_array().unwrap().len(), 1);

        let resp = router
            .clone()
            .oneshot(get("/api/blog/beslenme-ve-ems-mukemmel-ikili", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = router
            .oneshot(get("/api/blog/yok-boyle-bir-yazi", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn contact_form_validation() {
        let router = router();
        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/contact",
                None,
                json!({"name": "Ali", "email": "ali@mail.com", "message": "Merhaba"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let resp = router
            .oneshot(send("POST", "/api/contact", None, json!({"email": "bad"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "invalid_input");
        assert_eq!(body["error"]["fields"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn login_me_logout_flow() {
        let router = router();
        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/auth/login",
                None,
                json!({"email": "admin@parsfit.com", "password": "admin123"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let set_cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("currentUser="));
        assert!(set_cookie.contains("HttpOnly"));
        let body = body_json(resp).await;
        assert_eq!(body["redirectTo"], "/admin");
        assert_eq!(body["user"]["role"], "admin");

        let cookie = set_cookie.split(';').next().unwrap().to_string();
        let resp = router
            .clone()
            .oneshot(get("/api/auth/me", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["email"], "admin@parsfit.com");

        let resp = router
            .clone()
            .oneshot(send("POST", "/api/auth/logout", Some(&cookie), json!({})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let cleared = resp.headers().get(header::SET_COOKIE).unwrap();
        assert!(cleared.to_str().unwrap().contains("Max-Age=0"));

        let resp = router.oneshot(get("/api/auth/me", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_rejections() {
        let router = router();
        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/auth/login",
                None,
                json!({"email": "admin@parsfit.com", "password": "wrong-pass"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await["error"]["code"], "invalid_credentials");

        let resp = router
            .oneshot(send(
                "POST",
                "/api/auth/login",
                None,
                json!({"email": "admin", "password": "123"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn admin_api_requires_admin() {
        let router = router();
        let resp = router
            .clone()
            .oneshot(get("/api/admin/branches", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let member = login(&router, "demo@parsfit.com", "demo123").await;
        let resp = router
            .oneshot(get("/api/admin/branches", Some(&member)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(resp).await["error"]["code"], "forbidden");
    }

    #[tokio::test]
    async fn admin_branch_crud() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;

        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/admin/branches",
                Some(&admin),
                json!({
                    "name": "ParsFit™ Etimesgut",
                    "address": "Ankara",
                    "phone": "0312 000 00 00",
                    "email": "etimesgut@parsfit.com",
                    "manager": "Ali Veli",
                    "capacity": 10,
                    "workingHours": {"weekdays": "09:00 - 21:00", "saturday": "09:00 - 18:00", "sunday": "Kapalı"},
                    "openingDate": "2024-06-01"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created = body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 32);

        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                &format!("/api/admin/branches/{}", id),
                Some(&admin),
                json!({"capacity": 12, "isActive": false}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let updated = body_json(resp).await;
        assert_eq!(updated["capacity"], 12);
        assert_eq!(updated["manager"], "Ali Veli");

        // inactive branch is hidden from the public list but kept for admins
        let resp = router
            .clone()
            .oneshot(get("/api/branches", None))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
        let resp = router
            .clone()
            .oneshot(get("/api/admin/branches", Some(&admin)))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 4);

        let resp = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/branches/{}", id))
                    .header(header::COOKIE, &admin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/branches/{}", id))
                    .header(header::COOKIE, &admin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn admin_blog_and_appointments() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;

        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                "/api/admin/blog/blog-2",
                Some(&admin),
                json!({"title": "Zaman Yönetimi ve EMS"}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["slug"], "zaman-yonetimi-ve-ems");

        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/admin/appointments",
                Some(&admin),
                json!({
                    "userId": "2",
                    "userName": "Demo User",
                    "userPhone": "0532 234 56 78",
                    "serviceId": "service-2",
                    "date": "2024-02-01",
                    "time": "13:15"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = router
            .clone()
            .oneshot(send(
                "POST",
                "/api/admin/appointments/apt-1/cancel",
                Some(&admin),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["status"], "cancelled");

        let resp = router
            .oneshot(get("/api/admin/overview", Some(&admin)))
            .await
            .unwrap();
        let overview = body_json(resp).await;
        assert_eq!(overview["scheduledAppointments"], 0);
        assert_eq!(overview["publishedPosts"], 3);
    }

    #[tokio::test]
    async fn admin_document_patch() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;
        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                "/api/admin/hero",
                Some(&admin),
                json!({"subtitle": "Yeni alt başlık"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = router.oneshot(get("/api/hero", None)).await.unwrap();
        let hero = body_json(resp).await;
        assert_eq!(hero["subtitle"], "Yeni alt başlık");
        assert_eq!(hero["title"], "Türkiye'nin En Modern EMS Studio'su");
    }

    #[tokio::test]
    async fn member_dashboard_api() {
        let router = router();
        let resp = router
            .clone()
            .oneshot(get("/api/member/dashboard", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let member = login(&router, "demo@parsfit.com", "demo123").await;
        let resp = router
            .clone()
            .oneshot(get("/api/member/dashboard", Some(&member)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let dash = body_json(resp).await;
        assert_eq!(dash["completedCount"], 1);
        assert_eq!(dash["preferredBranchName"], "Bilinmeyen Şube");

        let coach = login(&router, "elif@parsfit.com", "demo123").await;
        let resp = router
            .oneshot(get("/api/member/dashboard", Some(&coach)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn guarded_pages_redirect() {
        let router = router();
        let resp = router.clone().oneshot(get("/admin", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/giris?next=%2Fadmin"
        );

        let member = login(&router, "demo@parsfit.com", "demo123").await;
        let resp = router
            .clone()
            .oneshot(get("/admin", Some(&member)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/unauthorized"
        );

        // admin passes every role check
        let admin = login(&router, "admin@parsfit.com", "admin123").await;
        let resp = router
            .clone()
            .oneshot(get("/user-dashboard", Some(&admin)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resp = router
            .oneshot(get("/admin", Some(&admin)))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["branches"], 3);
    }

    #[tokio::test]
    async fn malformed_cookie_is_anonymous() {
        let resp = router()
            .oneshot(get("/api/auth/me", Some("currentUser=not-a-session")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    fn delete(uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    /// Copy the first listed record under a new name, rename it, delete it,
    /// and check the list size after each step.
    async fn admin_round_trip(router: &Router, admin: &str, base: &str) {
        let resp = router.clone().oneshot(get(base, Some(admin))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let listed = body_json(resp).await;
        let before = listed.as_array().unwrap().len();

        let mut copy = listed[0].clone();
        copy["name"] = json!("Kopya Kayıt");
        let resp = router
            .clone()
            .oneshot(send("POST", base, Some(admin), copy))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED, "create {}", base);
        let created = body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_ne!(created["id"], listed[0]["id"]);

        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                &format!("{}/{}", base, id),
                Some(admin),
                json!({"name": "Yeni Ad"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "update {}", base);
        let updated = body_json(resp).await;
        assert_eq!(updated["name"], "Yeni Ad");
        assert_eq!(updated["id"], created["id"]);

        let resp = router.clone().oneshot(get(base, Some(admin))).await.unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), before + 1);

        let resp = router
            .clone()
            .oneshot(delete(&format!("{}/{}", base, id), admin))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT, "delete {}", base);

        let resp = router.clone().oneshot(get(base, Some(admin))).await.unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), before);
    }

    #[tokio::test]
    async fn admin_collections_round_trip() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;
        for base in [
            "/api/admin/services",
            "/api/admin/pricing",
            "/api/admin/testimonials",
            "/api/admin/users",
        ] {
            admin_round_trip(&router, &admin, base).await;
        }
    }

    #[tokio::test]
    async fn testimonial_rating_out_of_range_is_rejected() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;
        let resp = router
            .clone()
            .oneshot(get("/api/admin/testimonials", Some(&admin)))
            .await
            .unwrap();
        let mut testimonial = body_json(resp).await[0].clone();

        for rating in [0, 6] {
            testimonial["rating"] = json!(rating);
            let resp = router
                .clone()
                .oneshot(send(
                    "POST",
                    "/api/admin/testimonials",
                    Some(&admin),
                    testimonial.clone(),
                ))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = body_json(resp).await;
            assert_eq!(body["error"]["fields"][0]["field"], "rating");
        }

        let resp = router
            .oneshot(get("/api/testimonials", None))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn about_and_contact_info_patch() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;

        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                "/api/admin/about",
                Some(&admin),
                json!({"title": "Biz Kimiz"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resp = router.clone().oneshot(get("/api/about", None)).await.unwrap();
        let about = body_json(resp).await;
        assert_eq!(about["title"], "Biz Kimiz");
        assert_eq!(about["subtitle"], "EMS Teknolojisinde Öncü");

        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                "/api/admin/contact-info",
                Some(&admin),
                json!({"phone": "0312 999 99 99"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resp = router
            .clone()
            .oneshot(get("/api/contact-info", None))
            .await
            .unwrap();
        let contact = body_json(resp).await;
        assert_eq!(contact["phone"], "0312 999 99 99");
        assert_eq!(contact["email"], "info@parsfit.com");

        let member = login(&router, "demo@parsfit.com", "demo123").await;
        let resp = router
            .oneshot(send(
                "PATCH",
                "/api/admin/about",
                Some(&member),
                json!({"title": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn appointment_patch_rejects_unlisted_time() {
        let router = router();
        let admin = login(&router, "admin@parsfit.com", "admin123").await;
        let resp = router
            .clone()
            .oneshot(send(
                "PATCH",
                "/api/admin/appointments/apt-1",
                Some(&admin),
                json!({"time": "03:17"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = router
            .oneshot(send(
                "PATCH",
                "/api/admin/appointments/apt-1",
                Some(&admin),
                json!({"time": "09:30"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["time"], "09:30");
    }
}
