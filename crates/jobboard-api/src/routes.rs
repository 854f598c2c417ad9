//! Router assembly

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use jobboard_shared::constants::UPLOADS_ROUTE;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{
    cors_layer, make_request_span, rate_limit_auth, request_id, request_logging, AuthRateLimiter,
};
use crate::state::AppState;

/// Multipart framing on top of the configured file size.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

fn auth_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::me));

    match AuthRateLimiter::per_minute(state.config.rate_limit.auth_requests_per_minute) {
        Some(limiter) => router.layer(middleware::from_fn_with_state(limiter, rate_limit_auth)),
        None => router,
    }
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::jobs::list_jobs).post(handlers::jobs::create_job))
        .route("/employer", get(handlers::jobs::employer_jobs))
        .route(
            "/{id}",
            get(handlers::jobs::get_job)
                .put(handlers::jobs::update_job)
                .delete(handlers::jobs::delete_job),
        )
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::companies::recent_companies).post(handlers::companies::create_company),
        )
        .route("/my-companies", get(handlers::companies::my_companies))
        .route(
            "/{id}",
            get(handlers::companies::get_company).put(handlers::companies::update_company),
        )
}

fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::applications::apply))
        .route("/my", get(handlers::applications::my_applications))
        .route("/employer", get(handlers::applications::employer_applications))
        .route("/job/{job_id}", get(handlers::applications::job_applications))
        .route("/{id}/status", put(handlers::applications::update_status))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::admin::stats))
        .route("/users", get(handlers::admin::list_users))
        .route(
            "/users/{id}",
            get(handlers::admin::get_user).delete(handlers::admin::delete_user),
        )
}

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_file_size_bytes + UPLOAD_OVERHEAD_BYTES;

    let api = Router::new()
        .nest("/auth", auth_routes(&state))
        .nest("/jobs", job_routes())
        .nest("/companies", company_routes())
        .nest("/applications", application_routes())
        .nest("/admin", admin_routes())
        .route(
            "/users/profile",
            get(handlers::users::get_profile).put(handlers::users::update_profile),
        )
        .route("/upload", post(handlers::upload::upload_handler));

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .nest("/api", api)
        .nest_service(UPLOADS_ROUTE, ServeDir::new(state.upload_dir()))
        .layer(middleware::from_fn(request_logging))
        .layer(middleware::from_fn(request_id))
        .layer(cors_layer(&state.config.app.cors_origins))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
