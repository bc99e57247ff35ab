use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::cookies::SessionCookies;
use super::handlers::get_profile::get_profile;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::notes;
use super::handlers::protected::protected;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::middleware::authenticate;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::RefreshServicePort;
use crate::domain::note::ports::NoteServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub refresh_service: Arc<dyn RefreshServicePort>,
    pub note_service: Arc<dyn NoteServicePort>,
    pub cookies: SessionCookies,
}

/// Transport settings applied around every route.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
    pub secure_cookies: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            allowed_origins: Vec::new(),
            secure_cookies: false,
        }
    }
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    refresh_service: Arc<dyn RefreshServicePort>,
    note_service: Arc<dyn NoteServicePort>,
    authenticator: Arc<Authenticator>,
    settings: HttpSettings,
) -> Router {
    let state = AppState {
        auth_service,
        refresh_service,
        note_service,
        cookies: SessionCookies::new(settings.secure_cookies),
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
        .route("/health", get(health));

    let protected_routes = Router::new()
        .route("/protected", get(protected))
        .route("/users/me", get(get_profile))
        .route(
            "/notes",
            get(notes::list_notes)
                .post(notes::create_note)
                .delete(notes::delete_all_notes),
        )
        .route("/notes/completed", delete(notes::delete_completed_notes))
        .route(
            "/notes/:id",
            put(notes::update_note).delete(notes::delete_note),
        )
        .route("/notes/:id/completed", put(notes::mark_completed))
        .route_layer(middleware::from_fn_with_state(authenticator, authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(trace_layer)
        .layer(cors_layer(&settings.allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
}
