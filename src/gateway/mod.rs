//! HTTP gateway: router assembly, CORS, and the serve loop.

pub mod openapi;
pub mod state;

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth;
use crate::config::{AppConfig, CorsConfig};
use crate::notes;
use openapi::ApiDoc;
use state::AppState;

/// Health check
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "Health"
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn origin_allowed(allowed: &[String], origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|o| allowed.iter().any(|a| a == o))
        .unwrap_or(false)
}

/// CORS layer over a fixed origin allow-list.
///
/// Disallowed origins get no Access-Control-Allow-Origin header at
/// all, which browsers treat as a denial.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed: Arc<Vec<String>> = Arc::new(config.allowed_origins.clone());

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &axum::http::request::Parts| {
                origin_allowed(&allowed, origin)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Build the complete router.
///
/// Signup, login, health, and docs are public; everything under
/// /notes passes through the authorization gate.
pub fn build_router(state: Arc<AppState>, cors: &CorsConfig) -> Router {
    let public_routes = Router::new()
        .route("/signup", post(auth::handlers::signup))
        .route("/login", post(auth::handlers::login))
        .route("/health", get(health_check));

    let protected_routes = Router::new()
        .route(
            "/notes",
            post(notes::handlers::create_note).get(notes::handlers::list_notes),
        )
        .route(
            "/notes/{id}",
            put(notes::handlers::update_note).delete(notes::handlers::delete_note),
        )
        .layer(from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Bind the listener and serve until shutdown.
pub async fn run_server(config: &AppConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state, &config.cors);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
