//! # Ladder HTTP API Module
//!
//! This module implements the HTTP wizard API using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /roles` - Role catalog and slider scale
//! - `GET /steps/{step}` - Wizard page content for steps 1-8
//! - `GET /assessments/{level}` - Scores, averages and notes for a role
//! - `POST /assessments/{level}/scores` - Set one criterion score
//! - `PUT /assessments/{level}/notes` - Replace qualitative notes
//! - `GET /summary?final_score=literal|mean` - Review page
//! - `GET|PUT /name` - Cached participant name
//! - `GET|PUT /intake` - Intake form
//!
//! ## Configuration (Environment Variables)
//!
//! - `LADDER_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `LADDER_RATE_LIMIT`: Requests per second (default: 50, 0 to disable)

mod handlers;
mod middleware;
mod types;

pub use middleware::{
    DEFAULT_RATE_LIMIT, GlobalRateLimiter, create_rate_limiter, get_rate_limit_from_env,
};
// Re-export handlers and types for integration tests (via `ladder::api::*`)
pub use handlers::{
    assessment_handler, get_intake_handler, get_name_handler, health_handler, notes_handler,
    put_intake_handler, put_name_handler, roles_handler, score_handler, status_for, step_handler,
    summary_handler,
};
pub use types::{
    AssessmentJson, AssessmentResponse, CriterionDefinitionJson, CriterionJson, HealthResponse,
    IntakeResponse, NameJson, NameResponse, NotesRequest, RoleJson, RoleSummaryJson,
    RolesResponse, ScaleJson, ScoreRequest, ScoreResponse, SectionDefinitionJson, SectionJson,
    SectionScoreJson, StepJson, StepResponse, SummaryJson, SummaryQuery, SummaryResponse,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post, put},
};
use ladder_core::{AssessmentSession, LadderError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected (notes are capped at 16KB).
const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the assessment session.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<AssessmentSession>>,
}

impl AppState {
    #[must_use]
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::OPTIONS];

/// Build CORS layer from `LADDER_CORS_ORIGINS`.
///
/// - `*`: allows all origins
/// - unset, or no valid entries: localhost only
/// - otherwise: the comma-separated origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("LADDER_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (LADDER_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in LADDER_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods(ALLOWED_METHODS)
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => {
            tracing::info!("CORS: No LADDER_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// CORS layer that only allows the local wizard front-end.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:8080",
    ]
    .iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/roles", get(handlers::roles_handler))
        .route("/steps/{step}", get(handlers::step_handler))
        .route("/assessments/{level}", get(handlers::assessment_handler))
        .route(
            "/assessments/{level}/scores",
            post(handlers::score_handler),
        )
        .route("/assessments/{level}/notes", put(handlers::notes_handler))
        .route("/summary", get(handlers::summary_handler))
        .route(
            "/name",
            get(handlers::get_name_handler).put(handlers::put_name_handler),
        )
        .route(
            "/intake",
            get(handlers::get_intake_handler).put(handlers::put_intake_handler),
        );

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and serve until Ctrl+C.
pub async fn run_server(addr: &str, session: AssessmentSession) -> Result<(), LadderError> {
    let state = AppState::new(session);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| LadderError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Ladder HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| LadderError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
