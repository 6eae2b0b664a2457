//! # sgate-api — Axum Service Facade
//!
//! The HTTP surface of the SchoolsGate Stack. Route handlers contain no
//! decision logic — they resolve records through the registry, delegate to
//! the engine crates, persist the results, and map errors to structured
//! HTTP responses.
//!
//! ## API Surface
//!
//! | Route                               | Module                  | Operation |
//! |-------------------------------------|-------------------------|-----------|
//! | `POST /api/schools`                 | [`routes::institutions`]| Create institution + bootstrap policies |
//! | `POST /api/students/register`       | [`routes::students`]    | Register student, issue credential |
//! | `GET /api/restrictions/{school_id}` | [`routes::policies`]    | List policy entries |
//! | `PUT /api/restrictions/{school_id}` | [`routes::policies`]    | Best-effort bulk update |
//! | `POST /api/verify-location`         | [`routes::presence`]    | Presence decision |
//! | `GET /openapi.json`                 | [`openapi`]             | Generated OpenAPI spec |
//! | `GET /health/liveness`, `/health/readiness` | (here)          | Probes |
//!
//! ## Middleware Stack (Tower)
//!
//! `TraceLayer` → `CorsLayer` (permissive — device tooling calls from
//! arbitrary origins) → handlers. Health probes are mounted outside the
//! middleware stack.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::institutions::router())
        .merge(routes::students::router())
        .merge(routes::policies::router())
        .merge(routes::presence::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// GET /health/liveness — process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness — ready to serve. The in-memory registry has no
/// external dependency to probe.
async fn readiness() -> &'static str {
    "ready"
}
