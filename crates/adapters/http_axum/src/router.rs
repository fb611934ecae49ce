//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homestead_app::ports::{PropertyRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the listing API at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, PR>(state: AppState<UR, PR>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
