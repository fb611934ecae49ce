//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod properties;

use axum::Router;
use axum::routing::get;

use homestead_app::ports::{PropertyRepository, UserRepository};

use crate::state::AppState;

/// Build the listing API sub-router.
pub fn routes<UR, PR>() -> Router<AppState<UR, PR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/properties",
            get(properties::list::<UR, PR>).post(properties::create::<UR, PR>),
        )
        .route("/properties/recent", get(properties::recent::<UR, PR>))
        .route("/properties/{id}", get(properties::get::<UR, PR>))
}
