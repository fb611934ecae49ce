//! Shared application state for axum handlers.

use std::sync::Arc;

use homestead_app::ports::{PropertyRepository, UserRepository};
use homestead_app::services::detail_service::DetailService;
use homestead_app::services::listing_service::ListingService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<UR, PR> {
    /// Create, list and browse listings.
    pub listing_service: Arc<ListingService<UR, PR>>,
    /// Single-listing lookups.
    pub detail_service: Arc<DetailService<PR>>,
}

impl<UR, PR> Clone for AppState<UR, PR> {
    fn clone(&self) -> Self {
        Self {
            listing_service: Arc::clone(&self.listing_service),
            detail_service: Arc::clone(&self.detail_service),
        }
    }
}

impl<UR, PR> AppState<UR, PR>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(listing_service: ListingService<UR, PR>, detail_service: DetailService<PR>) -> Self {
        Self {
            listing_service: Arc::new(listing_service),
            detail_service: Arc::new(detail_service),
        }
    }
}
