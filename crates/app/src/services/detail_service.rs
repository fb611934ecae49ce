//! Detail service: use-case for viewing a single listing.

use homestead_domain::error::{HomesteadError, NotFoundError};
use homestead_domain::id::PropertyId;
use homestead_domain::listing::PropertyListing;

use crate::ports::PropertyRepository;

/// Application service for single-listing lookups.
pub struct DetailService<R> {
    repo: R,
}

impl<R: PropertyRepository> DetailService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a listing by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomesteadError::NotFound`] when no listing with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_property(&self, id: PropertyId) -> Result<PropertyListing, HomesteadError> {
        self.find_property(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Property",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a listing by id, treating absence as a normal outcome.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_property(
        &self,
        id: PropertyId,
    ) -> Result<Option<PropertyListing>, HomesteadError> {
        self.repo.get_by_id(id).await
    }
}
