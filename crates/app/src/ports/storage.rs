//! Storage port: repository traits for persistence.

use std::future::Future;

use homestead_domain::error::HomesteadError;
use homestead_domain::id::PropertyId;
use homestead_domain::listing::PropertyListing;
use homestead_domain::property::Property;
use homestead_domain::user::User;

/// Repository for looking up and registering [`User`]s.
pub trait UserRepository {
    /// Get the earliest-registered user, if any.
    fn get_first(&self) -> impl Future<Output = Result<Option<User>, HomesteadError>> + Send;

    /// Insert `user` unless a user with the same email already exists, then
    /// return whichever row owns that email.
    ///
    /// Must be safe to call concurrently: every caller racing on the same
    /// email observes the same stored user.
    fn create_if_absent(
        &self,
        user: User,
    ) -> impl Future<Output = Result<User, HomesteadError>> + Send;
}

/// Repository for persisting and querying [`Property`] listings.
pub trait PropertyRepository {
    /// Insert a new listing. The owner must already exist.
    fn create(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, HomesteadError>> + Send;

    /// Get a listing, joined with its owner, by its unique identifier.
    fn get_by_id(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Option<PropertyListing>, HomesteadError>> + Send;

    /// Get every listing, ordered newest-first.
    fn get_all(&self)
    -> impl Future<Output = Result<Vec<PropertyListing>, HomesteadError>> + Send;

    /// Get the most recent listings, ordered newest-first.
    fn get_recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<PropertyListing>, HomesteadError>> + Send;
}
