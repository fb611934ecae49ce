//! Listing service: use-cases for creating and browsing listings.

use homestead_domain::error::HomesteadError;
use homestead_domain::listing::PropertyListing;
use homestead_domain::property::{NewProperty, Property};
use homestead_domain::user::User;

use crate::ports::{PropertyRepository, UserRepository};

/// Number of listings shown by the browse view.
pub const BROWSE_LIMIT: usize = 20;

/// Application service for creating and listing properties.
pub struct ListingService<UR, PR> {
    users: UR,
    properties: PR,
}

impl<UR, PR> ListingService<UR, PR>
where
    UR: UserRepository,
    PR: PropertyRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(users: UR, properties: PR) -> Self {
        Self { users, properties }
    }

    /// Return the user new listings are attached to.
    ///
    /// That is the earliest registered user; when there is none the
    /// placeholder owner is registered. Registration is keyed on the unique
    /// email, so concurrent first calls all resolve to the same user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn ensure_default_owner(&self) -> Result<User, HomesteadError> {
        if let Some(user) = self.users.get_first().await? {
            return Ok(user);
        }
        let owner = self.users.create_if_absent(User::placeholder()).await?;
        tracing::info!(user_id = %owner.id, email = %owner.email, "placeholder owner ready");
        Ok(owner)
    }

    /// Validate and persist a new listing owned by the default owner.
    ///
    /// # Errors
    ///
    /// Returns [`HomesteadError::Validation`] if the submission breaks a field
    /// constraint, or a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, new_property), fields(title = %new_property.title))]
    pub async fn create_property(
        &self,
        new_property: NewProperty,
    ) -> Result<Property, HomesteadError> {
        new_property.validate()?;
        let owner = self.ensure_default_owner().await?;
        let property = self
            .properties
            .create(new_property.into_property(owner.id))
            .await?;
        tracing::info!(property_id = %property.id, "property listed");
        Ok(property)
    }

    /// List every listing, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_properties(&self) -> Result<Vec<PropertyListing>, HomesteadError> {
        self.properties.get_all().await
    }

    /// List the [`BROWSE_LIMIT`] most recent listings, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn browse_properties(&self) -> Result<Vec<PropertyListing>, HomesteadError> {
        self.properties.get_recent(BROWSE_LIMIT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FailingStore, InMemoryStore};
    use homestead_domain::error::ValidationError;
    use homestead_domain::property::{ImageList, ListingType};
    use homestead_domain::user::PLACEHOLDER_EMAIL;

    fn make_service(store: &InMemoryStore) -> ListingService<InMemoryStore, InMemoryStore> {
        ListingService::new(store.clone(), store.clone())
    }

    fn loft() -> NewProperty {
        NewProperty::builder()
            .title("Loft")
            .price(250_000.0)
            .bedrooms(2)
            .bathrooms(1)
            .sqft(900)
            .listing_type(ListingType::Sale)
            .address("1 Main St")
            .city("Springfield")
            .state("IL")
            .zip_code("62701")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_register_placeholder_owner_when_no_user_exists() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);

        let created = svc.create_property(loft()).await.unwrap();

        let users = store.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, PLACEHOLDER_EMAIL);
        assert_eq!(created.user_id, users[0].id);
    }

    #[tokio::test]
    async fn should_reuse_first_user_when_one_exists() {
        let store = InMemoryStore::default();
        let existing = User::builder()
            .email("agent@example.com")
            .password("pw")
            .build()
            .unwrap();
        store.insert_user(existing.clone());
        let svc = make_service(&store);

        let created = svc.create_property(loft()).await.unwrap();

        assert_eq!(created.user_id, existing.id);
        assert_eq!(store.users().len(), 1);
    }

    #[tokio::test]
    async fn should_register_placeholder_only_once_across_creations() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);

        let first = svc.create_property(loft()).await.unwrap();
        let second = svc.create_property(loft()).await.unwrap();

        assert_eq!(store.users().len(), 1);
        assert_eq!(first.user_id, second.user_id);
    }

    #[tokio::test]
    async fn should_reject_invalid_submission_before_touching_storage() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        let mut submission = loft();
        submission.sqft = -5;

        let result = svc.create_property(submission).await;

        assert!(matches!(
            result,
            Err(HomesteadError::Validation(ValidationError::NegativeCount {
                field: "sqft"
            }))
        ));
        assert!(store.users().is_empty());
        assert!(svc.list_properties().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_submitted_images_in_order() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        let mut submission = loft();
        submission.images = ImageList::new(vec!["a.jpg".into(), "b.jpg".into()]);

        let created = svc.create_property(submission).await.unwrap();

        assert_eq!(created.images.into_inner(), vec!["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn should_list_newest_first_with_owner() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        for title in ["First", "Second", "Third"] {
            let mut submission = loft();
            submission.title = title.to_string();
            svc.create_property(submission).await.unwrap();
        }

        let listings = svc.list_properties().await.unwrap();

        let titles: Vec<&str> = listings.iter().map(|l| l.property.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
        assert!(listings.iter().all(|l| l.user.email == PLACEHOLDER_EMAIL));
    }

    #[tokio::test]
    async fn should_cap_browse_to_limit() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        for _ in 0..(BROWSE_LIMIT + 5) {
            svc.create_property(loft()).await.unwrap();
        }

        assert_eq!(svc.browse_properties().await.unwrap().len(), BROWSE_LIMIT);
        assert_eq!(
            svc.list_properties().await.unwrap().len(),
            BROWSE_LIMIT + 5
        );
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_listing_fails() {
        let svc = ListingService::new(FailingStore, FailingStore);
        let result = svc.list_properties().await;
        assert!(matches!(result, Err(HomesteadError::Storage(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_creation_fails() {
        let svc = ListingService::new(FailingStore, FailingStore);
        let result = svc.create_property(loft()).await;
        assert!(matches!(result, Err(HomesteadError::Storage(_))));
    }
}
