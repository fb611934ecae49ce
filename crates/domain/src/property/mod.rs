//! Property: a real-estate listing offered for sale or rent.
//!
//! A [`Property`] is always owned by exactly one [`User`](crate::user::User).
//! New listings enter the system as a [`NewProperty`], which carries the
//! submitted fields and is validated before anything reaches storage.

mod images;
mod listing_type;

pub use images::ImageList;
pub use listing_type::{ListingType, UnknownListingType};

use serde::{Deserialize, Serialize};

use crate::error::{HomesteadError, ValidationError};
use crate::id::{PropertyId, UserId};
use crate::time::{self, Timestamp};

/// A persisted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sqft: i64,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(default)]
    pub images: ImageList,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

/// Fields submitted when listing a property.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sqft: i64,
    pub listing_type: ListingType,
    pub images: ImageList,
}

impl NewProperty {
    /// Create a builder for constructing a [`NewProperty`].
    #[must_use]
    pub fn builder() -> NewPropertyBuilder {
        NewPropertyBuilder::default()
    }

    /// Check field-level constraints.
    ///
    /// # Errors
    ///
    /// Returns [`HomesteadError::Validation`] when:
    /// - `title` is blank ([`ValidationError::EmptyTitle`])
    /// - `price` is negative, NaN or infinite ([`ValidationError::InvalidPrice`])
    /// - `bedrooms`, `bathrooms` or `sqft` is negative
    ///   ([`ValidationError::NegativeCount`])
    pub fn validate(&self) -> Result<(), HomesteadError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice.into());
        }
        for (field, value) in [
            ("bedrooms", self.bedrooms),
            ("bathrooms", self.bathrooms),
            ("sqft", self.sqft),
        ] {
            if value < 0 {
                return Err(ValidationError::NegativeCount { field }.into());
            }
        }
        Ok(())
    }

    /// Turn the submission into a listing owned by `owner`, stamped now.
    #[must_use]
    pub fn into_property(self, owner: UserId) -> Property {
        Property {
            id: PropertyId::new(),
            title: self.title,
            description: self.description,
            price: self.price,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft: self.sqft,
            listing_type: self.listing_type,
            images: self.images,
            user_id: owner,
            created_at: time::now(),
        }
    }
}

/// Step-by-step builder for [`NewProperty`].
#[derive(Debug, Default)]
pub struct NewPropertyBuilder {
    title: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    bedrooms: Option<i64>,
    bathrooms: Option<i64>,
    sqft: Option<i64>,
    listing_type: Option<ListingType>,
    images: Option<ImageList>,
}

impl NewPropertyBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    #[must_use]
    pub fn bedrooms(mut self, bedrooms: i64) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    #[must_use]
    pub fn bathrooms(mut self, bathrooms: i64) -> Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    #[must_use]
    pub fn sqft(mut self, sqft: i64) -> Self {
        self.sqft = Some(sqft);
        self
    }

    #[must_use]
    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = Some(listing_type);
        self
    }

    #[must_use]
    pub fn images(mut self, images: ImageList) -> Self {
        self.images = Some(images);
        self
    }

    /// Consume the builder, validate, and return a [`NewProperty`].
    ///
    /// Unset text fields default to empty, numbers to zero, the listing type
    /// to [`ListingType::Sale`] and the image list to empty.
    ///
    /// # Errors
    ///
    /// Returns [`HomesteadError::Validation`] if any constraint checked by
    /// [`NewProperty::validate`] fails.
    pub fn build(self) -> Result<NewProperty, HomesteadError> {
        let new_property = NewProperty {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            zip_code: self.zip_code.unwrap_or_default(),
            bedrooms: self.bedrooms.unwrap_or_default(),
            bathrooms: self.bathrooms.unwrap_or_default(),
            sqft: self.sqft.unwrap_or_default(),
            listing_type: self.listing_type.unwrap_or(ListingType::Sale),
            images: self.images.unwrap_or_default(),
        };
        new_property.validate()?;
        Ok(new_property)
    }
}
