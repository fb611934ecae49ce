//! Read model: a property joined with a summary of its owner.

use serde::{Deserialize, Serialize};

use crate::property::Property;

/// Contact details of the user who owns a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: Option<String>,
    pub email: String,
}

/// A [`Property`] as returned by list and detail reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub user: Owner,
}
