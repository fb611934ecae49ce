//! Whether a listing is offered for sale or for rent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of transaction a listing is offered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    /// Stored and wire representation (`SALE` / `RENT`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::Rent => "RENT",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text was neither `SALE` nor `RENT`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown listing type `{0}`")]
pub struct UnknownListingType(pub String);

impl FromStr for ListingType {
    type Err = UnknownListingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALE" => Ok(Self::Sale),
            "RENT" => Ok(Self::Rent),
            other => Err(UnknownListingType(other.to_string())),
        }
    }
}
