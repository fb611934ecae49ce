//! Ordered list of image URLs attached to a listing.
//!
//! Persisted as a JSON array inside a single text column.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Encoding of a listing without images.
const EMPTY_ENCODING: &str = "[]";

/// Image URLs in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageList(Vec<String>);

impl ImageList {
    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self(urls)
    }

    /// Decode the stored text form.
    ///
    /// Blank text decodes to an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidImageEncoding`] when the text is not a
    /// JSON array of strings.
    pub fn decode(encoded: &str) -> Result<Self, ValidationError> {
        if encoded.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(encoded)
            .map(Self)
            .map_err(|_| ValidationError::InvalidImageEncoding)
    }

    /// Decode a column that may be `NULL`.
    ///
    /// # Errors
    ///
    /// See [`ImageList::decode`].
    pub fn decode_optional(encoded: Option<&str>) -> Result<Self, ValidationError> {
        encoded.map_or_else(|| Ok(Self::default()), Self::decode)
    }

    /// Encode into the stored text form.
    #[must_use]
    pub fn encode(&self) -> String {
        if self.0.is_empty() {
            return EMPTY_ENCODING.to_string();
        }
        serde_json::to_string(&self.0).unwrap_or_else(|_| EMPTY_ENCODING.to_string())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Accepts a JSON array, the legacy encoded-string form, or `null`.
impl<'de> Deserialize<'de> for ImageList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<String>),
            Encoded(String),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(Repr::List(urls)) => Ok(Self(urls)),
            Some(Repr::Encoded(text)) => Self::decode(&text).map_err(serde::de::Error::custom),
        }
    }
}
