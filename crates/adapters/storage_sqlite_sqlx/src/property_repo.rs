//! `SQLite` implementation of [`PropertyRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use homestead_app::ports::PropertyRepository;
use homestead_domain::error::HomesteadError;
use homestead_domain::id::PropertyId;
use homestead_domain::listing::{Owner, PropertyListing};
use homestead_domain::property::{ImageList, ListingType, Property};

use crate::codec::{decode_id, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting joined rows into domain [`PropertyListing`].
struct Wrapper(PropertyListing);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<PropertyListing> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let listing_type: String = row.try_get("type")?;
        let images: Option<String> = row.try_get("images")?;
        let user_id: String = row.try_get("user_id")?;
        let created_at: String = row.try_get("created_at")?;

        let listing_type: ListingType = listing_type
            .parse()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let images = ImageList::decode_optional(images.as_deref())
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        let property = Property {
            id: decode_id(&id)?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            bedrooms: row.try_get("bedrooms")?,
            bathrooms: row.try_get("bathrooms")?,
            sqft: row.try_get("sqft")?,
            listing_type,
            images,
            user_id: decode_id(&user_id)?,
            created_at: decode_timestamp(&created_at)?,
        };
        let user = Owner {
            name: row.try_get("owner_name")?,
            email: row.try_get("owner_email")?,
        };

        Ok(Self(PropertyListing { property, user }))
    }
}

const INSERT: &str = r"
    INSERT INTO properties (
        id, title, description, price, address, city, state, zip_code,
        bedrooms, bathrooms, sqft, type, images, user_id, created_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = r"
    SELECT p.*, u.name AS owner_name, u.email AS owner_email
    FROM properties p
    INNER JOIN users u ON u.id = p.user_id
    WHERE p.id = ?
";

const SELECT_ALL: &str = r"
    SELECT p.*, u.name AS owner_name, u.email AS owner_email
    FROM properties p
    INNER JOIN users u ON u.id = p.user_id
    ORDER BY p.created_at DESC, p.rowid DESC
";

const SELECT_RECENT: &str = r"
    SELECT p.*, u.name AS owner_name, u.email AS owner_email
    FROM properties p
    INNER JOIN users u ON u.id = p.user_id
    ORDER BY p.created_at DESC, p.rowid DESC
    LIMIT ?
";

/// `SQLite`-backed property repository.
pub struct SqlitePropertyRepository {
    pool: SqlitePool,
}

impl SqlitePropertyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PropertyRepository for SqlitePropertyRepository {
    fn create(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, HomesteadError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(property.id.to_string())
                .bind(&property.title)
                .bind(&property.description)
                .bind(property.price)
                .bind(&property.address)
                .bind(&property.city)
                .bind(&property.state)
                .bind(&property.zip_code)
                .bind(property.bedrooms)
                .bind(property.bathrooms)
                .bind(property.sqft)
                .bind(property.listing_type.as_str())
                .bind(property.images.encode())
                .bind(property.user_id.to_string())
                .bind(encode_timestamp(property.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(property)
        }
    }

    fn get_by_id(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Option<PropertyListing>, HomesteadError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<PropertyListing>, HomesteadError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<PropertyListing>, HomesteadError>> + Send {
        let pool = self.pool.clone();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_RECENT)
                .bind(limit)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
