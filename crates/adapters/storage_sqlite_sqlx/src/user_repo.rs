//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use homestead_app::ports::UserRepository;
use homestead_domain::error::HomesteadError;
use homestead_domain::user::User;

use crate::codec::{decode_id, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let password: String = row.try_get("password")?;
        let name: Option<String> = row.try_get("name")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(User {
            id: decode_id(&id)?,
            email,
            password,
            name,
            created_at: decode_timestamp(&created_at)?,
        }))
    }
}

const INSERT_IF_ABSENT: &str = r"
    INSERT INTO users (id, email, password, name, created_at)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT (email) DO NOTHING
";

const SELECT_FIRST: &str = "SELECT * FROM users ORDER BY created_at ASC, rowid ASC LIMIT 1";
const SELECT_BY_EMAIL: &str = "SELECT * FROM users WHERE email = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn get_first(&self) -> impl Future<Output = Result<Option<User>, HomesteadError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_FIRST)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn create_if_absent(
        &self,
        user: User,
    ) -> impl Future<Output = Result<User, HomesteadError>> + Send {
        let pool = self.pool.clone();
        async move {
            user.validate()?;

            let inserted = sqlx::query(INSERT_IF_ABSENT)
                .bind(user.id.to_string())
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.name)
                .bind(encode_timestamp(user.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?
                .rows_affected();

            if inserted == 0 {
                tracing::debug!(email = %user.email, "user already registered");
            }

            let row: Wrapper = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(&user.email)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }
}
