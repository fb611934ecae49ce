//! In-memory port implementations shared by the service tests.

use std::sync::{Arc, Mutex};

use homestead_domain::error::HomesteadError;
use homestead_domain::id::PropertyId;
use homestead_domain::listing::{Owner, PropertyListing};
use homestead_domain::property::Property;
use homestead_domain::user::User;

use crate::ports::{PropertyRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    properties: Vec<Property>,
}

impl Tables {
    fn join(&self, property: &Property) -> Option<PropertyListing> {
        let owner = self.users.iter().find(|u| u.id == property.user_id)?;
        Some(PropertyListing {
            property: property.clone(),
            user: Owner {
                name: owner.name.clone(),
                email: owner.email.clone(),
            },
        })
    }

    fn newest_first(&self) -> Vec<PropertyListing> {
        let mut rows: Vec<&Property> = self.properties.iter().rev().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.into_iter().filter_map(|p| self.join(p)).collect()
    }
}

/// Both repositories over one shared set of tables, so joins see owners.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn insert_user(&self, user: User) {
        self.tables.lock().unwrap().users.push(user);
    }

    pub fn users(&self) -> Vec<User> {
        self.tables.lock().unwrap().users.clone()
    }
}

impl UserRepository for InMemoryStore {
    async fn get_first(&self) -> Result<Option<User>, HomesteadError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().min_by_key(|u| u.created_at).cloned())
    }

    async fn create_if_absent(&self, user: User) -> Result<User, HomesteadError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.users.iter().find(|u| u.email == user.email) {
            return Ok(existing.clone());
        }
        tables.users.push(user.clone());
        Ok(user)
    }
}

impl PropertyRepository for InMemoryStore {
    async fn create(&self, property: Property) -> Result<Property, HomesteadError> {
        self.tables
            .lock()
            .unwrap()
            .properties
            .push(property.clone());
        Ok(property)
    }

    async fn get_by_id(&self, id: PropertyId) -> Result<Option<PropertyListing>, HomesteadError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .properties
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| tables.join(p)))
    }

    async fn get_all(&self) -> Result<Vec<PropertyListing>, HomesteadError> {
        Ok(self.tables.lock().unwrap().newest_first())
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<PropertyListing>, HomesteadError> {
        let mut rows = self.tables.lock().unwrap().newest_first();
        rows.truncate(limit);
        Ok(rows)
    }
}

/// Repositories whose every call fails, as an unreachable database would.
pub struct FailingStore;

fn unavailable() -> HomesteadError {
    HomesteadError::Storage(Box::new(std::io::Error::other("database unavailable")))
}

impl UserRepository for FailingStore {
    async fn get_first(&self) -> Result<Option<User>, HomesteadError> {
        Err(unavailable())
    }

    async fn create_if_absent(&self, _user: User) -> Result<User, HomesteadError> {
        Err(unavailable())
    }
}

impl PropertyRepository for FailingStore {
    async fn create(&self, _property: Property) -> Result<Property, HomesteadError> {
        Err(unavailable())
    }

    async fn get_by_id(&self, _id: PropertyId) -> Result<Option<PropertyListing>, HomesteadError> {
        Err(unavailable())
    }

    async fn get_all(&self) -> Result<Vec<PropertyListing>, HomesteadError> {
        Err(unavailable())
    }

    async fn get_recent(&self, _limit: usize) -> Result<Vec<PropertyListing>, HomesteadError> {
        Err(unavailable())
    }
}
