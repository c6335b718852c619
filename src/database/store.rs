use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{ContactPerson, Department, Symptom, TrackedCase, User};

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The stored version moved on since the entity was loaded
    #[error("Stale write: {0}")]
    StaleWrite(String),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam shared by the Postgres and in-memory backends.
/// `save_*` methods insert or replace by id. Cases and contacts are versioned:
/// a save only succeeds while the stored version equals the entity's, and
/// bumps the entity's version on success. Otherwise it fails with
/// [`StoreError::StaleWrite`].
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn save_user(&self, user: &User) -> Result<(), StoreError>;

    async fn find_department(&self, id: Uuid) -> Result<Option<Department>, StoreError>;
    async fn save_department(&self, department: &Department) -> Result<(), StoreError>;

    /// Cases of a department ordered by last name, then first name
    async fn cases_of_department(&self, department_id: Uuid) -> Result<Vec<TrackedCase>, StoreError>;
    async fn find_case(&self, id: Uuid) -> Result<Option<TrackedCase>, StoreError>;
    async fn save_case(&self, case: &mut TrackedCase) -> Result<(), StoreError>;

    /// Contacts of a tracked person ordered by last name, then first name
    async fn contacts_of(&self, owner_id: Uuid) -> Result<Vec<ContactPerson>, StoreError>;
    async fn find_contact(&self, id: Uuid) -> Result<Option<ContactPerson>, StoreError>;
    async fn save_contact(&self, contact: &mut ContactPerson) -> Result<(), StoreError>;
    /// Returns whether a contact was removed
    async fn delete_contact(&self, id: Uuid) -> Result<bool, StoreError>;

    /// All symptoms ordered by name
    async fn symptoms(&self) -> Result<Vec<Symptom>, StoreError>;
    async fn find_symptom(&self, id: Uuid) -> Result<Option<Symptom>, StoreError>;
    async fn save_symptom(&self, symptom: &Symptom) -> Result<(), StoreError>;
}
