// Contact persons of the calling tracked person

pub mod collection;
pub mod record;
pub mod representations;

pub use collection::{create, list};
pub use record::{delete, show, update};

use uuid::Uuid;

use crate::app::AppState;
use crate::domain::ContactPerson;
use crate::error::ApiError;

/// Another person's contacts are reported as missing
pub(crate) async fn load_contact(state: &AppState, owner_id: Uuid, id: Uuid) -> Result<ContactPerson, ApiError> {
    match state.store.find_contact(id).await? {
        Some(contact) if contact.belongs_to(owner_id) => Ok(contact),
        _ => Err(ApiError::not_found(format!("Contact {} not found", id))),
    }
}
