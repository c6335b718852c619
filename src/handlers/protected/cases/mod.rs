// Tracked cases of the caller's department

pub mod collection;
pub mod comments;
pub mod record;
pub mod registration;
pub mod representations;

pub use collection::{create, list};
pub use comments::add_comment;
pub use record::{conclude, show, update};
pub use registration::{renew, show as registration_show, start_tracking};

use uuid::Uuid;

use crate::app::AppState;
use crate::domain::TrackedCase;
use crate::error::ApiError;

/// Cases of other departments are reported as missing
pub(crate) async fn load_case(state: &AppState, department_id: Uuid, id: Uuid) -> Result<TrackedCase, ApiError> {
    match state.store.find_case(id).await? {
        Some(case) if case.belongs_to(department_id) => Ok(case),
        _ => Err(ApiError::not_found(format!("Case {} not found", id))),
    }
}
