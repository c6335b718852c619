// Domain model: departments and their tracked cases, tracked persons and
// their contacts, symptom reference data and application users

pub mod department;
pub mod reference;
pub mod tracking;
pub mod user;

pub use department::{ActivationCode, CaseStatus, Comment, Department, Enrollment, TrackedCase};
pub use reference::Symptom;
pub use tracking::{Address, ContactPerson, TrackedPerson};
pub use user::{Role, User};

use thiserror::Error;

/// Lifecycle violations raised by domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot {action} a case in status {status:?}")]
    TransitionNotAllowed { action: &'static str, status: CaseStatus },

    #[error("Tracking requires an email address and a date of birth")]
    MissingAccountDetails,
}
