// Symptom reference data, readable and extendable by every signed-in role

pub mod collection;
pub mod record;
pub mod representations;

pub use collection::{create, list};
pub use record::show;
