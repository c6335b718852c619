use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference data a tracked person reports in diary entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub is_characteristic: bool,
}

impl Symptom {
    pub fn new(name: impl Into<String>, is_characteristic: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_characteristic,
        }
    }
}
