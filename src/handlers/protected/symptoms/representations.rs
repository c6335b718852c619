use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Symptom;
use crate::hal::Links;

pub const SYMPTOMS_PATH: &str = "/api/symptoms";

pub fn symptom_href(id: Uuid) -> String {
    format!("{}/{}", SYMPTOMS_PATH, id)
}

#[derive(Debug, Deserialize)]
pub struct SymptomInput {
    pub name: String,
    pub characteristic: Option<bool>,
}

impl From<SymptomInput> for Symptom {
    fn from(input: SymptomInput) -> Self {
        Symptom::new(input.name, input.characteristic.unwrap_or(false))
    }
}

#[derive(Debug, Serialize)]
pub struct SymptomDto {
    pub id: Uuid,
    pub name: String,
    pub characteristic: bool,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&Symptom> for SymptomDto {
    fn from(symptom: &Symptom) -> Self {
        Self {
            id: symptom.id,
            name: symptom.name.clone(),
            characteristic: symptom.is_characteristic,
            links: Links::to_self(symptom_href(symptom.id)),
        }
    }
}
