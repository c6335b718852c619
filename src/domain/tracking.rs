use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

/// The person a tracked case is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPerson {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub address: Address,
    pub date_of_birth: Option<NaiveDate>,
}

impl TrackedPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            mobile_phone: None,
            address: Address::default(),
            date_of_birth: None,
        }
    }

    /// Email and date of birth are needed to register an account for the person
    pub fn has_account_details(&self) -> bool {
        self.email.is_some() && self.date_of_birth.is_some()
    }
}

/// Somebody a tracked person has been in contact with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub address: Address,
    pub identification_hint: Option<String>,
    pub is_health_staff: Option<bool>,
    pub is_senior: Option<bool>,
    pub has_pre_existing_conditions: Option<bool>,
    pub remark: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Bumped by every successful save
    #[serde(default)]
    pub version: i64,
}

impl ContactPerson {
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            mobile_phone: None,
            address: Address::default(),
            identification_hint: None,
            is_health_staff: None,
            is_senior: None,
            has_pre_existing_conditions: None,
            remark: None,
            created_at: Utc::now(),
            version: 0,
        }
    }

    pub fn belongs_to(&self, person_id: Uuid) -> bool {
        self.owner_id == person_id
    }

    /// Display name used for sorting, last name first
    pub fn sort_key(&self) -> (String, String) {
        (
            self.last_name.clone().unwrap_or_default().to_lowercase(),
            self.first_name.clone().unwrap_or_default().to_lowercase(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_details_need_email_and_birth_date() {
        let mut person = TrackedPerson::new("Michael", "Mustermann");
        assert!(!person.has_account_details());

        person.email = Some("michael@mustermann.de".into());
        assert!(!person.has_account_details());

        person.date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1);
        assert!(person.has_account_details());
    }

    #[test]
    fn contacts_are_owned() {
        let owner = Uuid::new_v4();
        let contact = ContactPerson::new(owner);
        assert!(contact.belongs_to(owner));
        assert!(!contact.belongs_to(Uuid::new_v4()));
    }
}
