use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ContactPerson;
use crate::hal::Links;

pub const CONTACTS_PATH: &str = "/api/contacts";

pub fn contact_href(id: Uuid) -> String {
    format!("{}/{}", CONTACTS_PATH, id)
}

/// Contact payload as accepted by the observer pipeline, every field optional
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub identification_hint: Option<String>,
    pub is_health_staff: Option<bool>,
    pub is_senior: Option<bool>,
    pub has_pre_existing_conditions: Option<bool>,
    pub remark: Option<String>,
}

impl ContactInput {
    pub fn into_contact(self, owner_id: Uuid) -> ContactPerson {
        let mut contact = ContactPerson::new(owner_id);
        self.apply_to(&mut contact);
        contact
    }

    pub fn apply_to(self, contact: &mut ContactPerson) {
        contact.first_name = self.first_name;
        contact.last_name = self.last_name;
        contact.email = self.email;
        contact.phone = self.phone;
        contact.mobile_phone = self.mobile_phone;
        contact.address.street = self.street;
        contact.address.house_number = self.house_number;
        contact.address.zip_code = self.zip_code;
        contact.address.city = self.city;
        contact.identification_hint = self.identification_hint;
        contact.is_health_staff = self.is_health_staff;
        contact.is_senior = self.is_senior;
        contact.has_pre_existing_conditions = self.has_pre_existing_conditions;
        contact.remark = self.remark;
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub identification_hint: Option<String>,
    pub is_health_staff: Option<bool>,
    pub is_senior: Option<bool>,
    pub has_pre_existing_conditions: Option<bool>,
    pub remark: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&ContactPerson> for ContactDto {
    fn from(contact: &ContactPerson) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            mobile_phone: contact.mobile_phone.clone(),
            street: contact.address.street.clone(),
            house_number: contact.address.house_number.clone(),
            zip_code: contact.address.zip_code.clone(),
            city: contact.address.city.clone(),
            identification_hint: contact.identification_hint.clone(),
            is_health_staff: contact.is_health_staff,
            is_senior: contact.is_senior,
            has_pre_existing_conditions: contact.has_pre_existing_conditions,
            remark: contact.remark.clone(),
            created_at: contact.created_at,
            links: Links::to_self(contact_href(contact.id)),
        }
    }
}
