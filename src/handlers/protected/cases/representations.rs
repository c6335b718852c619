use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ActivationCode, CaseStatus, Comment, TrackedCase, TrackedPerson};
use crate::hal::{LinkRelation, Links};

pub const CASES_PATH: &str = "/api/hd/cases";

pub fn case_href(id: Uuid) -> String {
    format!("{}/{}", CASES_PATH, id)
}

pub fn comments_href(id: Uuid) -> String {
    format!("{}/{}/comments", CASES_PATH, id)
}

pub fn registration_href(id: Uuid) -> String {
    format!("{}/{}/registration", CASES_PATH, id)
}

pub fn renewal_href(id: Uuid) -> String {
    format!("{}/{}/registration/renewal", CASES_PATH, id)
}

/// Lifecycle actions are only linked while the case allows them
pub fn case_links(case: &TrackedCase) -> Links {
    Links::to_self(case_href(case.id))
        .and_if(case.can_start_tracking(), LinkRelation::START_TRACKING, || {
            registration_href(case.id)
        })
        .and_if(case.can_renew(), LinkRelation::RENEW, || renewal_href(case.id))
        .and_if(case.can_conclude(), LinkRelation::CONCLUDE, || case_href(case.id))
        .and(LinkRelation::COMMENTS, comments_href(case.id))
}

/// Case payload as accepted by the observer pipeline
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedCaseInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub test_date: NaiveDate,
    pub quarantine_start_date: NaiveDate,
    pub quarantine_end_date: NaiveDate,
    pub infected: Option<bool>,
}

impl TrackedCaseInput {
    pub fn into_case(self, department_id: Uuid) -> TrackedCase {
        let mut case = TrackedCase::new(
            TrackedPerson::new(self.first_name.clone(), self.last_name.clone()),
            department_id,
            self.test_date,
            self.quarantine_start_date,
            self.quarantine_end_date,
        );
        self.apply_to(&mut case);
        case
    }

    /// Replaces every client-owned field of the case
    pub fn apply_to(self, case: &mut TrackedCase) {
        let person = &mut case.person;
        person.first_name = self.first_name;
        person.last_name = self.last_name;
        person.date_of_birth = self.date_of_birth;
        person.email = self.email;
        person.phone = self.phone;
        person.mobile_phone = self.mobile_phone;
        person.address.street = self.street;
        person.address.house_number = self.house_number;
        person.address.zip_code = self.zip_code;
        person.address.city = self.city;

        case.test_date = self.test_date;
        case.quarantine_start = self.quarantine_start_date;
        case.quarantine_end = self.quarantine_end_date;
        case.infected = self.infected.unwrap_or(case.infected);
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentInput {
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub comment: String,
    pub date: DateTime<Utc>,
    pub author: String,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            comment: comment.text.clone(),
            date: comment.date,
            author: comment.author.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedCaseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub test_date: NaiveDate,
    pub quarantine_start_date: NaiveDate,
    pub quarantine_end_date: NaiveDate,
    pub infected: bool,
    pub status: CaseStatus,
    pub enrollment_completed: bool,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&TrackedCase> for TrackedCaseDto {
    fn from(case: &TrackedCase) -> Self {
        let person = &case.person;
        Self {
            id: case.id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            date_of_birth: person.date_of_birth,
            email: person.email.clone(),
            phone: person.phone.clone(),
            mobile_phone: person.mobile_phone.clone(),
            street: person.address.street.clone(),
            house_number: person.address.house_number.clone(),
            zip_code: person.address.zip_code.clone(),
            city: person.address.city.clone(),
            test_date: case.test_date,
            quarantine_start_date: case.quarantine_start,
            quarantine_end_date: case.quarantine_end,
            infected: case.infected,
            status: case.status,
            enrollment_completed: case.enrollment.is_completed(),
            comments: case.comments.iter().map(CommentDto::from).collect(),
            created_at: case.created_at,
            links: case_links(case),
        }
    }
}

/// Trimmed representation for pick lists (`?projection=select`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedCaseSelect {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&TrackedCase> for TrackedCaseSelect {
    fn from(case: &TrackedCase) -> Self {
        Self {
            first_name: case.person.first_name.clone(),
            last_name: case.person.last_name.clone(),
            date_of_birth: case.person.date_of_birth,
            links: Links::to_self(case_href(case.id)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationDto {
    pub code: Uuid,
    pub expiration_time: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ActivationDto {
    pub fn new(case_id: Uuid, activation: &ActivationCode) -> Self {
        Self {
            code: activation.code,
            expiration_time: activation.expires_at,
            links: Links::to_self(registration_href(case_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::Value;

    fn relations(links: &Links) -> Vec<String> {
        match serde_json::to_value(links).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("links serialized as {}", other),
        }
    }

    fn open_case() -> TrackedCase {
        let day = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        TrackedCase::new(TrackedPerson::new("Markus", "Hanser"), Uuid::new_v4(), day, day, day)
    }

    #[test]
    fn open_case_without_account_details_only_concludes() {
        let links = case_links(&open_case());

        assert_eq!(relations(&links), vec!["comments", "conclude", "self"]);
    }

    #[test]
    fn links_follow_the_lifecycle() {
        let mut case = open_case();
        case.person.email = Some("markus@example.com".into());
        case.person.date_of_birth = NaiveDate::from_ymd_opt(1988, 11, 2);

        let links = serde_json::to_value(case_links(&case)).unwrap();
        assert_eq!(links[LinkRelation::START_TRACKING]["href"], registration_href(case.id));

        case.start_tracking(Utc::now(), Duration::hours(72)).unwrap();
        assert_eq!(relations(&case_links(&case)), vec!["comments", "conclude", "renew", "self"]);

        case.conclude().unwrap();
        assert_eq!(relations(&case_links(&case)), vec!["comments", "self"]);
    }
}
