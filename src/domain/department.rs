use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::tracking::TrackedPerson;
use crate::domain::DomainError;

/// A health department, owner of the cases its agents work on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
}

impl Department {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Case lifecycle: Open → InRegistration → Tracking → Concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    Open,
    InRegistration,
    Tracking,
    Concluded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub completed: bool,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Code a tracked person activates their account with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationCode {
    pub code: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl ActivationCode {
    fn issue(now: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            code: Uuid::new_v4(),
            expires_at: now.checked_add_signed(validity).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub date: DateTime<Utc>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedCase {
    pub id: Uuid,
    pub person: TrackedPerson,
    pub department_id: Uuid,
    pub test_date: NaiveDate,
    pub quarantine_start: NaiveDate,
    pub quarantine_end: NaiveDate,
    pub infected: bool,
    pub status: CaseStatus,
    pub enrollment: Enrollment,
    pub activation: Option<ActivationCode>,
    /// Newest first
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    /// Bumped by every successful save
    #[serde(default)]
    pub version: i64,
}

impl TrackedCase {
    pub fn new(
        person: TrackedPerson,
        department_id: Uuid,
        test_date: NaiveDate,
        quarantine_start: NaiveDate,
        quarantine_end: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person,
            department_id,
            test_date,
            quarantine_start,
            quarantine_end,
            infected: false,
            status: CaseStatus::Open,
            enrollment: Enrollment::default(),
            activation: None,
            comments: Vec::new(),
            created_at: Utc::now(),
            version: 0,
        }
    }

    pub fn belongs_to(&self, department_id: Uuid) -> bool {
        self.department_id == department_id
    }

    pub fn is_concluded(&self) -> bool {
        self.status == CaseStatus::Concluded
    }

    pub fn can_start_tracking(&self) -> bool {
        self.status == CaseStatus::Open && self.person.has_account_details()
    }

    /// Issues the first activation code and moves the case into registration
    pub fn start_tracking(&mut self, now: DateTime<Utc>, validity: Duration) -> Result<&ActivationCode, DomainError> {
        if self.status != CaseStatus::Open {
            return Err(DomainError::TransitionNotAllowed {
                action: "start tracking",
                status: self.status,
            });
        }
        if !self.person.has_account_details() {
            return Err(DomainError::MissingAccountDetails);
        }

        self.status = CaseStatus::InRegistration;
        Ok(&*self.activation.insert(ActivationCode::issue(now, validity)))
    }

    pub fn can_renew(&self) -> bool {
        self.status == CaseStatus::InRegistration
    }

    /// Replaces the pending activation code with a fresh one
    pub fn renew(&mut self, now: DateTime<Utc>, validity: Duration) -> Result<&ActivationCode, DomainError> {
        if !self.can_renew() {
            return Err(DomainError::TransitionNotAllowed {
                action: "renew the registration of",
                status: self.status,
            });
        }

        Ok(&*self.activation.insert(ActivationCode::issue(now, validity)))
    }

    pub fn can_conclude(&self) -> bool {
        !self.is_concluded()
    }

    pub fn conclude(&mut self) -> Result<(), DomainError> {
        if !self.can_conclude() {
            return Err(DomainError::TransitionNotAllowed {
                action: "conclude",
                status: self.status,
            });
        }

        self.status = CaseStatus::Concluded;
        self.activation = None;
        Ok(())
    }

    /// Marks the person's enrollment as done, the case is tracked from now on
    pub fn complete_enrollment(&mut self) -> Result<(), DomainError> {
        if self.is_concluded() {
            return Err(DomainError::TransitionNotAllowed {
                action: "complete the enrollment of",
                status: self.status,
            });
        }

        self.enrollment.completed = true;
        self.activation = None;
        self.status = CaseStatus::Tracking;
        Ok(())
    }

    pub fn add_comment(&mut self, author: impl Into<String>, text: impl Into<String>, now: DateTime<Utc>) {
        self.comments.insert(
            0,
            Comment {
                author: author.into(),
                date: now,
                text: text.into(),
            },
        );
    }

    /// Ordering used for case lists: last name, then first name
    pub fn sort_key(&self) -> (String, String) {
        (self.person.last_name.to_lowercase(), self.person.first_name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case() -> TrackedCase {
        let today = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        TrackedCase::new(
            TrackedPerson::new("Michael", "Mustermann"),
            Uuid::new_v4(),
            today,
            today,
            today + Duration::days(14),
        )
    }

    fn with_account_details(mut case: TrackedCase) -> TrackedCase {
        case.person.email = Some("michael@mustermann.de".into());
        case.person.date_of_birth = NaiveDate::from_ymd_opt(1980, 5, 3);
        case
    }

    #[test]
    fn tracking_requires_account_details() {
        let mut case = case();
        assert!(!case.can_start_tracking());
        assert_eq!(
            case.start_tracking(Utc::now(), Duration::hours(1)),
            Err(DomainError::MissingAccountDetails)
        );
        assert_eq!(case.status, CaseStatus::Open);
    }

    #[test]
    fn walks_through_the_lifecycle() {
        let mut case = with_account_details(case());
        let now = Utc::now();

        assert!(case.can_start_tracking());
        assert!(!case.can_renew());

        let first = case.start_tracking(now, Duration::hours(72)).unwrap().clone();
        assert_eq!(case.status, CaseStatus::InRegistration);
        assert_eq!(first.expires_at, now + Duration::hours(72));
        assert!(!case.can_start_tracking());
        assert!(case.can_renew());

        let renewed = case.renew(now, Duration::hours(72)).unwrap().clone();
        assert_ne!(first.code, renewed.code);

        case.complete_enrollment().unwrap();
        assert_eq!(case.status, CaseStatus::Tracking);
        assert!(case.enrollment.is_completed());
        assert!(!case.can_renew());

        case.conclude().unwrap();
        assert!(case.is_concluded());
        assert!(!case.can_conclude());
        assert!(case.conclude().is_err());
    }

    #[test]
    fn renew_outside_registration_fails() {
        let mut case = with_account_details(case());
        assert!(matches!(
            case.renew(Utc::now(), Duration::hours(1)),
            Err(DomainError::TransitionNotAllowed { status: CaseStatus::Open, .. })
        ));
    }

    #[test]
    fn comments_are_newest_first() {
        let mut case = case();
        let now = Utc::now();
        case.add_comment("agent1", "first", now);
        case.add_comment("agent1", "second", now + Duration::minutes(1));

        assert_eq!(case.comments[0].text, "second");
        assert_eq!(case.comments[1].text, "first");
    }

    #[test]
    fn activation_codes_expire() {
        let now = Utc::now();
        let code = ActivationCode::issue(now, Duration::hours(1));
        assert!(!code.is_expired(now));
        assert!(code.is_expired(now + Duration::hours(1)));
    }

    #[test]
    fn unbounded_validity_saturates() {
        let code = ActivationCode::issue(Utc::now(), Duration::MAX);
        assert_eq!(code.expires_at, DateTime::<Utc>::MAX_UTC);
    }
}
