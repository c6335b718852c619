use chrono::{Duration, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::auth::hash_password;
use crate::config::TrackingConfig;
use crate::database::store::{Store, StoreError};
use crate::domain::{Address, ContactPerson, Department, Role, Symptom, TrackedCase, TrackedPerson, User};

pub const DEPARTMENT_MANNHEIM: Uuid = Uuid::from_u128(0x0c5d_4f2a_0000_4000_8000_0000_0000_0001);
pub const DEPARTMENT_DARMSTADT: Uuid = Uuid::from_u128(0x0c5d_4f2a_0000_4000_8000_0000_0000_0002);

pub const PERSON_SANDRA: Uuid = Uuid::from_u128(0x7e1a_0b3c_0000_4000_8000_0000_0000_0001);
pub const PERSON_GUSTAV: Uuid = Uuid::from_u128(0x7e1a_0b3c_0000_4000_8000_0000_0000_0002);
pub const PERSON_MARKUS: Uuid = Uuid::from_u128(0x7e1a_0b3c_0000_4000_8000_0000_0000_0003);
pub const PERSON_JONAS: Uuid = Uuid::from_u128(0x7e1a_0b3c_0000_4000_8000_0000_0000_0004);

pub const CASE_SANDRA: Uuid = Uuid::from_u128(0x3f9e_61d0_0000_4000_8000_0000_0000_0001);
pub const CASE_GUSTAV: Uuid = Uuid::from_u128(0x3f9e_61d0_0000_4000_8000_0000_0000_0002);
pub const CASE_MARKUS: Uuid = Uuid::from_u128(0x3f9e_61d0_0000_4000_8000_0000_0000_0003);
pub const CASE_JONAS: Uuid = Uuid::from_u128(0x3f9e_61d0_0000_4000_8000_0000_0000_0004);

const SYMPTOMS: &[(&str, bool)] = &[
    ("Fieber", true),
    ("Husten", true),
    ("Halsschmerzen", false),
    ("Kopfschmerzen", false),
    ("Geschmacksverlust", true),
];

/// Sample departments, accounts, cases, contacts and symptoms.
/// Every account's password equals its username.
pub struct DataInitializer<'a> {
    store: &'a dyn Store,
}

impl<'a> DataInitializer<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Seeds the store unless the sample data is already present
    pub async fn run(&self) -> Result<(), StoreError> {
        if self.store.find_user("agent1").await?.is_some() {
            info!("Sample data already present, skipping seed");
            return Ok(());
        }

        self.departments().await?;
        self.cases().await?;
        self.users().await?;
        self.contacts().await?;
        self.symptoms().await?;

        info!("Seeded sample data");
        Ok(())
    }

    async fn departments(&self) -> Result<(), StoreError> {
        self.store
            .save_department(&Department::new(DEPARTMENT_MANNHEIM, "GA Mannheim"))
            .await?;
        self.store
            .save_department(&Department::new(DEPARTMENT_DARMSTADT, "GA Darmstadt"))
            .await
    }

    async fn users(&self) -> Result<(), StoreError> {
        let accounts = [
            ("agent1", Role::Agent { department_id: DEPARTMENT_MANNHEIM }),
            ("agent2", Role::Agent { department_id: DEPARTMENT_DARMSTADT }),
            ("test3", Role::TrackedPerson { person_id: PERSON_SANDRA }),
        ];

        for (username, role) in accounts {
            self.store.save_user(&User::new(username, hash_password(username), role)).await?;
        }
        Ok(())
    }

    async fn cases(&self) -> Result<(), StoreError> {
        let today = Utc::now().date_naive();
        let now = Utc::now();

        let mut sandra = case(
            CASE_SANDRA,
            person(PERSON_SANDRA, "Sandra", "Schubert"),
            DEPARTMENT_MANNHEIM,
            today - Duration::days(3),
        );
        sandra.person.email = Some("sandra.schubert@example.com".into());
        sandra.person.phone = Some("0621 123456".into());
        sandra.person.date_of_birth = NaiveDate::from_ymd_opt(1975, 4, 12);
        sandra.person.address = Address {
            street: Some("Hauptstraße".into()),
            house_number: Some("12a".into()),
            zip_code: Some("68159".into()),
            city: Some("Mannheim".into()),
        };
        sandra.infected = true;
        sandra.complete_enrollment().map_err(|e| StoreError::Conflict(e.to_string()))?;
        sandra.add_comment("agent1", "Erstkontakt telefonisch hergestellt", now);

        let mut gustav = case(
            CASE_GUSTAV,
            person(PERSON_GUSTAV, "Gustav", "Meier"),
            DEPARTMENT_MANNHEIM,
            today - Duration::days(1),
        );
        gustav.person.mobile_phone = Some("0171 9876543".into());

        let mut markus = case(
            CASE_MARKUS,
            person(PERSON_MARKUS, "Markus", "Hanser"),
            DEPARTMENT_MANNHEIM,
            today,
        );
        markus.person.email = Some("markus.hanser@example.com".into());
        markus.person.phone = Some("0621 654321".into());
        markus.person.date_of_birth = NaiveDate::from_ymd_opt(1988, 11, 2);

        let mut jonas = case(
            CASE_JONAS,
            person(PERSON_JONAS, "Jonas", "Winter"),
            DEPARTMENT_DARMSTADT,
            today - Duration::days(2),
        );
        jonas.person.phone = Some("06151 112233".into());

        for mut case in [sandra, gustav, markus, jonas] {
            self.store.save_case(&mut case).await?;
        }
        Ok(())
    }

    async fn contacts(&self) -> Result<(), StoreError> {
        let mut neighbour = ContactPerson::new(PERSON_SANDRA);
        neighbour.first_name = Some("Frank".into());
        neighbour.last_name = Some("Berger".into());
        neighbour.phone = Some("0621 445566".into());
        neighbour.is_senior = Some(true);

        let mut colleague = ContactPerson::new(PERSON_SANDRA);
        colleague.first_name = Some("Lisa".into());
        colleague.last_name = Some("Adler".into());
        colleague.email = Some("lisa.adler@example.com".into());
        colleague.is_health_staff = Some(true);

        let mut stranger = ContactPerson::new(PERSON_SANDRA);
        stranger.identification_hint = Some("Kassiererin im Supermarkt am Marktplatz".into());

        for mut contact in [neighbour, colleague, stranger] {
            self.store.save_contact(&mut contact).await?;
        }
        Ok(())
    }

    async fn symptoms(&self) -> Result<(), StoreError> {
        for &(name, characteristic) in SYMPTOMS {
            self.store.save_symptom(&Symptom::new(name, characteristic)).await?;
        }
        Ok(())
    }
}

fn person(id: Uuid, first_name: &str, last_name: &str) -> TrackedPerson {
    TrackedPerson {
        id,
        ..TrackedPerson::new(first_name, last_name)
    }
}

fn case(id: Uuid, person: TrackedPerson, department_id: Uuid, test_date: NaiveDate) -> TrackedCase {
    TrackedCase {
        id,
        ..TrackedCase::new(
            person,
            department_id,
            test_date,
            test_date,
            test_date + TrackingConfig::default().quarantine_period(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::domain::CaseStatus;

    #[tokio::test]
    async fn seeds_once() {
        let store = MemoryStore::new();

        DataInitializer::new(&store).run().await.unwrap();
        DataInitializer::new(&store).run().await.unwrap();

        assert_eq!(store.cases_of_department(DEPARTMENT_MANNHEIM).await.unwrap().len(), 3);
        assert_eq!(store.cases_of_department(DEPARTMENT_DARMSTADT).await.unwrap().len(), 1);
        assert_eq!(store.contacts_of(PERSON_SANDRA).await.unwrap().len(), 3);
        assert_eq!(store.symptoms().await.unwrap().len(), SYMPTOMS.len());
    }

    #[tokio::test]
    async fn seeded_cases_cover_the_lifecycle() {
        let store = MemoryStore::new();
        DataInitializer::new(&store).run().await.unwrap();

        let sandra = store.find_case(CASE_SANDRA).await.unwrap().unwrap();
        assert_eq!(sandra.status, CaseStatus::Tracking);
        assert!(sandra.enrollment.is_completed());

        let markus = store.find_case(CASE_MARKUS).await.unwrap().unwrap();
        assert!(markus.can_start_tracking());

        let gustav = store.find_case(CASE_GUSTAV).await.unwrap().unwrap();
        assert!(!gustav.can_start_tracking());
    }
}
