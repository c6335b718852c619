use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::store::{Store, StoreError};
use crate::domain::{ContactPerson, Department, Symptom, TrackedCase, User};

/// Process-local store used when no database is configured and in tests
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    departments: RwLock<HashMap<Uuid, Department>>,
    cases: RwLock<HashMap<Uuid, TrackedCase>>,
    contacts: RwLock<HashMap<Uuid, ContactPerson>>,
    symptoms: RwLock<HashMap<Uuid, Symptom>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Unversioned entities may only be inserted, versioned ones only replace their stored version
fn expect_version(stored: Option<i64>, version: i64, what: &str, id: Uuid) -> Result<(), StoreError> {
    match stored {
        None if version == 0 => Ok(()),
        Some(current) if current == version => Ok(()),
        _ => Err(StoreError::StaleWrite(format!("{} {} was modified concurrently", what, id))),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.get(&user.username) {
            if existing.id != user.id {
                return Err(StoreError::Conflict(format!("username {} is taken", user.username)));
            }
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_department(&self, id: Uuid) -> Result<Option<Department>, StoreError> {
        Ok(self.departments.read().await.get(&id).cloned())
    }

    async fn save_department(&self, department: &Department) -> Result<(), StoreError> {
        self.departments.write().await.insert(department.id, department.clone());
        Ok(())
    }

    async fn cases_of_department(&self, department_id: Uuid) -> Result<Vec<TrackedCase>, StoreError> {
        let mut cases: Vec<TrackedCase> = self
            .cases
            .read()
            .await
            .values()
            .filter(|c| c.belongs_to(department_id))
            .cloned()
            .collect();
        cases.sort_by_key(TrackedCase::sort_key);
        Ok(cases)
    }

    async fn find_case(&self, id: Uuid) -> Result<Option<TrackedCase>, StoreError> {
        Ok(self.cases.read().await.get(&id).cloned())
    }

    async fn save_case(&self, case: &mut TrackedCase) -> Result<(), StoreError> {
        let mut cases = self.cases.write().await;
        expect_version(cases.get(&case.id).map(|c| c.version), case.version, "case", case.id)?;

        case.version += 1;
        cases.insert(case.id, case.clone());
        Ok(())
    }

    async fn contacts_of(&self, owner_id: Uuid) -> Result<Vec<ContactPerson>, StoreError> {
        let mut contacts: Vec<ContactPerson> = self
            .contacts
            .read()
            .await
            .values()
            .filter(|c| c.belongs_to(owner_id))
            .cloned()
            .collect();
        contacts.sort_by_key(ContactPerson::sort_key);
        Ok(contacts)
    }

    async fn find_contact(&self, id: Uuid) -> Result<Option<ContactPerson>, StoreError> {
        Ok(self.contacts.read().await.get(&id).cloned())
    }

    async fn save_contact(&self, contact: &mut ContactPerson) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write().await;
        expect_version(contacts.get(&contact.id).map(|c| c.version), contact.version, "contact", contact.id)?;

        contact.version += 1;
        contacts.insert(contact.id, contact.clone());
        Ok(())
    }

    async fn delete_contact(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.contacts.write().await.remove(&id).is_some())
    }

    async fn symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
        let mut symptoms: Vec<Symptom> = self.symptoms.read().await.values().cloned().collect();
        symptoms.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(symptoms)
    }

    async fn find_symptom(&self, id: Uuid) -> Result<Option<Symptom>, StoreError> {
        Ok(self.symptoms.read().await.get(&id).cloned())
    }

    async fn save_symptom(&self, symptom: &Symptom) -> Result<(), StoreError> {
        self.symptoms.write().await.insert(symptom.id, symptom.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, TrackedPerson};
    use chrono::NaiveDate;

    fn case(department_id: Uuid, first: &str, last: &str) -> TrackedCase {
        let day = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        TrackedCase::new(TrackedPerson::new(first, last), department_id, day, day, day)
    }

    #[tokio::test]
    async fn lists_cases_of_department_sorted() {
        let store = MemoryStore::new();
        let department = Uuid::new_v4();

        for (first, last) in [("Gustav", "Meier"), ("Anna", "Albers"), ("Zoe", "Meier")] {
            store.save_case(&mut case(department, first, last)).await.unwrap();
        }
        store.save_case(&mut case(Uuid::new_v4(), "Other", "Aaron")).await.unwrap();

        let names: Vec<String> = store
            .cases_of_department(department)
            .await
            .unwrap()
            .into_iter()
            .map(|c| format!("{} {}", c.person.first_name, c.person.last_name))
            .collect();

        assert_eq!(names, vec!["Anna Albers", "Gustav Meier", "Zoe Meier"]);
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = MemoryStore::new();
        let role = Role::TrackedPerson {
            person_id: Uuid::new_v4(),
        };

        store.save_user(&User::new("test3", "x$y", role)).await.unwrap();
        let result = store.save_user(&User::new("test3", "x$y", role)).await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn deletes_contacts() {
        let store = MemoryStore::new();
        let mut contact = ContactPerson::new(Uuid::new_v4());
        store.save_contact(&mut contact).await.unwrap();

        assert!(store.delete_contact(contact.id).await.unwrap());
        assert!(!store.delete_contact(contact.id).await.unwrap());
        assert!(store.find_contact(contact.id).await.unwrap().is_none());

        // saving the removed contact again must not bring it back
        let result = store.save_contact(&mut contact).await;
        assert!(matches!(result, Err(StoreError::StaleWrite(_))));
    }

    #[tokio::test]
    async fn concurrent_case_saves_do_not_overwrite_each_other() {
        let store = MemoryStore::new();
        let mut stored = case(Uuid::new_v4(), "Gustav", "Meier");
        store.save_case(&mut stored).await.unwrap();
        assert_eq!(stored.version, 1);

        let mut first = store.find_case(stored.id).await.unwrap().unwrap();
        let mut second = first.clone();

        first.add_comment("agent1", "Erster Anruf", chrono::Utc::now());
        store.save_case(&mut first).await.unwrap();
        assert_eq!(first.version, 2);

        second.add_comment("agent1", "Zweiter Anruf", chrono::Utc::now());
        let result = store.save_case(&mut second).await;
        assert!(matches!(result, Err(StoreError::StaleWrite(_))));
        assert_eq!(second.version, 1);

        let current = store.find_case(stored.id).await.unwrap().unwrap();
        assert_eq!(current.comments.len(), 1);
        assert_eq!(current.comments[0].text, "Erster Anruf");
    }
}
