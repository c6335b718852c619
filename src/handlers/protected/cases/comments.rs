use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use super::load_case;
use super::representations::{CommentInput, TrackedCaseDto};
use crate::app::AppState;
use crate::database::StoreError;
use crate::handlers::{accept, context};
use crate::i18n::Locale;
use crate::middleware::{ApiResult, AuthUser, JsonBody};
use crate::observer::{Operation, Resource};

/// Comments only add to a case, so a concurrent save is retried against the fresh case
const SAVE_ATTEMPTS: usize = 3;

/// POST /api/hd/cases/:id/comments - the author is the calling agent
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    locale: Locale,
    Path(id): Path<Uuid>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<TrackedCaseDto>> {
    let department_id = auth.department()?;
    let mut case = load_case(&state, department_id, id).await?;

    let ctx = context(&state, Resource::Comment, Operation::Create, body)?;
    let input: CommentInput = accept(&state, locale, ctx).await?;

    let mut attempt = 1;
    loop {
        case.add_comment(auth.username.as_str(), input.comment.as_str(), Utc::now());

        match state.store.save_case(&mut case).await {
            Ok(()) => return Ok(Json(TrackedCaseDto::from(&case))),
            Err(StoreError::StaleWrite(msg)) if attempt < SAVE_ATTEMPTS => {
                tracing::debug!("Retrying comment on case {} ({})", id, msg);
                attempt += 1;
                case = load_case(&state, department_id, id).await?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use crate::config::AppConfig;
    use crate::database::seed::{CASE_GUSTAV, DEPARTMENT_MANNHEIM};
    use crate::database::{DataInitializer, MemoryStore, Store};
    use crate::domain::{ContactPerson, Department, Role, Symptom, TrackedCase, User};

    /// Lets another agent comment on the case right before the first save goes through
    struct RacingStore {
        inner: MemoryStore,
        raced: AtomicBool,
    }

    #[async_trait]
    impl Store for RacingStore {
        async fn ping(&self) -> Result<(), StoreError> {
            self.inner.ping().await
        }
        async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
            self.inner.find_user(username).await
        }
        async fn save_user(&self, user: &User) -> Result<(), StoreError> {
            self.inner.save_user(user).await
        }
        async fn find_department(&self, id: Uuid) -> Result<Option<Department>, StoreError> {
            self.inner.find_department(id).await
        }
        async fn save_department(&self, department: &Department) -> Result<(), StoreError> {
            self.inner.save_department(department).await
        }
        async fn cases_of_department(&self, department_id: Uuid) -> Result<Vec<TrackedCase>, StoreError> {
            self.inner.cases_of_department(department_id).await
        }
        async fn find_case(&self, id: Uuid) -> Result<Option<TrackedCase>, StoreError> {
            self.inner.find_case(id).await
        }
        async fn save_case(&self, case: &mut TrackedCase) -> Result<(), StoreError> {
            if !self.raced.swap(true, Ordering::SeqCst) {
                if let Some(mut other) = self.inner.find_case(case.id).await? {
                    other.add_comment("agent3", "Parallel notiert", Utc::now());
                    self.inner.save_case(&mut other).await?;
                }
            }
            self.inner.save_case(case).await
        }
        async fn contacts_of(&self, owner_id: Uuid) -> Result<Vec<ContactPerson>, StoreError> {
            self.inner.contacts_of(owner_id).await
        }
        async fn find_contact(&self, id: Uuid) -> Result<Option<ContactPerson>, StoreError> {
            self.inner.find_contact(id).await
        }
        async fn save_contact(&self, contact: &mut ContactPerson) -> Result<(), StoreError> {
            self.inner.save_contact(contact).await
        }
        async fn delete_contact(&self, id: Uuid) -> Result<bool, StoreError> {
            self.inner.delete_contact(id).await
        }
        async fn symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
            self.inner.symptoms().await
        }
        async fn find_symptom(&self, id: Uuid) -> Result<Option<Symptom>, StoreError> {
            self.inner.find_symptom(id).await
        }
        async fn save_symptom(&self, symptom: &Symptom) -> Result<(), StoreError> {
            self.inner.save_symptom(symptom).await
        }
    }

    #[tokio::test]
    async fn concurrent_comments_are_both_kept() {
        let inner = MemoryStore::new();
        DataInitializer::new(&inner).run().await.unwrap();
        let store = Arc::new(RacingStore {
            inner,
            raced: AtomicBool::new(false),
        });
        let state = AppState::new(store.clone(), AppConfig::development());
        let auth = AuthUser {
            user_id: Uuid::new_v4(),
            username: "agent1".into(),
            role: Role::Agent {
                department_id: DEPARTMENT_MANNHEIM,
            },
        };

        let Json(case) = add_comment(
            State(state),
            auth,
            Locale::De,
            Path(CASE_GUSTAV),
            JsonBody(json!({ "comment": "Erster Anruf" })),
        )
        .await
        .unwrap();

        let texts: Vec<&str> = case.comments.iter().map(|c| c.comment.as_str()).collect();
        assert_eq!(texts, vec!["Erster Anruf", "Parallel notiert"]);

        let stored = store.find_case(CASE_GUSTAV).await.unwrap().unwrap();
        assert_eq!(stored.comments.len(), 2);
    }
}
