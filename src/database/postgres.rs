use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::database::store::{Store, StoreError};
use crate::domain::{ContactPerson, Department, Symptom, TrackedCase, User};

/// Postgres backend. Each table keeps the lookup columns next to the full
/// entity as a `jsonb` document.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(url: &str, database: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(database.max_connections)
            .acquire_timeout(Duration::from_secs(database.connection_timeout))
            .connect(url)
            .await?;

        info!("Connected to Postgres (max {} connections)", database.max_connections);
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

fn unique_violation(error: sqlx::Error, what: String) -> StoreError {
    match error {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Conflict(what),
        other => StoreError::Sqlx(other),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_scalar::<_, Json<User>>("SELECT data FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user.map(|Json(u)| u))
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (id, username, data) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET username = EXCLUDED.username, data = EXCLUDED.data",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(Json(user))
        .execute(&self.pool)
        .await
        .map_err(|e| unique_violation(e, format!("username {} is taken", user.username)))?;
        Ok(())
    }

    async fn find_department(&self, id: Uuid) -> Result<Option<Department>, StoreError> {
        let department = sqlx::query_scalar::<_, Json<Department>>("SELECT data FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(department.map(|Json(d)| d))
    }

    async fn save_department(&self, department: &Department) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO departments (id, name, data) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, data = EXCLUDED.data",
        )
        .bind(department.id)
        .bind(&department.name)
        .bind(Json(department))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn cases_of_department(&self, department_id: Uuid) -> Result<Vec<TrackedCase>, StoreError> {
        let cases = sqlx::query_scalar::<_, Json<TrackedCase>>(
            "SELECT data FROM tracked_cases WHERE department_id = $1
             ORDER BY lower(last_name), lower(first_name)",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(cases.into_iter().map(|Json(c)| c).collect())
    }

    async fn find_case(&self, id: Uuid) -> Result<Option<TrackedCase>, StoreError> {
        let case = sqlx::query_scalar::<_, Json<TrackedCase>>("SELECT data FROM tracked_cases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(case.map(|Json(c)| c))
    }

    async fn save_case(&self, case: &mut TrackedCase) -> Result<(), StoreError> {
        let expected = case.version;
        let saved = TrackedCase {
            version: expected + 1,
            ..case.clone()
        };

        let result = if expected == 0 {
            sqlx::query(
                "INSERT INTO tracked_cases (id, department_id, last_name, first_name, version, data)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 ON CONFLICT (id) DO NOTHING",
            )
        } else {
            sqlx::query(
                "UPDATE tracked_cases SET
                    department_id = $2,
                    last_name = $3,
                    first_name = $4,
                    version = $5,
                    data = $6
                 WHERE id = $1 AND version = $5 - 1",
            )
        }
        .bind(saved.id)
        .bind(saved.department_id)
        .bind(&saved.person.last_name)
        .bind(&saved.person.first_name)
        .bind(saved.version)
        .bind(Json(&saved))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::StaleWrite(format!("case {} was modified concurrently", case.id)));
        }
        *case = saved;
        Ok(())
    }

    async fn contacts_of(&self, owner_id: Uuid) -> Result<Vec<ContactPerson>, StoreError> {
        let contacts = sqlx::query_scalar::<_, Json<ContactPerson>>(
            "SELECT data FROM contact_persons WHERE owner_id = $1
             ORDER BY lower(coalesce(last_name, '')), lower(coalesce(first_name, ''))",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(contacts.into_iter().map(|Json(c)| c).collect())
    }

    async fn find_contact(&self, id: Uuid) -> Result<Option<ContactPerson>, StoreError> {
        let contact = sqlx::query_scalar::<_, Json<ContactPerson>>("SELECT data FROM contact_persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contact.map(|Json(c)| c))
    }

    async fn save_contact(&self, contact: &mut ContactPerson) -> Result<(), StoreError> {
        let expected = contact.version;
        let saved = ContactPerson {
            version: expected + 1,
            ..contact.clone()
        };

        let result = if expected == 0 {
            sqlx::query(
                "INSERT INTO contact_persons (id, owner_id, last_name, first_name, version, data)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 ON CONFLICT (id) DO NOTHING",
            )
        } else {
            sqlx::query(
                "UPDATE contact_persons SET
                    owner_id = $2,
                    last_name = $3,
                    first_name = $4,
                    version = $5,
                    data = $6
                 WHERE id = $1 AND version = $5 - 1",
            )
        }
        .bind(saved.id)
        .bind(saved.owner_id)
        .bind(&saved.last_name)
        .bind(&saved.first_name)
        .bind(saved.version)
        .bind(Json(&saved))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::StaleWrite(format!("contact {} was modified concurrently", contact.id)));
        }
        *contact = saved;
        Ok(())
    }

    async fn delete_contact(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM contact_persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
        let symptoms = sqlx::query_scalar::<_, Json<Symptom>>("SELECT data FROM symptoms ORDER BY lower(name)")
            .fetch_all(&self.pool)
            .await?;
        Ok(symptoms.into_iter().map(|Json(s)| s).collect())
    }

    async fn find_symptom(&self, id: Uuid) -> Result<Option<Symptom>, StoreError> {
        let symptom = sqlx::query_scalar::<_, Json<Symptom>>("SELECT data FROM symptoms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(symptom.map(|Json(s)| s))
    }

    async fn save_symptom(&self, symptom: &Symptom) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO symptoms (id, name, data) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, data = EXCLUDED.data",
        )
        .bind(symptom.id)
        .bind(&symptom.name)
        .bind(Json(symptom))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
