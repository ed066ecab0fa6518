use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::NewPerson;
use crate::domain::person::models::Person;
use crate::domain::person::ports::PersonRepository;

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i32,
    login: String,
    password_hash: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            login: row.login,
            password_hash: row.password_hash,
        }
    }
}

/// Durable credential store backed by Postgres.
///
/// `login` carries a unique key; duplicate inserts surface as
/// `DuplicateLogin`. Transient connectivity failures are retried up to a
/// bounded budget with a fixed delay, then surfaced as `StoreUnavailable`.
pub struct PostgresPersonRepository {
    pool: PgPool,
    max_retries: u32,
    retry_delay: Duration,
}

impl PostgresPersonRepository {
    pub fn new(pool: PgPool, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            pool,
            max_retries,
            retry_delay,
        }
    }

    async fn run_with_retry<T, F, Fut>(
        &self,
        operation: &'static str,
        mut op: F,
    ) -> Result<T, sqlx::Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, sqlx::Error>>,
    {
        let mut attempt = 0u32;
        loop {
            match op().await {
                Err(e) if is_transient(&e) && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        operation,
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Transient store error, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                other => return other,
            }
        }
    }
}

fn is_transient(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
    )
}

fn map_error(e: sqlx::Error) -> PersonError {
    if is_transient(&e) {
        PersonError::StoreUnavailable(e.to_string())
    } else {
        PersonError::Database(e.to_string())
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn create(&self, person: NewPerson) -> Result<Person, PersonError> {
        let row = self
            .run_with_retry("create person", || {
                sqlx::query_as::<_, PersonRow>(
                    r#"
                    INSERT INTO person (login, password_hash)
                    VALUES ($1, $2)
                    RETURNING id, login, password_hash
                    "#,
                )
                .bind(&person.login)
                .bind(&person.password_hash)
                .fetch_one(&self.pool)
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersonError::DuplicateLogin(person.login.clone())
                } else {
                    map_error(e)
                }
            })?;

        Ok(row.into())
    }

    async fn update(&self, person: Person) -> Result<Person, PersonError> {
        let row = self
            .run_with_retry("update person", || {
                sqlx::query_as::<_, PersonRow>(
                    r#"
                    UPDATE person
                    SET login = $2, password_hash = $3
                    WHERE id = $1
                    RETURNING id, login, password_hash
                    "#,
                )
                .bind(person.id)
                .bind(&person.login)
                .bind(&person.password_hash)
                .fetch_optional(&self.pool)
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PersonError::DuplicateLogin(person.login.clone())
                } else {
                    map_error(e)
                }
            })?;

        row.map(Person::from)
            .ok_or(PersonError::NotFound(person.id))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, PersonError> {
        let row = self
            .run_with_retry("find person by id", || {
                sqlx::query_as::<_, PersonRow>(
                    r#"
                    SELECT id, login, password_hash
                    FROM person
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(&self.pool)
            })
            .await
            .map_err(map_error)?;

        Ok(row.map(Person::from))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Person>, PersonError> {
        let row = self
            .run_with_retry("find person by login", || {
                sqlx::query_as::<_, PersonRow>(
                    r#"
                    SELECT id, login, password_hash
                    FROM person
                    WHERE login = $1
                    "#,
                )
                .bind(login)
                .fetch_optional(&self.pool)
            })
            .await
            .map_err(map_error)?;

        Ok(row.map(Person::from))
    }

    async fn list_all(&self) -> Result<Vec<Person>, PersonError> {
        let rows = self
            .run_with_retry("list persons", || {
                sqlx::query_as::<_, PersonRow>(
                    r#"
                    SELECT id, login, password_hash
                    FROM person
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
            })
            .await
            .map_err(map_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), PersonError> {
        // Idempotent: affected-row count deliberately ignored
        self.run_with_retry("delete person", || {
            sqlx::query("DELETE FROM person WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
        })
        .await
        .map_err(map_error)?;

        Ok(())
    }
}
