use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::NewPerson;
use crate::domain::person::models::Person;
use crate::domain::person::models::PersonPatch;
use crate::domain::person::models::SignUpCommand;
use crate::domain::person::models::UpdatePersonCommand;
use crate::domain::person::models::MIN_PASSWORD_LENGTH;
use crate::domain::person::ports::PersonRepository;
use crate::domain::person::ports::PersonServicePort;

/// Domain service for person operations.
///
/// Owns the rule that no plaintext password ever reaches the repository:
/// every write path hashes before persisting.
pub struct PersonService<R>
where
    R: PersonRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> PersonService<R>
where
    R: PersonRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> PersonServicePort for PersonService<R>
where
    R: PersonRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<Person, PersonError> {
        // Checks in order; each failure is distinct and leaves the store
        // untouched.
        let login = command.login.ok_or(PersonError::MissingField("login"))?;
        let password = command.password.ok_or(PersonError::MissingField("password"))?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PersonError::WeakPassword);
        }

        self.create_person(login, password).await
    }

    async fn create_person(&self, login: String, password: String) -> Result<Person, PersonError> {
        let password_hash = self.password_hasher.hash(&password)?;

        self.repository
            .create(NewPerson {
                login,
                password_hash,
            })
            .await
    }

    async fn get_person(&self, id: i32) -> Result<Person, PersonError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))
    }

    async fn get_by_login(&self, login: &str) -> Result<Person, PersonError> {
        self.repository
            .find_by_login(login)
            .await?
            .ok_or_else(|| PersonError::LoginNotFound(login.to_string()))
    }

    async fn list_persons(&self) -> Result<Vec<Person>, PersonError> {
        self.repository.list_all().await
    }

    async fn update_person(&self, command: UpdatePersonCommand) -> Result<Person, PersonError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        self.repository
            .update(Person {
                id: command.id,
                login: command.login,
                password_hash,
            })
            .await
    }

    async fn patch_person(&self, id: i32, patch: PersonPatch) -> Result<Person, PersonError> {
        let mut person = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))?;

        if let Some(new_login) = patch.login {
            person.login = new_login;
        }

        if let Some(new_password) = patch.password {
            person.password_hash = self.password_hasher.hash(&new_password)?;
        }

        self.repository.update(person).await
    }

    async fn delete_person(&self, id: i32) -> Result<(), PersonError> {
        self.repository.delete(id).await
    }
}
