use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::NewPerson;
use crate::domain::person::models::Person;
use crate::domain::person::models::PersonPatch;
use crate::domain::person::models::SignUpCommand;
use crate::domain::person::models::UpdatePersonCommand;

/// Port for person domain service operations.
#[async_trait]
pub trait PersonServicePort: Send + Sync + 'static {
    /// Register a new person from raw sign-up input.
    ///
    /// Checks, in order: fields present, password long enough, login free.
    /// The password is hashed before anything reaches the store.
    ///
    /// # Errors
    /// * `MissingField` - login or password absent
    /// * `WeakPassword` - password shorter than the minimum
    /// * `DuplicateLogin` - login already registered
    async fn sign_up(&self, command: SignUpCommand) -> Result<Person, PersonError>;

    /// Create a person from validated credentials (password still
    /// plaintext; hashed here).
    ///
    /// # Errors
    /// * `DuplicateLogin` - login already registered
    async fn create_person(&self, login: String, password: String) -> Result<Person, PersonError>;

    /// Retrieve a person by id.
    ///
    /// # Errors
    /// * `NotFound` - no person with this id
    async fn get_person(&self, id: i32) -> Result<Person, PersonError>;

    /// Retrieve a person by login (sign-in lookup).
    ///
    /// # Errors
    /// * `LoginNotFound` - no person with this login
    async fn get_by_login(&self, login: &str) -> Result<Person, PersonError>;

    /// List every stored person, insertion order.
    async fn list_persons(&self) -> Result<Vec<Person>, PersonError>;

    /// Replace an existing person; the password is re-hashed.
    ///
    /// # Errors
    /// * `NotFound` - no person with this id
    /// * `DuplicateLogin` - new login belongs to another person
    async fn update_person(&self, command: UpdatePersonCommand) -> Result<Person, PersonError>;

    /// Partially update a person. Only fields present in the patch are
    /// overwritten; a patched password is re-hashed.
    ///
    /// # Errors
    /// * `NotFound` - no person with this id
    /// * `DuplicateLogin` - new login belongs to another person
    async fn patch_person(&self, id: i32, patch: PersonPatch) -> Result<Person, PersonError>;

    /// Delete a person. Idempotent: deleting an absent id succeeds.
    async fn delete_person(&self, id: i32) -> Result<(), PersonError>;
}

/// Persistence operations for the credential store.
///
/// Implementations must be safe under concurrent calls from multiple
/// request tasks; each operation is atomic from the caller's view.
#[async_trait]
pub trait PersonRepository: Send + Sync + 'static {
    /// Persist a new person, assigning its id.
    ///
    /// # Errors
    /// * `DuplicateLogin` - login already present
    async fn create(&self, person: NewPerson) -> Result<Person, PersonError>;

    /// Replace a stored person by id.
    ///
    /// # Errors
    /// * `NotFound` - id not present
    /// * `DuplicateLogin` - login taken by a different id
    async fn update(&self, person: Person) -> Result<Person, PersonError>;

    /// Look up by id. No error on miss.
    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, PersonError>;

    /// Look up by login. No error on miss.
    async fn find_by_login(&self, login: &str) -> Result<Option<Person>, PersonError>;

    /// All stored persons in insertion order (ascending id).
    async fn list_all(&self) -> Result<Vec<Person>, PersonError>;

    /// Remove by id. Succeeds whether or not the id existed.
    async fn delete(&self, id: i32) -> Result<(), PersonError>;
}
