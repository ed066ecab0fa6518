use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::NewPerson;
use crate::domain::person::models::Person;
use crate::domain::person::ports::PersonRepository;

struct StoreState {
    next_id: i32,
    // Ids are assigned ascending, so iteration order is insertion order
    persons: BTreeMap<i32, Person>,
    logins: HashMap<String, i32>,
}

/// Ephemeral credential store backed by a lock-guarded map.
///
/// Every operation takes the lock for its whole duration, so each is
/// atomic from the caller's view. Nothing is awaited while the lock is
/// held.
pub struct MemoryPersonRepository {
    state: RwLock<StoreState>,
}

impl MemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_id: 1,
                persons: BTreeMap::new(),
                logins: HashMap::new(),
            }),
        }
    }

    fn lock_poisoned() -> PersonError {
        PersonError::StoreUnavailable("store lock poisoned".to_string())
    }
}

impl Default for MemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for MemoryPersonRepository {
    async fn create(&self, person: NewPerson) -> Result<Person, PersonError> {
        let mut state = self.state.write().map_err(|_| Self::lock_poisoned())?;

        if state.logins.contains_key(&person.login) {
            return Err(PersonError::DuplicateLogin(person.login));
        }

        let id = state.next_id;
        state.next_id += 1;

        let stored = Person {
            id,
            login: person.login,
            password_hash: person.password_hash,
        };
        state.logins.insert(stored.login.clone(), id);
        state.persons.insert(id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, person: Person) -> Result<Person, PersonError> {
        let mut state = self.state.write().map_err(|_| Self::lock_poisoned())?;

        let previous_login = match state.persons.get(&person.id) {
            Some(existing) => existing.login.clone(),
            None => return Err(PersonError::NotFound(person.id)),
        };

        if let Some(&owner) = state.logins.get(&person.login) {
            if owner != person.id {
                return Err(PersonError::DuplicateLogin(person.login));
            }
        }

        state.logins.remove(&previous_login);
        state.logins.insert(person.login.clone(), person.id);
        state.persons.insert(person.id, person.clone());

        Ok(person)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, PersonError> {
        let state = self.state.read().map_err(|_| Self::lock_poisoned())?;
        Ok(state.persons.get(&id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Person>, PersonError> {
        let state = self.state.read().map_err(|_| Self::lock_poisoned())?;
        Ok(state
            .logins
            .get(login)
            .and_then(|id| state.persons.get(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Person>, PersonError> {
        let state = self.state.read().map_err(|_| Self::lock_poisoned())?;
        Ok(state.persons.values().cloned().collect())
    }

    async fn delete(&self, id: i32) -> Result<(), PersonError> {
        let mut state = self.state.write().map_err(|_| Self::lock_poisoned())?;

        if let Some(removed) = state.persons.remove(&id) {
            state.logins.remove(&removed.login);
        }

        Ok(())
    }
}
