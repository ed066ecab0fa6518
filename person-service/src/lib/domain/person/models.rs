/// Minimum accepted password length, enforced at the validation boundary.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Person aggregate entity.
///
/// The single record this service manages: a login with its password hash.
/// `id` is assigned by the store on creation and immutable afterwards;
/// `login` is the unique key. `password_hash` is always an Argon2 PHC
/// string, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub login: String,
    pub password_hash: String,
}

/// A person awaiting creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub login: String,
    pub password_hash: String,
}

/// Raw sign-up input. Both fields optional so a missing field can be
/// reported distinctly from a blank one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpCommand {
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Command to replace an existing person (PUT semantics).
///
/// The password is plaintext here; the service hashes it before storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePersonCommand {
    pub id: i32,
    pub login: String,
    pub password: String,
}

/// Partial update. Only fields present in the payload are overwritten;
/// a patched password is re-hashed by the service before storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonPatch {
    pub login: Option<String>,
    pub password: Option<String>,
}

/// One rejected field, rendered into the client-visible validation list
/// as `{"<field>": "<message>. Actual value: <value>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
    pub rejected: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>, rejected: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            rejected: rejected.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{}. Actual value: {}", self.message, self.rejected)
    }
}

// Password values never appear in validation output.
const REDACTED: &str = "<redacted>";

/// Validate credentials for create-style requests.
///
/// Returns errors in field order: login first, then password. An empty
/// vector means the input passed.
pub fn validate_credentials(login: Option<&str>, password: Option<&str>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match login {
        None => errors.push(FieldError::new("login", "Username must not be blank", "null")),
        Some(l) if l.trim().is_empty() => {
            errors.push(FieldError::new("login", "Username must not be blank", l));
        }
        Some(_) => {}
    }

    match password {
        None => errors.push(FieldError::new(
            "password",
            "Password must not be blank",
            "null",
        )),
        Some(p) if p.trim().is_empty() => {
            errors.push(FieldError::new(
                "password",
                "Password must not be blank",
                REDACTED,
            ));
        }
        Some(p) if p.chars().count() < MIN_PASSWORD_LENGTH => {
            errors.push(FieldError::new(
                "password",
                format!(
                    "Password length must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
                REDACTED,
            ));
        }
        Some(_) => {}
    }

    errors
}

/// Validate a full-replace (PUT) request: id is mandatory on top of the
/// credential rules.
pub fn validate_for_update(
    id: Option<i32>,
    login: Option<&str>,
    password: Option<&str>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if id.is_none() {
        errors.push(FieldError::new("id", "Id must be non null", "null"));
    }

    errors.extend(validate_credentials(login, password));
    errors
}
