//! Domain library for the ParsFit studio portal.
//!
//! Holds the content and membership types, the storage ports (traits), the
//! in-memory store every process runs on, and the small amount of logic the
//! portal has: the content service, demo-credential login, and the role guard
//! for protected pages. Keep HTTP and other IO concerns out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Identifier of a stored record.
///
/// An empty id means "not yet assigned"; the content service replaces it on
/// create.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new<S: Into<String>>(s: S) -> Result<Self, CoreError> {
        let val = s.into();
        if val.is_empty() {
            return Err(CoreError::invalid("id", "must not be empty"));
        }
        if !val
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::invalid("id", "invalid characters"));
        }
        Ok(Self(val))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role carried by a logged-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Coach,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Coach => "coach",
        }
    }

    /// Whether this role may enter a page that requires `required`.
    /// Admin has access to everything.
    pub fn satisfies(&self, required: Role) -> bool {
        matches!(self, Role::Admin) || *self == required
    }
}

/// A stored entity addressed by id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable entity name, used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &RecordId;
    fn set_id(&mut self, id: RecordId);
}

/// Time source abstraction to make code testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;

    fn today(&self) -> chrono::NaiveDate {
        chrono::DateTime::<chrono::Utc>::from(self.now()).date_naive()
    }
}

/// Source of fresh record ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> RecordId;
}

/// Storage port for an ordered collection of records.
///
/// Implementations keep insertion order; there is no versioning, so the last
/// `replace` wins.
pub trait Repository<T: Record>: Send + Sync {
    fn get(&self, id: &RecordId) -> Result<Option<T>, CoreError>;
    fn list(&self) -> Result<Vec<T>, CoreError>;
    /// Append a record. Fails with `AlreadyExists` on a duplicate id.
    fn insert(&self, record: T) -> Result<(), CoreError>;
    /// Overwrite the record with the same id. Fails with `NotFound` if absent.
    fn replace(&self, record: T) -> Result<(), CoreError>;
    /// Remove a record by id. Fails with `NotFound` if absent.
    fn remove(&self, id: &RecordId) -> Result<(), CoreError>;
    fn len(&self) -> Result<usize, CoreError>;

    fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }
}

/// Storage port for a single-valued document (hero copy, contact info...).
pub trait Document<T>: Send + Sync {
    fn load(&self) -> Result<T, CoreError>;
    fn save(&self, value: T) -> Result<(), CoreError>;
}

/// One rejected input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Core domain errors (no external error crates to keep deps small).
#[derive(Debug)]
pub enum CoreError {
    Invalid(Vec<FieldError>),
    AlreadyExists,
    NotFound(&'static str),
    Repository(String),
}

impl CoreError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Invalid(vec![FieldError {
            field,
            message: message.into(),
        }])
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::Invalid(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{}{} {}", sep, e.field, e.message)?;
                }
                Ok(())
            }
            CoreError::AlreadyExists => write!(f, "resource already exists"),
            CoreError::NotFound(kind) => write!(f, "{} not found", kind),
            CoreError::Repository(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl Error for CoreError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} - ParsFit studio domain", pkg, ver)
}

pub mod adapters;
pub mod auth;
pub mod base62;
pub mod dashboard;
pub mod guard;
pub mod ids;
pub mod model;
pub mod patch;
pub mod seed;
pub mod service;
pub mod slug;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_seed_and_uuid_shapes() {
        assert!(RecordId::new("branch-1").is_ok());
        assert!(RecordId::new("3f1c9a0e4b7d4c2a9e8f6a5b4c3d2e1f").is_ok());
        assert!(RecordId::new("1").is_ok());
    }

    #[test]
    fn record_id_rejects_empty_and_slashes() {
        assert!(matches!(RecordId::new(""), Err(CoreError::Invalid(_))));
        assert!(matches!(RecordId::new("a/b"), Err(CoreError::Invalid(_))));
        assert!(!RecordId::default().is_assigned());
    }

    #[test]
    fn admin_satisfies_every_role() {
        assert!(Role::Admin.satisfies(Role::User));
        assert!(Role::Admin.satisfies(Role::Coach));
        assert!(Role::User.satisfies(Role::User));
        assert!(!Role::User.satisfies(Role::Admin));
        assert!(!Role::Coach.satisfies(Role::User));
    }

    #[test]
    fn invalid_error_lists_fields() {
        let err = CoreError::Invalid(vec![
            FieldError {
                field: "email",
                message: "required".into(),
            },
            FieldError {
                field: "password",
                message: "too short".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: email required; password too short"
        );
    }
}
