//! Demo-credential login.
//!
//! There is no real identity provider: a fixed account directory and two
//! documented credential pairs. Passwords are compared as plain strings.

use serde::{Deserialize, Serialize};

use crate::Role;

/// A documented email/password pair shown on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const ADMIN_CREDENTIALS: Credentials = Credentials {
    email: "admin@parsfit.com",
    password: "admin123",
    role: Role::Admin,
};

pub const DEMO_CREDENTIALS: Credentials = Credentials {
    email: "demo@parsfit.com",
    password: "demo123",
    role: Role::User,
};

/// Password accepted for every listed account besides the documented pairs.
const SHARED_DEMO_PASSWORD: &str = "demo123";

/// The identity stored in the session cookie after a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

struct Account {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    role: Role,
    phone: &'static str,
}

static ACCOUNTS: [Account; 3] = [
    Account {
        id: "1",
        name: "Admin User",
        email: "admin@parsfit.com",
        role: Role::Admin,
        phone: "0532 123 45 67",
    },
    Account {
        id: "2",
        name: "Demo User",
        email: "demo@parsfit.com",
        role: Role::User,
        phone: "0532 234 56 78",
    },
    Account {
        id: "3",
        name: "Elif Hanım",
        email: "elif@parsfit.com",
        role: Role::Coach,
        phone: "0532 345 67 89",
    },
];

impl From<&Account> for SessionUser {
    fn from(a: &Account) -> Self {
        SessionUser {
            id: a.id.to_string(),
            name: a.name.to_string(),
            email: a.email.to_string(),
            role: a.role,
            phone: Some(a.phone.to_string()),
            avatar: None,
        }
    }
}

fn account(email: &str) -> Option<&'static Account> {
    ACCOUNTS.iter().find(|a| a.email == email)
}

/// Check credentials against the directory.
///
/// The documented pairs are tried first; any other listed account accepts
/// the shared demo password.
pub fn login(email: &str, password: &str) -> Option<SessionUser> {
    for creds in [ADMIN_CREDENTIALS, DEMO_CREDENTIALS] {
        if email == creds.email && password == creds.password {
            if let Some(acc) = account(email) {
                return Some(acc.into());
            }
        }
    }
    match account(email) {
        Some(acc) if password == SHARED_DEMO_PASSWORD => Some(acc.into()),
        _ => None,
    }
}

/// Where a freshly logged-in user is sent.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Coach => "/coach-dashboard",
        Role::User => "/user-dashboard",
    }
}
