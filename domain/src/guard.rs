//! Role guard for protected pages.

use crate::auth::SessionUser;
use crate::Role;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/giris";
/// Where users lacking the required role are sent.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Decide whether `session` may see a page that requires `required`.
///
/// Admin passes every check; a page without a required role only needs a
/// session.
pub fn authorize(session: Option<&SessionUser>, required: Option<Role>) -> Access {
    let Some(user) = session else {
        return Access::RedirectToLogin;
    };
    match required {
        Some(role) if !user.role.satisfies(role) => Access::RedirectToUnauthorized,
        _ => Access::Granted,
    }
}
