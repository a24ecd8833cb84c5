//! Application settings read from environment variables.

/// The access code admins log in with.
///
/// Read from `ADMIN_ACCESS_CODE`, falling back to the development default.
#[must_use]
pub fn admin_access_code() -> String {
    std::env::var("ADMIN_ACCESS_CODE").unwrap_or_else(|_| "admin123".to_string())
}
