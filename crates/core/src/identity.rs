//! The authenticated caller, carried explicitly.
//!
//! Handlers and filter functions receive an [`Identity`] as an argument
//! instead of reaching into ambient request state. The HTTP layer builds
//! one from validated token claims; tests build them directly.

use crate::types::{DbId, UserRole};

/// Who is making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: DbId,
    pub username: String,
    /// Used by the access filter to match client-role callers to a Client row.
    pub email: String,
    /// Staff flag from the account, independent of the profile role.
    pub staff: bool,
    /// Profile role. Checked before the staff flag by the access filter.
    pub role: UserRole,
}

impl Identity {
    /// Whether this identity passes the elevated gates
    /// (client delete, service create/delete).
    pub fn is_elevated(&self) -> bool {
        self.staff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_follows_staff_flag_not_role() {
        let admin_role_without_staff = Identity {
            user_id: 1,
            username: "ana".into(),
            email: "ana@example.com".into(),
            staff: false,
            role: UserRole::Admin,
        };
        assert!(!admin_role_without_staff.is_elevated());

        let staff_client = Identity {
            staff: true,
            role: UserRole::Client,
            ..admin_role_without_staff
        };
        assert!(staff_client.is_elevated());
    }
}
