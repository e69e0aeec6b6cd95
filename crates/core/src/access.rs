//! Role-based visibility scoping for project and budget listings.
//!
//! The rules mirror the product's observed behavior exactly:
//!
//! - A caller whose profile role is `client` sees only rows belonging to
//!   the Client record whose email matches theirs. The match is attempted
//!   against all clients, active or not, and takes the first hit; with no
//!   hit the caller sees nothing.
//! - Otherwise a non-staff caller sees only projects they are responsible
//!   for. Budgets have no responsible party, so every non-client caller
//!   sees the full budget set.
//! - Staff see everything, unless their profile role is `client`, which
//!   is checked first and wins.
//!
//! The same scope value feeds the list queries and the report exporters,
//! so an export can never contain rows the listing would hide.

use crate::identity::Identity;
use crate::types::{DbId, UserRole};

/// Visible subset of the project collection for one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectScope {
    /// No restriction.
    All,
    /// Only projects of this client.
    Client(DbId),
    /// Only projects whose responsible user is this user.
    Responsible(DbId),
    /// Client-role caller with no matching client record.
    Nothing,
}

/// Visible subset of the budget collection for one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetScope {
    All,
    Client(DbId),
    Nothing,
}

/// Derive the project scope for `identity`.
///
/// `matched_client` is the id of the first Client row whose email equals
/// the identity's email, if any; the caller resolves it first.
pub fn project_scope(identity: &Identity, matched_client: Option<DbId>) -> ProjectScope {
    if identity.role == UserRole::Client {
        return match matched_client {
            Some(client_id) => ProjectScope::Client(client_id),
            None => ProjectScope::Nothing,
        };
    }
    if !identity.staff {
        return ProjectScope::Responsible(identity.user_id);
    }
    ProjectScope::All
}

/// Derive the budget scope for `identity`.
///
/// Only the client-role branch narrows; employees and contractors see all
/// budgets even without the staff flag.
pub fn budget_scope(identity: &Identity, matched_client: Option<DbId>) -> BudgetScope {
    if identity.role == UserRole::Client {
        return match matched_client {
            Some(client_id) => BudgetScope::Client(client_id),
            None => BudgetScope::Nothing,
        };
    }
    BudgetScope::All
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(staff: bool, role: UserRole) -> Identity {
        Identity {
            user_id: 7,
            username: "worker".into(),
            email: "worker@sirius.cl".into(),
            staff,
            role,
        }
    }

    #[test]
    fn staff_sees_everything() {
        let id = identity(true, UserRole::Admin);
        assert_eq!(project_scope(&id, None), ProjectScope::All);
        assert_eq!(budget_scope(&id, None), BudgetScope::All);
    }

    #[test]
    fn client_role_scopes_to_matched_client() {
        let id = identity(false, UserRole::Client);
        assert_eq!(project_scope(&id, Some(3)), ProjectScope::Client(3));
        assert_eq!(budget_scope(&id, Some(3)), BudgetScope::Client(3));
    }

    #[test]
    fn client_role_without_matching_record_sees_nothing() {
        let id = identity(false, UserRole::Client);
        assert_eq!(project_scope(&id, None), ProjectScope::Nothing);
        assert_eq!(budget_scope(&id, None), BudgetScope::Nothing);
    }

    #[test]
    fn client_role_wins_over_staff_flag() {
        // The client branch is evaluated first, so a staff account with a
        // client profile is still narrowed to its client record.
        let id = identity(true, UserRole::Client);
        assert_eq!(project_scope(&id, Some(9)), ProjectScope::Client(9));
        assert_eq!(project_scope(&id, None), ProjectScope::Nothing);
    }

    #[test]
    fn non_staff_employee_scopes_projects_to_responsible() {
        let id = identity(false, UserRole::Employee);
        assert_eq!(project_scope(&id, None), ProjectScope::Responsible(7));
    }

    #[test]
    fn non_staff_employee_sees_all_budgets() {
        // Budgets carry no responsible user; only the client branch narrows.
        let id = identity(false, UserRole::Employee);
        assert_eq!(budget_scope(&id, None), BudgetScope::All);
    }

    #[test]
    fn contractor_behaves_like_employee() {
        let id = identity(false, UserRole::Contractor);
        assert_eq!(project_scope(&id, None), ProjectScope::Responsible(7));
        assert_eq!(budget_scope(&id, None), BudgetScope::All);
    }
}
