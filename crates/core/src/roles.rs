//! Well-known role name constants and the policy checks built on them.
//!
//! Role values arrive as the `role` claim of the caller's access token and
//! match the `role` field of stored user documents.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_ORGANISATION: &str = "organisation";
pub const ROLE_ADMIN: &str = "admin";

/// Student policy: students, plus admins acting on their behalf.
pub fn satisfies_student(role: &str) -> bool {
    role == ROLE_STUDENT || role == ROLE_ADMIN
}

/// Organisation policy: organisation members and admins.
pub fn satisfies_organisation(role: &str) -> bool {
    role == ROLE_ORGANISATION || role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_satisfies_both_policies() {
        assert!(satisfies_student(ROLE_ADMIN));
        assert!(satisfies_organisation(ROLE_ADMIN));
    }

    #[test]
    fn student_and_organisation_do_not_cross() {
        assert!(satisfies_student(ROLE_STUDENT));
        assert!(!satisfies_organisation(ROLE_STUDENT));
        assert!(satisfies_organisation(ROLE_ORGANISATION));
        assert!(!satisfies_student(ROLE_ORGANISATION));
    }

    #[test]
    fn unknown_role_satisfies_nothing() {
        assert!(!satisfies_student("guest"));
        assert!(!satisfies_organisation("guest"));
        assert!(!satisfies_student(""));
    }
}
