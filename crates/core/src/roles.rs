//! Account role names stored in `users.role`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// Every role accepted when creating an account.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];
