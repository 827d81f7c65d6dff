//! Role name predicate used by scheme validation.
//!
//! Role definitions are owned elsewhere; schemes only reference roles by
//! name. [`RoleNameValidator`] is the seam through which callers inject the
//! naming rule, and [`StandardRoleNames`] is the stock rule: a non-empty
//! name of at most [`ROLE_NAME_MAX_LENGTH`] bytes drawn from lowercase ASCII
//! letters, digits and underscores.

/// Default upper bound on a role name, in bytes.
pub const ROLE_NAME_MAX_LENGTH: usize = 64;

/// Decides whether a string is an acceptable role name.
///
/// Any `Fn(&str) -> bool` is a validator, so tests and callers can pass a
/// closure:
///
/// ```
/// use permission_scheme::RoleNameValidator;
///
/// let only_admin = |name: &str| name == "admin";
/// assert!(only_admin.is_valid_role_name("admin"));
/// assert!(!only_admin.is_valid_role_name("user"));
/// ```
pub trait RoleNameValidator {
    /// Return `true` when `name` is a valid role name.
    fn is_valid_role_name(&self, name: &str) -> bool;
}

impl<F> RoleNameValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_role_name(&self, name: &str) -> bool {
        self(name)
    }
}

/// Stock role naming rule.
///
/// # Examples
///
/// ```
/// use permission_scheme::{RoleNameValidator, StandardRoleNames};
///
/// let rule = StandardRoleNames::default();
/// assert!(rule.is_valid_role_name("team_admin"));
/// assert!(!rule.is_valid_role_name("Team Admin"));
/// assert!(!rule.is_valid_role_name(""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardRoleNames {
    max_length: usize,
}

impl StandardRoleNames {
    /// Build a rule accepting names up to `max_length` bytes.
    #[must_use]
    pub const fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Longest accepted name, in bytes.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for StandardRoleNames {
    fn default() -> Self {
        Self::with_max_length(ROLE_NAME_MAX_LENGTH)
    }
}

impl RoleNameValidator for StandardRoleNames {
    fn is_valid_role_name(&self, name: &str) -> bool {
        !name.is_empty() && name.len() <= self.max_length && name.bytes().all(is_role_name_byte)
    }
}

const fn is_role_name_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_'
}
