//! Error types for the permission-scheme crate.
//!
//! Validation is reported to most callers as a plain boolean. The enums here
//! back the `check_*` methods on [`crate::Scheme`] for callers that need to
//! know which rule rejected a record.

use std::fmt;

use thiserror::Error;

/// The four role-default fields of a scheme, named by their wire keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleField {
    /// `default_team_admin_role`
    TeamAdmin,
    /// `default_team_user_role`
    TeamUser,
    /// `default_channel_admin_role`
    ChannelAdmin,
    /// `default_channel_user_role`
    ChannelUser,
}

impl RoleField {
    /// Wire key of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TeamAdmin => "default_team_admin_role",
            Self::TeamUser => "default_team_user_role",
            Self::ChannelAdmin => "default_channel_admin_role",
            Self::ChannelUser => "default_channel_user_role",
        }
    }
}

impl fmt::Display for RoleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reasons a scheme record fails validation.
///
/// Variants are listed in the order the checks run; validation stops at the
/// first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeValidationError {
    /// A persisted scheme must carry a realised identifier.
    #[error("scheme id must be {expected} bytes, found {actual}")]
    InvalidId {
        /// Required identifier length.
        expected: usize,
        /// Length of the supplied identifier.
        actual: usize,
    },

    /// The name is empty or too long.
    #[error("scheme name must be between 1 and {max} bytes, found {actual}")]
    NameLength {
        /// Maximum accepted length.
        max: usize,
        /// Length of the supplied name.
        actual: usize,
    },

    /// The description is too long.
    #[error("scheme description must be at most {max} bytes, found {actual}")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the supplied description.
        actual: usize,
    },

    /// The scope string is not one of the recognised constants.
    #[error("unknown scheme scope '{scope}'")]
    UnknownScope {
        /// The rejected scope string.
        scope: String,
    },

    /// A required role default is not a valid role name.
    #[error("{field} is not a valid role name: '{value}'")]
    InvalidRoleName {
        /// Offending field.
        field: RoleField,
        /// Rejected value.
        value: String,
    },

    /// A channel scheme carries a team role default.
    #[error("{field} must be empty for channel schemes, found '{value}'")]
    UnexpectedTeamRole {
        /// Offending field.
        field: RoleField,
        /// Value that should have been empty.
        value: String,
    },
}
