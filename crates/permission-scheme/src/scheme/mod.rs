//! Permission scheme record.
//!
//! A scheme is a named bundle of default role assignments attached to a team
//! or a channel. The record is kept flat so it matches the wire format
//! exactly; the two structurally different shapes are recovered through
//! [`Scheme::defaults`].
//!
//! ## Invariants
//! - `scope` is `"team"` or `"channel"`.
//! - Team schemes name all four role defaults.
//! - Channel schemes name both channel role defaults and leave both team
//!   role fields empty. Those empty strings are the flattened encoding of
//!   [`SchemeDefaults::Channel`] and carry no meaning of their own.
//! - A persisted scheme carries an identifier of [`SCHEME_ID_LENGTH`] bytes.
//!
//! Lengths are counted in UTF-8 bytes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RoleField, SchemeValidationError};
use crate::patch::SchemePatch;
use crate::role_name::RoleNameValidator;
use crate::scope::SchemeScope;

/// Maximum length of a scheme name.
pub const SCHEME_NAME_MAX_LENGTH: usize = 64;

/// Maximum length of a scheme description.
pub const SCHEME_DESCRIPTION_MAX_LENGTH: usize = 1024;

/// Length of a realised scheme identifier.
pub const SCHEME_ID_LENGTH: usize = 26;

/// Scheme record as stored and exchanged.
///
/// Every key is always serialised; fields that do not apply hold their zero
/// value. Keys missing from an incoming payload decode to zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheme {
    /// Identifier assigned by the owning service; empty before creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Creation time in epoch milliseconds.
    pub create_at: i64,
    /// Last update time in epoch milliseconds.
    pub update_at: i64,
    /// Soft-deletion time in epoch milliseconds; `0` while live.
    pub delete_at: i64,
    /// Raw scope string, see [`SchemeScope`].
    pub scope: String,
    /// Default role for team administrators (team schemes only).
    pub default_team_admin_role: String,
    /// Default role for team members (team schemes only).
    pub default_team_user_role: String,
    /// Default role for channel administrators.
    pub default_channel_admin_role: String,
    /// Default role for channel members.
    pub default_channel_user_role: String,
}

/// Role defaults of a scheme, shaped by its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeDefaults {
    /// Defaults for a team scheme.
    Team {
        /// Default team administrator role.
        team_admin_role: String,
        /// Default team member role.
        team_user_role: String,
        /// Default channel administrator role.
        channel_admin_role: String,
        /// Default channel member role.
        channel_user_role: String,
    },
    /// Defaults for a channel scheme.
    Channel {
        /// Default channel administrator role.
        channel_admin_role: String,
        /// Default channel member role.
        channel_user_role: String,
    },
}

impl SchemeDefaults {
    /// Scope implied by the variant.
    #[must_use]
    pub const fn scope(&self) -> SchemeScope {
        match self {
            Self::Team { .. } => SchemeScope::Team,
            Self::Channel { .. } => SchemeScope::Channel,
        }
    }
}

impl Scheme {
    /// Build a create-time scheme (no id, zero timestamps) from typed
    /// defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use permission_scheme::{Scheme, SchemeDefaults, StandardRoleNames};
    ///
    /// let scheme = Scheme::with_defaults(
    ///     "Moderated",
    ///     "",
    ///     SchemeDefaults::Channel {
    ///         channel_admin_role: "channel_admin".to_owned(),
    ///         channel_user_role: "channel_user".to_owned(),
    ///     },
    /// );
    /// assert_eq!(scheme.scope, "channel");
    /// assert!(scheme.default_team_admin_role.is_empty());
    /// assert!(scheme.is_valid_for_create(&StandardRoleNames::default()));
    /// ```
    #[must_use]
    pub fn with_defaults(
        name: impl Into<String>,
        description: impl Into<String>,
        defaults: SchemeDefaults,
    ) -> Self {
        let scope = defaults.scope().as_str().to_owned();
        let base = Self {
            name: name.into(),
            description: description.into(),
            scope,
            ..Self::default()
        };
        match defaults {
            SchemeDefaults::Team {
                team_admin_role,
                team_user_role,
                channel_admin_role,
                channel_user_role,
            } => Self {
                default_team_admin_role: team_admin_role,
                default_team_user_role: team_user_role,
                default_channel_admin_role: channel_admin_role,
                default_channel_user_role: channel_user_role,
                ..base
            },
            SchemeDefaults::Channel {
                channel_admin_role,
                channel_user_role,
            } => Self {
                default_channel_admin_role: channel_admin_role,
                default_channel_user_role: channel_user_role,
                ..base
            },
        }
    }

    /// Parsed scope, or `None` when the raw string is not recognised.
    #[must_use]
    pub fn scope_kind(&self) -> Option<SchemeScope> {
        SchemeScope::parse(&self.scope)
    }

    /// Typed view of the role defaults.
    ///
    /// Returns `None` when the scope is unknown or a channel scheme carries
    /// team roles. Role names are not checked here.
    #[must_use]
    pub fn defaults(&self) -> Option<SchemeDefaults> {
        match self.scope_kind()? {
            SchemeScope::Team => Some(SchemeDefaults::Team {
                team_admin_role: self.default_team_admin_role.clone(),
                team_user_role: self.default_team_user_role.clone(),
                channel_admin_role: self.default_channel_admin_role.clone(),
                channel_user_role: self.default_channel_user_role.clone(),
            }),
            SchemeScope::Channel => {
                if !self.default_team_admin_role.is_empty()
                    || !self.default_team_user_role.is_empty()
                {
                    return None;
                }
                Some(SchemeDefaults::Channel {
                    channel_admin_role: self.default_channel_admin_role.clone(),
                    channel_user_role: self.default_channel_user_role.clone(),
                })
            }
        }
    }

    /// Whether the scheme has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.delete_at != 0
    }

    /// Soft-delete the scheme at `at_millis`.
    pub const fn mark_deleted(&mut self, at_millis: i64) {
        self.delete_at = at_millis;
        self.update_at = at_millis;
    }

    /// Overwrite the fields the patch sets. Never validates, never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use permission_scheme::{PatchField, Scheme, SchemePatch};
    ///
    /// let mut scheme = Scheme {
    ///     name: "Old".to_owned(),
    ///     description: "kept".to_owned(),
    ///     ..Scheme::default()
    /// };
    /// scheme.apply_patch(&SchemePatch {
    ///     name: PatchField::Set("New".to_owned()),
    ///     description: PatchField::Unset,
    /// });
    /// assert_eq!(scheme.name, "New");
    /// assert_eq!(scheme.description, "kept");
    /// ```
    pub fn apply_patch(&mut self, patch: &SchemePatch) {
        patch.name.apply_to(&mut self.name);
        patch.description.apply_to(&mut self.description);
    }

    /// Validate a persisted scheme: the id check followed by the create-time
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemeValidationError`] encountered.
    pub fn check<V>(&self, roles: &V) -> Result<(), SchemeValidationError>
    where
        V: RoleNameValidator + ?Sized,
    {
        self.check_id()
            .and_then(|()| self.check_create_rules(roles))
            .inspect_err(|error| self.log_rejection(error))
    }

    /// Validate a scheme that has not been assigned an id yet.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemeValidationError`] encountered.
    pub fn check_for_create<V>(&self, roles: &V) -> Result<(), SchemeValidationError>
    where
        V: RoleNameValidator + ?Sized,
    {
        self.check_create_rules(roles)
            .inspect_err(|error| self.log_rejection(error))
    }

    /// Boolean form of [`Scheme::check`].
    #[must_use]
    pub fn is_valid<V>(&self, roles: &V) -> bool
    where
        V: RoleNameValidator + ?Sized,
    {
        self.check(roles).is_ok()
    }

    /// Boolean form of [`Scheme::check_for_create`].
    #[must_use]
    pub fn is_valid_for_create<V>(&self, roles: &V) -> bool
    where
        V: RoleNameValidator + ?Sized,
    {
        self.check_for_create(roles).is_ok()
    }

    fn check_id(&self) -> Result<(), SchemeValidationError> {
        if self.id.len() == SCHEME_ID_LENGTH {
            return Ok(());
        }
        Err(SchemeValidationError::InvalidId {
            expected: SCHEME_ID_LENGTH,
            actual: self.id.len(),
        })
    }

    fn check_create_rules<V>(&self, roles: &V) -> Result<(), SchemeValidationError>
    where
        V: RoleNameValidator + ?Sized,
    {
        let name_length = self.name.len();
        if name_length == 0 || name_length > SCHEME_NAME_MAX_LENGTH {
            return Err(SchemeValidationError::NameLength {
                max: SCHEME_NAME_MAX_LENGTH,
                actual: name_length,
            });
        }

        if self.description.len() > SCHEME_DESCRIPTION_MAX_LENGTH {
            return Err(SchemeValidationError::DescriptionTooLong {
                max: SCHEME_DESCRIPTION_MAX_LENGTH,
                actual: self.description.len(),
            });
        }

        let scope = self
            .scope_kind()
            .ok_or_else(|| SchemeValidationError::UnknownScope {
                scope: self.scope.clone(),
            })?;

        if scope.has_team_roles() {
            require_role(roles, RoleField::TeamAdmin, &self.default_team_admin_role)?;
            require_role(roles, RoleField::TeamUser, &self.default_team_user_role)?;
        } else {
            require_empty(RoleField::TeamAdmin, &self.default_team_admin_role)?;
            require_empty(RoleField::TeamUser, &self.default_team_user_role)?;
        }

        require_role(
            roles,
            RoleField::ChannelAdmin,
            &self.default_channel_admin_role,
        )?;
        require_role(roles, RoleField::ChannelUser, &self.default_channel_user_role)
    }

    fn log_rejection(&self, error: &SchemeValidationError) {
        debug!(
            scheme_id = %self.id,
            scheme_name = %self.name,
            scope = %self.scope,
            %error,
            "scheme rejected by validation"
        );
    }
}

fn require_role<V>(roles: &V, field: RoleField, value: &str) -> Result<(), SchemeValidationError>
where
    V: RoleNameValidator + ?Sized,
{
    if roles.is_valid_role_name(value) {
        return Ok(());
    }
    Err(SchemeValidationError::InvalidRoleName {
        field,
        value: value.to_owned(),
    })
}

fn require_empty(field: RoleField, value: &str) -> Result<(), SchemeValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    Err(SchemeValidationError::UnexpectedTeamRole {
        field,
        value: value.to_owned(),
    })
}
