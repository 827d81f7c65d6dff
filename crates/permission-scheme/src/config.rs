//! Role naming configuration loaded via OrthoConfig.
//!
//! Validation never reads configuration itself. Services load
//! [`RoleNameSettings`] at startup and inject the resulting validator.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::role_name::StandardRoleNames;

/// Settings for the stock role naming rule.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCHEME_ROLE_NAME")]
pub struct RoleNameSettings {
    /// Longest accepted role name, in bytes. Defaults to
    /// [`crate::ROLE_NAME_MAX_LENGTH`].
    #[ortho_config(default = 64)]
    pub max_length: usize,
}

impl RoleNameSettings {
    /// Role name validator described by these settings.
    #[must_use]
    pub const fn validator(&self) -> StandardRoleNames {
        StandardRoleNames::with_max_length(self.max_length)
    }
}
