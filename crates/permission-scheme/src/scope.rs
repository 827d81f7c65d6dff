//! Scheme scope identifiers.
//!
//! A scheme applies either to a team or to a channel. The scope is fixed when
//! the scheme is created and travels on the wire as one of two lowercase
//! strings; any other string is not a scope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire value for team-scoped schemes.
pub const SCHEME_SCOPE_TEAM: &str = "team";

/// Wire value for channel-scoped schemes.
pub const SCHEME_SCOPE_CHANNEL: &str = "channel";

/// Entity type a scheme governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeScope {
    /// Team scheme: carries team and channel role defaults.
    Team,
    /// Channel scheme: carries channel role defaults only.
    Channel,
}

impl SchemeScope {
    /// Parse a wire value, returning `None` for anything other than the two
    /// recognised constants. Matching is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use permission_scheme::SchemeScope;
    ///
    /// assert_eq!(SchemeScope::parse("team"), Some(SchemeScope::Team));
    /// assert_eq!(SchemeScope::parse("Team"), None);
    /// assert_eq!(SchemeScope::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            SCHEME_SCOPE_TEAM => Some(Self::Team),
            SCHEME_SCOPE_CHANNEL => Some(Self::Channel),
            _ => None,
        }
    }

    /// Wire representation of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Team => SCHEME_SCOPE_TEAM,
            Self::Channel => SCHEME_SCOPE_CHANNEL,
        }
    }

    /// Whether schemes of this scope carry team role defaults.
    #[must_use]
    pub const fn has_team_roles(self) -> bool {
        matches!(self, Self::Team)
    }
}

impl AsRef<str> for SchemeScope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SchemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
