//! Permission scheme records.
//!
//! A scheme is a named, reusable bundle of default role assignments attached
//! to a team or a channel. This crate owns the record shape, its
//! scope-dependent invariants, partial updates and the JSON wire format.
//! Persistence, transport and authorisation decisions live elsewhere.
//!
//! # Overview
//!
//! - [`Scheme`] is the flat wire record; [`SchemeDefaults`] is its typed,
//!   scope-shaped view.
//! - Validation comes in two strengths: create-time rules, and the full
//!   rules for persisted records which also require a realised id. Each has
//!   a boolean form and a `check_*` form naming the failed rule.
//! - Role names are checked by an injected [`RoleNameValidator`];
//!   [`StandardRoleNames`] is the stock rule.
//! - [`SchemePatch`] updates name and description only.
//!
//! # Example
//!
//! ```
//! use permission_scheme::{StandardRoleNames, patch_from_json, scheme_from_json};
//!
//! let json = r#"{
//!     "id": "", "name": "Default", "description": "",
//!     "create_at": 0, "update_at": 0, "delete_at": 0,
//!     "scope": "team",
//!     "default_team_admin_role": "team_admin",
//!     "default_team_user_role": "team_user",
//!     "default_channel_admin_role": "channel_admin",
//!     "default_channel_user_role": "channel_user"
//! }"#;
//!
//! let roles = StandardRoleNames::default();
//! let mut scheme = scheme_from_json(json).expect("well-formed scheme");
//! assert!(scheme.is_valid_for_create(&roles));
//! assert!(!scheme.is_valid(&roles)); // no id assigned yet
//!
//! let patch = patch_from_json(r#"{"name": null, "description": "Org default"}"#)
//!     .expect("well-formed patch");
//! scheme.apply_patch(&patch);
//! assert_eq!(scheme.name, "Default");
//! assert_eq!(scheme.description, "Org default");
//! ```

mod codec;
pub mod config;
mod error;
mod patch;
mod role_name;
mod scheme;
mod scope;

pub use codec::{
    patch_from_json, patch_from_reader, patch_to_json, scheme_from_json, scheme_from_reader,
    scheme_to_json, schemes_from_json, schemes_from_reader, schemes_to_json,
};
pub use error::{RoleField, SchemeValidationError};
pub use patch::{PatchField, SchemePatch};
pub use role_name::{ROLE_NAME_MAX_LENGTH, RoleNameValidator, StandardRoleNames};
pub use scheme::{
    SCHEME_DESCRIPTION_MAX_LENGTH, SCHEME_ID_LENGTH, SCHEME_NAME_MAX_LENGTH, Scheme,
    SchemeDefaults,
};
pub use scope::{SCHEME_SCOPE_CHANNEL, SCHEME_SCOPE_TEAM, SchemeScope};
