//! Sparse updates for scheme records.
//!
//! A [`SchemePatch`] names the fields a caller wants to overwrite. Each field
//! is a [`PatchField`], which keeps "leave unchanged" apart from "set to the
//! empty string": on the wire the former is `null` and the latter is `""`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state patch slot: either untouched or set to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    /// Leave the target field unchanged.
    Unset,
    /// Overwrite the target field with this value.
    Set(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> PatchField<T> {
    /// Whether the slot carries a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Borrow the carried value, if any.
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }
}

impl<T: Clone> PatchField<T> {
    /// Overwrite `target` when the slot is set.
    pub fn apply_to(&self, target: &mut T) {
        if let Self::Set(value) = self {
            target.clone_from(value);
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => serializer.serialize_some(value),
            Self::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Fields of a scheme that may be changed after creation.
///
/// Scope, role defaults and timestamps are structural and are not patchable.
///
/// # Examples
///
/// ```
/// use permission_scheme::{PatchField, SchemePatch};
///
/// let patch = SchemePatch {
///     name: PatchField::Set("Renamed".to_owned()),
///     ..SchemePatch::default()
/// };
/// assert!(!patch.is_empty());
/// assert!(!patch.description.is_set());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemePatch {
    /// Replacement display name.
    #[serde(default)]
    pub name: PatchField<String>,
    /// Replacement description; `Set(String::new())` clears it.
    #[serde(default)]
    pub description: PatchField<String>,
}

impl SchemePatch {
    /// Whether applying the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.name.is_set() && !self.description.is_set()
    }
}
