//! Validated permission-name newtype.
//!
//! A [`PermissionName`] is both the key of a catalog entry and the label of a
//! requested action. Names are matched by exact string comparison; a grant
//! whose catalog entry was deleted still compares equal to the same action
//! string and therefore still authorizes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Maximum accepted length of a permission name, in characters.
pub const MAX_PERMISSION_NAME_LEN: usize = 100;

/// Error returned when a permission name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPermissionName {
    #[error("Permission name cannot be empty")]
    Empty,

    #[error("Permission name exceeds {MAX_PERMISSION_NAME_LEN} characters")]
    TooLong,
}

/// A non-empty, trimmed, human-readable permission label.
///
/// Examples: `"View Dashboard"`, `"Add Vehicles"`. Comparison is
/// case-sensitive and exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionName(String);

impl PermissionName {
    /// Validates and constructs a permission name. Leading and trailing
    /// whitespace is trimmed before validation.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidPermissionName> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidPermissionName::Empty);
        }
        if trimmed.chars().count() > MAX_PERMISSION_NAME_LEN {
            return Err(InvalidPermissionName::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The inner label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PermissionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PermissionName {
    type Error = InvalidPermissionName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PermissionName> for String {
    fn from(name: PermissionName) -> Self {
        name.0
    }
}

impl AsRef<str> for PermissionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_label() {
        let name = PermissionName::new("View Dashboard").unwrap();
        assert_eq!(name.as_str(), "View Dashboard");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = PermissionName::new("  Add Vehicles  ").unwrap();
        assert_eq!(name.as_str(), "Add Vehicles");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(
            PermissionName::new("").unwrap_err(),
            InvalidPermissionName::Empty
        );
        assert_eq!(
            PermissionName::new("   ").unwrap_err(),
            InvalidPermissionName::Empty
        );
    }

    #[test]
    fn rejects_over_length() {
        let long = "x".repeat(MAX_PERMISSION_NAME_LEN + 1);
        assert_eq!(
            PermissionName::new(long).unwrap_err(),
            InvalidPermissionName::TooLong
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let a = PermissionName::new("View Drivers").unwrap();
        let b = PermissionName::new("view drivers").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: PermissionName = serde_json::from_str("\"Manage Vehicles\"").unwrap();
        assert_eq!(ok.as_str(), "Manage Vehicles");

        let err: Result<PermissionName, _> = serde_json::from_str("\"   \"");
        assert!(err.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = PermissionName::new("View Profile").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"View Profile\"");
    }
}
