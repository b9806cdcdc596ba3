//! Extension manifest declaration and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Declarative identity of one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionManifest {
    /// Stable extension identifier, e.g. `builtin.select.every_other`.
    pub id: String,
    /// Semantic version string (`major.minor.patch`).
    pub version: String,
    /// Label a host shows when listing available extensions.
    pub name: String,
}

impl ExtensionManifest {
    pub fn new(
        id: impl Into<String>,
        version: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            name: name.into(),
        }
    }

    /// Validates declaration-level manifest invariants.
    pub fn validate(&self) -> Result<(), ManifestValidationError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ManifestValidationError::EmptyId);
        }
        if !is_valid_extension_id(id) {
            return Err(ManifestValidationError::InvalidId(self.id.clone()));
        }

        let version = self.version.trim();
        if version.is_empty() {
            return Err(ManifestValidationError::EmptyVersion);
        }
        if !is_semver_triplet(version) {
            return Err(ManifestValidationError::InvalidVersion(
                self.version.clone(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(ManifestValidationError::EmptyName);
        }
        Ok(())
    }
}

fn is_valid_extension_id(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
        } else if matches!(c, '.' | '_' | '-') && !prev_separator {
            prev_separator = true;
        } else {
            return false;
        }
    }
    !prev_separator
}

fn is_semver_triplet(value: &str) -> bool {
    let parts: Vec<&str> = value.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Manifest validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestValidationError {
    EmptyId,
    InvalidId(String),
    EmptyVersion,
    InvalidVersion(String),
    EmptyName,
}

impl Display for ManifestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "manifest id must not be empty"),
            Self::InvalidId(value) => write!(f, "manifest id is invalid: {value}"),
            Self::EmptyVersion => write!(f, "manifest version must not be empty"),
            Self::InvalidVersion(value) => write!(
                f,
                "manifest version is invalid: {value} (expected major.minor.patch)"
            ),
            Self::EmptyName => write!(f, "manifest name must not be empty"),
        }
    }
}

impl Error for ManifestValidationError {}

#[cfg(test)]
mod tests {
    use super::{ExtensionManifest, ManifestValidationError};

    fn valid_manifest() -> ExtensionManifest {
        ExtensionManifest::new("builtin.select.every-other", "0.1.0", "Select every other")
    }

    #[test]
    fn validates_well_formed_manifest() {
        assert!(valid_manifest().validate().is_ok());
    }

    #[test]
    fn rejects_blank_id() {
        let mut manifest = valid_manifest();
        manifest.id = "   ".to_string();
        assert_eq!(
            manifest.validate().unwrap_err(),
            ManifestValidationError::EmptyId
        );
    }

    #[test]
    fn rejects_invalid_id_format() {
        for id in ["Builtin.Select", "select..all", "select.", ".select", "sel ect"] {
            let mut manifest = valid_manifest();
            manifest.id = id.to_string();
            let err = manifest.validate().unwrap_err();
            assert!(
                matches!(err, ManifestValidationError::InvalidId(_)),
                "id `{id}` should be rejected"
            );
        }
    }

    #[test]
    fn rejects_invalid_version_format() {
        for version in ["v1", "1.0", "1.0.0.0", "1.x.0"] {
            let mut manifest = valid_manifest();
            manifest.version = version.to_string();
            let err = manifest.validate().unwrap_err();
            assert!(matches!(err, ManifestValidationError::InvalidVersion(_)));
        }
    }

    #[test]
    fn rejects_blank_name() {
        let mut manifest = valid_manifest();
        manifest.name = String::new();
        assert_eq!(
            manifest.validate().unwrap_err(),
            ManifestValidationError::EmptyName
        );
    }
}
