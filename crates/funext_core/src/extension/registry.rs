//! In-process extension registry.
//!
//! Hosts register one factory per extension and invoke extensions by id. Each
//! invocation builds a fresh instance, so no extension state leaks between
//! activations.

use crate::extension::contract::Extension;
use crate::extension::host::HostBridge;
use crate::extension::invocation::{run_extension, InvocationError};
use crate::extension::manifest::{ExtensionManifest, ManifestValidationError};
use log::{debug, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Constructs a new extension instance for one invocation.
pub type ExtensionFactory = fn() -> Box<dyn Extension>;

struct RegisteredExtension {
    manifest: ExtensionManifest,
    factory: ExtensionFactory,
}

/// Extension catalogue keyed by manifest id.
#[derive(Default)]
pub struct ExtensionRegistry {
    entries: BTreeMap<String, RegisteredExtension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one extension after manifest validation.
    pub fn register(
        &mut self,
        manifest: ExtensionManifest,
        factory: ExtensionFactory,
    ) -> Result<(), ExtensionRegistryError> {
        manifest
            .validate()
            .map_err(ExtensionRegistryError::InvalidManifest)?;
        let id = manifest.id.trim().to_string();
        if self.entries.contains_key(id.as_str()) {
            return Err(ExtensionRegistryError::DuplicateExtensionId(id));
        }

        debug!(
            "event=extension_register module=registry status=ok extension_id={} version={}",
            id, manifest.version
        );
        self.entries
            .insert(id, RegisteredExtension { manifest, factory });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, extension_id: &str) -> Option<&ExtensionManifest> {
        self.entries
            .get(extension_id.trim())
            .map(|entry| &entry.manifest)
    }

    /// Returns manifests sorted by id.
    pub fn manifests(&self) -> Vec<&ExtensionManifest> {
        self.entries.values().map(|entry| &entry.manifest).collect()
    }

    /// Builds a fresh instance of `extension_id` and runs it against `host`.
    pub fn invoke<H: HostBridge + ?Sized>(
        &self,
        extension_id: &str,
        host: &mut H,
    ) -> Result<(), ExtensionRegistryError> {
        let normalized = extension_id.trim();
        let entry = self
            .entries
            .get(normalized)
            .ok_or_else(|| ExtensionRegistryError::ExtensionNotFound(normalized.to_string()))?;

        info!(
            "event=extension_invoke module=registry status=start extension_id={} version={}",
            normalized, entry.manifest.version
        );
        let mut extension = (entry.factory)();
        run_extension(host, &mut extension).map_err(|source| {
            ExtensionRegistryError::Invocation {
                extension_id: normalized.to_string(),
                source,
            }
        })
    }
}

/// Registry registration and invocation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionRegistryError {
    InvalidManifest(ManifestValidationError),
    DuplicateExtensionId(String),
    ExtensionNotFound(String),
    Invocation {
        extension_id: String,
        source: InvocationError,
    },
}

impl Display for ExtensionRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidManifest(err) => write!(f, "invalid extension manifest: {err}"),
            Self::DuplicateExtensionId(value) => {
                write!(f, "extension id already registered: {value}")
            }
            Self::ExtensionNotFound(value) => write!(f, "extension not found: {value}"),
            Self::Invocation {
                extension_id,
                source,
            } => write!(f, "extension `{extension_id}` failed: {source}"),
        }
    }
}

impl Error for ExtensionRegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidManifest(err) => Some(err),
            Self::Invocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtensionRegistry, ExtensionRegistryError};
    use crate::extension::contract::{Extension, ExtensionResult};
    use crate::extension::manifest::ExtensionManifest;
    use crate::model::context::Context;

    struct Noop;

    impl Extension for Noop {
        fn init(&mut self, _ctx: &mut Context) -> ExtensionResult<()> {
            Ok(())
        }

        fn run(&mut self, _ctx: &mut Context) -> ExtensionResult<()> {
            Ok(())
        }
    }

    fn noop() -> Box<dyn Extension> {
        Box::new(Noop)
    }

    #[test]
    fn rejects_duplicate_extension_id() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(ExtensionManifest::new("test.noop", "0.1.0", "Noop"), noop)
            .expect("first registration should succeed");
        let err = registry
            .register(ExtensionManifest::new("test.noop", "0.2.0", "Noop"), noop)
            .expect_err("duplicate registration must fail");
        assert_eq!(
            err,
            ExtensionRegistryError::DuplicateExtensionId("test.noop".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_invalid_manifest() {
        let mut registry = ExtensionRegistry::new();
        let err = registry
            .register(ExtensionManifest::new("Test Noop", "0.1.0", "Noop"), noop)
            .expect_err("invalid id must fail");
        assert!(matches!(err, ExtensionRegistryError::InvalidManifest(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn lists_manifests_sorted_by_id() {
        let mut registry = ExtensionRegistry::new();
        for id in ["test.zeta", "test.alpha", "test.mid"] {
            registry
                .register(ExtensionManifest::new(id, "1.0.0", "Noop"), noop)
                .expect("registration");
        }
        let ids: Vec<&str> = registry
            .manifests()
            .iter()
            .map(|manifest| manifest.id.as_str())
            .collect();
        assert_eq!(ids, vec!["test.alpha", "test.mid", "test.zeta"]);
        assert_eq!(
            registry.get(" test.mid ").map(|m| m.version.as_str()),
            Some("1.0.0")
        );
    }
}
