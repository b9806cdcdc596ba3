//! Extension contract for timed-script editing hosts.
//!
//! A host hands its loaded scripts to an extension as one [`Context`], the
//! extension edits them in place through [`Extension::init`] and
//! [`Extension::run`], and the host absorbs the result again.

pub mod extension;
pub mod logging;
pub mod model;

pub use extension::contract::{Extension, ExtensionError, ExtensionResult};
pub use extension::host::{HostBridge, HostError, HostResult};
pub use extension::invocation::{
    run_extension, InvocationError, InvocationId, InvocationResult, InvocationStage,
    InvocationState,
};
pub use extension::manifest::{ExtensionManifest, ManifestValidationError};
pub use extension::registry::{ExtensionFactory, ExtensionRegistry, ExtensionRegistryError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::context::Context;
pub use model::script::{Script, ScriptAction};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
