//! CLI smoke entry point.
//!
//! Prints crate linkage facts so `funext_core` can be checked without a host.

use funext_core::{core_version, default_log_level, ExtensionRegistry};

fn main() {
    let registry = ExtensionRegistry::new();
    println!("funext_core version={}", core_version());
    println!("funext_core default_log_level={}", default_log_level());
    println!("funext_core registered_extensions={}", registry.len());
}
