//! Context snapshot handed from host to extension.
//!
//! # Invariants
//! - A context is the complete set of scripts the host had loaded at fetch
//!   time, in host order.
//! - Exactly one extension holds a context during an invocation.

use crate::model::script::Script;
use serde::{Deserialize, Serialize};

/// Complete state snapshot exchanged with the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub scripts: Vec<Script>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scripts(scripts: Vec<Script>) -> Self {
        Self { scripts }
    }

    /// Returns the first script with the given name.
    ///
    /// Names are not unique; hosts may load several untitled scripts.
    pub fn script_mut(&mut self, name: &str) -> Option<&mut Script> {
        self.scripts.iter_mut().find(|script| script.name == name)
    }

    /// Total number of actions across all scripts.
    pub fn action_count(&self) -> usize {
        self.scripts.iter().map(|script| script.actions.len()).sum()
    }
}
