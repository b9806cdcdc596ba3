//! Script and action records.

use serde::{Deserialize, Serialize};

/// One timestamped point event inside a script.
///
/// Ordering by `at` is a host convention and is not enforced here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptAction {
    /// Time position in milliseconds.
    pub at: i32,
    /// Position magnitude at `at`.
    pub pos: i32,
    /// Whether the host had this action selected when the context was built.
    pub selected: bool,
}

impl ScriptAction {
    /// Creates an unselected action.
    pub fn new(at: i32, pos: i32) -> Self {
        Self {
            at,
            pos,
            selected: false,
        }
    }

    /// Creates an action already marked as selected.
    pub fn selected(at: i32, pos: i32) -> Self {
        Self {
            at,
            pos,
            selected: true,
        }
    }
}

/// Named ordered sequence of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Display name supplied by the host. Empty when the host has none.
    pub name: String,
    /// Actions in temporal order as loaded by the host.
    pub actions: Vec<ScriptAction>,
}

impl Script {
    /// Creates an empty script with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_actions(name, Vec::new())
    }

    pub fn with_actions(name: impl Into<String>, actions: Vec<ScriptAction>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }
}
