//! Extension capability set.

use crate::model::context::Context;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure raised by extension code during `init` or `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionError {
    message: String,
}

impl ExtensionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ExtensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "extension failed: {}", self.message)
    }
}

impl Error for ExtensionError {}

impl From<&str> for ExtensionError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExtensionError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Capability set every extension implements.
///
/// The context is lent for each call and never stored by the extension. Both
/// calls of one invocation receive the same context value, so edits made in
/// `init` are visible in `run`.
pub trait Extension {
    /// One-time setup, called exactly once before `run`.
    fn init(&mut self, ctx: &mut Context) -> ExtensionResult<()>;

    /// Performs the extension's edits in place, called exactly once after a
    /// successful `init`.
    fn run(&mut self, ctx: &mut Context) -> ExtensionResult<()>;
}

impl<E: Extension + ?Sized> Extension for Box<E> {
    fn init(&mut self, ctx: &mut Context) -> ExtensionResult<()> {
        (**self).init(ctx)
    }

    fn run(&mut self, ctx: &mut Context) -> ExtensionResult<()> {
        (**self).run(ctx)
    }
}
