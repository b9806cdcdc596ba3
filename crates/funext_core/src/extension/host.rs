//! Host bridge contract.
//!
//! The two callouts an invocation needs from the host application. The bridge
//! is injected per invocation so the contract stays free of any particular
//! cross-boundary mechanism.

use crate::model::context::Context;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a host bridge callout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "host callout failed: {}", self.message)
    }
}

impl Error for HostError {}

pub type HostResult<T> = Result<T, HostError>;

/// Host-provided capability pair.
pub trait HostBridge {
    /// Returns a snapshot of every script currently loaded by the host.
    ///
    /// Called once per invocation, before `Extension::init`.
    fn fetch_context(&mut self) -> HostResult<Context>;

    /// Hands the (possibly edited) context back for the host to absorb.
    ///
    /// Called once per invocation, after `Extension::run` succeeded. Ownership
    /// of the context returns to the host.
    fn write_back_context(&mut self, ctx: Context) -> HostResult<()>;
}
