//! Extension invocation entry point.
//!
//! # Responsibility
//! - Drive one extension through fetch, init, run and write-back.
//! - Own the context for the whole invocation and lend it to the extension.
//!
//! # Invariants
//! - Steps run in strict order with no retries and no skipping.
//! - The first failing step halts the invocation; later steps never run.
//! - No context reference outlives the invocation.

use crate::extension::contract::{Extension, ExtensionError};
use crate::extension::host::{HostBridge, HostError};
use crate::model::context::Context;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Per-invocation identifier used to correlate log lines.
pub type InvocationId = Uuid;

/// Lifecycle position of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    /// Context assigned, `init` not yet completed.
    Uninitialized,
    /// `init` completed, `run` not yet completed.
    Initialized,
    /// `run` completed.
    Ran,
}

impl InvocationState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initialized => "initialized",
            Self::Ran => "ran",
        }
    }
}

/// Step of the invocation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStage {
    Fetch,
    Init,
    Run,
    WriteBack,
}

impl InvocationStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Init => "init",
            Self::Run => "run",
            Self::WriteBack => "write_back",
        }
    }
}

/// Failure that halted an invocation, tagged with the failing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    Fetch(HostError),
    Init(ExtensionError),
    Run(ExtensionError),
    WriteBack(HostError),
}

impl InvocationError {
    /// Step that failed.
    pub fn stage(&self) -> InvocationStage {
        match self {
            Self::Fetch(_) => InvocationStage::Fetch,
            Self::Init(_) => InvocationStage::Init,
            Self::Run(_) => InvocationStage::Run,
            Self::WriteBack(_) => InvocationStage::WriteBack,
        }
    }

    /// Last state the invocation reached before the failure.
    pub fn last_state(&self) -> InvocationState {
        match self {
            Self::Fetch(_) | Self::Init(_) => InvocationState::Uninitialized,
            Self::Run(_) => InvocationState::Initialized,
            Self::WriteBack(_) => InvocationState::Ran,
        }
    }
}

impl Display for InvocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "context fetch failed: {err}"),
            Self::Init(err) => write!(f, "extension init failed: {err}"),
            Self::Run(err) => write!(f, "extension run failed: {err}"),
            Self::WriteBack(err) => write!(f, "context write-back failed: {err}"),
        }
    }
}

impl Error for InvocationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(err) | Self::WriteBack(err) => Some(err),
            Self::Init(err) | Self::Run(err) => Some(err),
        }
    }
}

pub type InvocationResult<T> = Result<T, InvocationError>;

/// Runs one extension against the host's current context.
///
/// Order: fetch context, assign it, `init`, `run`, write context back.
///
/// # Errors
/// - Returns the first failing step wrapped in [`InvocationError`]. Steps after
///   the failure are not attempted, so a failed `init` never reaches `run` and
///   nothing is written back unless `run` succeeded.
pub fn run_extension<H, E>(host: &mut H, extension: &mut E) -> InvocationResult<()>
where
    H: HostBridge + ?Sized,
    E: Extension + ?Sized,
{
    let mut invocation = Invocation::fetch(host)?;
    invocation.init(extension)?;
    invocation.run(extension)?;
    invocation.write_back(host)
}

struct Invocation {
    id: InvocationId,
    ctx: Context,
    state: InvocationState,
}

impl Invocation {
    fn fetch<H: HostBridge + ?Sized>(host: &mut H) -> InvocationResult<Self> {
        let id = Uuid::new_v4();
        let ctx = host.fetch_context().map_err(|err| {
            warn!(
                "event=context_fetch module=extension status=error invocation_id={} error={}",
                id, err
            );
            InvocationError::Fetch(err)
        })?;
        debug!(
            "event=context_fetch module=extension status=ok invocation_id={} scripts={} actions={}",
            id,
            ctx.scripts.len(),
            ctx.action_count()
        );
        Ok(Self {
            id,
            ctx,
            state: InvocationState::Uninitialized,
        })
    }

    fn init<E: Extension + ?Sized>(&mut self, extension: &mut E) -> InvocationResult<()> {
        debug_assert_eq!(self.state, InvocationState::Uninitialized);
        extension.init(&mut self.ctx).map_err(|err| {
            self.log_stage_failure(InvocationStage::Init, &err);
            InvocationError::Init(err)
        })?;
        self.advance(InvocationState::Initialized);
        Ok(())
    }

    fn run<E: Extension + ?Sized>(&mut self, extension: &mut E) -> InvocationResult<()> {
        debug_assert_eq!(self.state, InvocationState::Initialized);
        extension.run(&mut self.ctx).map_err(|err| {
            self.log_stage_failure(InvocationStage::Run, &err);
            InvocationError::Run(err)
        })?;
        self.advance(InvocationState::Ran);
        Ok(())
    }

    fn write_back<H: HostBridge + ?Sized>(self, host: &mut H) -> InvocationResult<()> {
        debug_assert_eq!(self.state, InvocationState::Ran);
        let Self { id, ctx, .. } = self;
        let scripts = ctx.scripts.len();
        let actions = ctx.action_count();
        host.write_back_context(ctx).map_err(|err| {
            warn!(
                "event=context_write_back module=extension status=error invocation_id={} error={}",
                id, err
            );
            InvocationError::WriteBack(err)
        })?;
        debug!(
            "event=context_write_back module=extension status=ok invocation_id={} scripts={} actions={}",
            id, scripts, actions
        );
        info!(
            "event=extension_invocation module=extension status=ok invocation_id={}",
            id
        );
        Ok(())
    }

    fn advance(&mut self, next: InvocationState) {
        let event = match next {
            InvocationState::Initialized => "extension_init",
            _ => "extension_run",
        };
        self.state = next;
        debug!(
            "event={} module=extension status=ok invocation_id={} state={}",
            event,
            self.id,
            next.as_str()
        );
    }

    fn log_stage_failure(&self, stage: InvocationStage, err: &ExtensionError) {
        warn!(
            "event=extension_{} module=extension status=error invocation_id={} state={} error={}",
            stage.as_str(),
            self.id,
            self.state.as_str(),
            err
        );
    }
}
