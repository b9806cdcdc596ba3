//! Extension contract and host wiring.
//!
//! This module defines the capability set third-party extensions implement,
//! the host bridge the invocation depends on, and the entry point that drives
//! one extension through its lifecycle. Host-side bridge implementations live
//! in the host application.

pub mod contract;
pub mod host;
pub mod invocation;
pub mod manifest;
pub mod registry;
