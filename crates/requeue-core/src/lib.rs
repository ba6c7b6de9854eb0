//! Core domain types and traits for the requeue persistence layer.
//!
//! This crate contains:
//! - The `Job` abstraction and the `JobHost` boundary trait
//! - The `ResumeCause` marker attached to re-scheduled runs

pub mod cause;
pub mod host;

pub use cause::ResumeCause;
pub use host::{Job, JobHost};
