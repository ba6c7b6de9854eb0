//! Restart-surviving persistence for the host's pending-job queue.
//!
//! Tracks jobs whose execution window is open, mirrors them to a flat text
//! file on every change, and re-schedules the still-matching jobs once after
//! a restart.

pub mod error;
pub mod mirror;
pub mod queue;
pub mod reconcile;

pub use error::{MirrorError, MirrorResult};
pub use mirror::QueueMirror;
pub use queue::PersistentQueue;
pub use reconcile::ReconcileState;
