//! Boundary traits implemented by the host automation server.

use std::sync::Arc;

use crate::cause::ResumeCause;

/// A schedulable unit of work known to the host.
///
/// The persistence layer treats jobs as opaque. The display name is the only
/// attribute it reads, and it is assumed unique enough for matching; nothing
/// enforces uniqueness, so two jobs sharing a name are indistinguishable
/// here. Names containing newlines are unsupported by the persisted format.
pub trait Job: Send + Sync {
    /// Human-readable name, as shown in the host's UI.
    fn display_name(&self) -> &str;
}

/// Host-side operations the persistence layer depends on.
///
/// Implemented by the embedding automation server. All methods are
/// synchronous and may be called from any host-managed thread. `schedule` is
/// invoked with the queue's internal lock held and must not call back into
/// the same queue on the calling thread.
pub trait JobHost: Send + Sync {
    /// Every job currently known to the host.
    fn jobs(&self) -> Vec<Arc<dyn Job>>;

    /// Request a new run of `job` at zero delay, tagged with `cause`.
    ///
    /// Returns whether the host accepted the request.
    fn schedule(&self, job: &Arc<dyn Job>, cause: ResumeCause) -> bool;
}
