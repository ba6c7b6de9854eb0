//! The pending-job queue service.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use requeue_core::{Job, JobHost, ResumeCause};
use tracing::{debug, info, warn};

use crate::mirror::QueueMirror;
use crate::reconcile::{self, ReconcileState};

/// State behind the queue's single lock.
struct Inner {
    pending: Vec<Arc<dyn Job>>,
    reconcile: ReconcileState,
}

/// In-memory queue of jobs believed to be in flight, mirrored to disk on
/// every change so the host can resume them after a restart.
///
/// Construct one per process at startup and hand it to the host's lifecycle
/// and periodic-work adapters. Memory is authoritative: a failed mirror
/// write is logged and absorbed, leaving the file stale until the next
/// successful change.
pub struct PersistentQueue {
    host: Arc<dyn JobHost>,
    mirror: QueueMirror,
    inner: Mutex<Inner>,
}

impl PersistentQueue {
    /// Queue persisting under `state_dir`, resuming jobs through `host`.
    pub fn new(host: Arc<dyn JobHost>, state_dir: &Path) -> Self {
        Self {
            host,
            mirror: QueueMirror::new(state_dir),
            inner: Mutex::new(Inner {
                pending: Vec::new(),
                reconcile: ReconcileState::NotReconciled,
            }),
        }
    }

    /// Record that `job`'s execution window has opened.
    ///
    /// Appends unconditionally; enqueueing a job already present keeps both
    /// entries until each is dequeued. The mirror file is rewritten in full
    /// before the call returns.
    pub fn enqueue(&self, job: Arc<dyn Job>) {
        let mut inner = self.lock();
        inner.pending.push(job);
        self.write_mirror(&inner);
    }

    /// Record that `job`'s execution window has closed, however it ended.
    ///
    /// Removes the first entry holding the same reference; dequeueing a job
    /// that was never enqueued is a silent no-op. The mirror file is
    /// rewritten either way.
    pub fn dequeue(&self, job: &Arc<dyn Job>) {
        let mut inner = self.lock();
        if let Some(index) = inner
            .pending
            .iter()
            .position(|queued| Arc::ptr_eq(queued, job))
        {
            inner.pending.remove(index);
        }
        self.write_mirror(&inner);
    }

    /// Display names of the queued jobs, in queue order.
    pub fn pending_names(&self) -> Vec<String> {
        self.lock()
            .pending
            .iter()
            .map(|job| job.display_name().to_owned())
            .collect()
    }

    /// Re-schedule persisted jobs, once per process lifetime.
    ///
    /// The first call reads the mirror file, schedules a run for every host
    /// job whose display name appears in it, and flips to
    /// [`ReconcileState::Reconciled`]; every later call is a no-op, so this
    /// is safe to invoke from periodic work at any cadence. The queue lock
    /// is held for the whole pass: job starts and stops cannot interleave
    /// with it.
    pub fn reconcile(&self) {
        let mut inner = self.lock();
        if inner.reconcile == ReconcileState::Reconciled {
            debug!("pending-job queue already reconciled, skipping");
            return;
        }

        let persisted = match self.mirror.read() {
            Ok(names) => names,
            Err(error) => {
                warn!(%error, "could not read persisted pending jobs, resuming none");
                BTreeSet::new()
            }
        };

        let matched = reconcile::matching_jobs(&self.host.jobs(), &persisted);
        let resumed = matched.len();
        for job in matched {
            if !self.host.schedule(&job, ResumeCause::new()) {
                warn!(
                    job = job.display_name(),
                    "host refused to re-schedule persisted job"
                );
            }
        }

        inner.reconcile = ReconcileState::Reconciled;
        info!(
            persisted = persisted.len(),
            resumed, "pending-job reconciliation complete"
        );
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Only host callbacks can panic while the lock is held, and the
        // guarded state is never left mid-mutation, so a poisoned lock is
        // recoverable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialize the queue and push it to disk, absorbing write failures.
    fn write_mirror(&self, inner: &Inner) {
        if let Err(error) = self.mirror.write(&serialize(&inner.pending)) {
            warn!(%error, "could not persist pending-job queue, disk state is stale");
        }
    }
}

/// Render the queue as its display names, one per line, newline-terminated.
/// An empty queue renders as the empty string.
fn serialize(pending: &[Arc<dyn Job>]) -> String {
    let mut out = String::new();
    for job in pending {
        out.push_str(job.display_name());
        out.push('\n');
    }
    out
}
