//! One-shot reconciliation of persisted names against live jobs.

use std::collections::BTreeSet;
use std::sync::Arc;

use requeue_core::Job;

/// Whether the one-time reconciliation pass has run yet.
///
/// The only transition is `NotReconciled` to `Reconciled`, taken by the
/// first `reconcile` call; a process restart is the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileState {
    NotReconciled,
    Reconciled,
}

/// Jobs whose display name appears in the persisted set, in host order.
///
/// Matching is exact string equality on display names. That is brittle
/// under renames (the pending entry is silently dropped) and name reuse (a
/// new job carrying a stale persisted name gets a spurious run), but it is
/// all the persisted format supports.
pub(crate) fn matching_jobs(
    jobs: &[Arc<dyn Job>],
    persisted: &BTreeSet<String>,
) -> Vec<Arc<dyn Job>> {
    jobs.iter()
        .filter(|job| persisted.contains(job.display_name()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestJob(&'static str);

    impl Job for TestJob {
        fn display_name(&self) -> &str {
            self.0
        }
    }

    fn jobs(names: &[&'static str]) -> Vec<Arc<dyn Job>> {
        names
            .iter()
            .map(|name| Arc::new(TestJob(name)) as Arc<dyn Job>)
            .collect()
    }

    #[test]
    fn test_matches_subset_in_host_order() {
        let live = jobs(&["A", "B", "C", "D"]);
        let persisted: BTreeSet<String> = ["C", "A"].iter().map(|s| s.to_string()).collect();

        let matched: Vec<_> = matching_jobs(&live, &persisted)
            .iter()
            .map(|job| job.display_name().to_owned())
            .collect();
        assert_eq!(matched, vec!["A", "C"]);
    }

    #[test]
    fn test_no_persisted_names_matches_nothing() {
        let live = jobs(&["A", "B"]);
        assert!(matching_jobs(&live, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_jobs_sharing_a_persisted_name_all_match() {
        let live = jobs(&["A", "A", "B"]);
        let persisted: BTreeSet<String> = std::iter::once("A".to_string()).collect();

        assert_eq!(matching_jobs(&live, &persisted).len(), 2);
    }
}
