//! Cause marker for runs resumed from the persisted queue.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Fixed description rendered for every resumed run.
const RESUME_DESCRIPTION: &str = "resumed from the persistent build queue after a restart";

/// Marker attached to a run that was re-scheduled by the persistent queue,
/// so observers can tell it apart from runs started by a person or an
/// external trigger.
///
/// Carries no state; a fresh value is created for every re-scheduled run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Display)]
#[display("{RESUME_DESCRIPTION}")]
pub struct ResumeCause;

impl ResumeCause {
    pub fn new() -> Self {
        Self
    }

    /// Short human-readable description of why the run was triggered.
    pub fn short_description(&self) -> &'static str {
        RESUME_DESCRIPTION
    }
}
