//! Result of a single evaluation

use crate::error::WaitError;

/// Produced by every evaluation; the loop decides what to do with it.
#[derive(Debug)]
pub enum WaitOutcome {
    Satisfied,
    NotYetSatisfied,
    Fatal(WaitError),
}

impl WaitOutcome {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, WaitOutcome::Satisfied)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, WaitOutcome::Fatal(_))
    }
}

impl From<bool> for WaitOutcome {
    fn from(satisfied: bool) -> Self {
        if satisfied {
            WaitOutcome::Satisfied
        } else {
            WaitOutcome::NotYetSatisfied
        }
    }
}
