//! Form result types
//!
//! Defines result structures returned by form operations.

use super::errors::FieldErrors;

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record appended; `stored` is the list length afterwards
    Accepted { stored: usize },
    /// At least one field failed validation
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}
