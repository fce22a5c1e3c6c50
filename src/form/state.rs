//! Module `form`
//!
//! Defines the `SignupForm` controller: current input, current per-field
//! messages, and the repository accepted records are written to.

use log::{debug, info};

use super::errors::FieldErrors;
use super::input::{Field, UserInput};
use super::results::SubmitOutcome;
use crate::error::StorageError;
use crate::storage::UserRepository;
use crate::validator::{ValidationRules, validate};

/// Represents the state of one signup form.
///
/// Field edits only overwrite the edited value. Validation runs on submit,
/// and a record reaches the repository only when every message is empty.
pub struct SignupForm<R> {
    input: UserInput,
    errors: FieldErrors,
    rules: ValidationRules,
    repository: R,
}

impl<R: UserRepository> SignupForm<R> {
    pub fn new(rules: ValidationRules, repository: R) -> Self {
        Self {
            input: UserInput::default(),
            errors: FieldErrors::default(),
            rules,
            repository,
        }
    }

    /// Applies one keystroke-level edit.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value.into());
    }

    /// Validates the current input and stores it if every field passes.
    ///
    /// On acceptance the input is replaced by a fresh record. On rejection
    /// the input is kept so it can be corrected.
    pub fn submit(&mut self) -> Result<SubmitOutcome, StorageError> {
        self.errors = FieldErrors::default();
        let errors = validate(&self.input, &self.rules);

        if !errors.is_clear() {
            debug!(
                "Submission rejected on fields: {:?}",
                errors.iter().map(|(field, _)| field).collect::<Vec<_>>()
            );
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let record = std::mem::take(&mut self.input);
        let user_id = record.id.clone();
        match self.repository.append(record.clone()) {
            Ok(stored) => {
                info!("Stored signup for '{}' ({} total)", user_id, stored);
                Ok(SubmitOutcome::Accepted { stored })
            }
            Err(e) => {
                self.input = record;
                Err(e)
            }
        }
    }

    /// Clears input and messages. Stored records are untouched.
    pub fn reset(&mut self) {
        self.input = UserInput::default();
        self.errors = FieldErrors::default();
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn input(&self) -> &UserInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
