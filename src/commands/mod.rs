use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::store::Store;

/// Command trait for implementing the Command Pattern
///
/// Encapsulates all the logic needed to execute a business operation into a
/// single object that can be validated, executed, and produce activity
/// events. The store aggregate is passed in explicitly; commands hold no
/// ambient state.
pub trait Command {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command against the given store.
    ///
    /// Errors leave the store untouched; a command either applies all of its
    /// side effects or none of them.
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError>;
}

/// Outcome of a lifecycle transition command.
///
/// `Skipped` covers both already-terminal targets and unknown ids; repeated
/// invocations of a transition are therefore idempotent-safe. Invariant
/// violations are reported as errors instead, never as `Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionOutcome {
    /// The transition was applied together with all of its side effects.
    Applied,
    /// Nothing happened: target missing or already past this transition.
    Skipped,
}

impl TransitionOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, TransitionOutcome::Applied)
    }
}

/// Shared validator for non-negative money fields on command structs.
pub(crate) fn validate_non_negative(
    amount: &rust_decimal::Decimal,
) -> Result<(), validator::ValidationError> {
    if amount.is_sign_negative() {
        return Err(validator::ValidationError::new("amount_negative"));
    }
    Ok(())
}

pub mod finance;
pub mod inventory;
pub mod masterdata;
pub mod purchaseorders;
pub mod returns;
pub mod salesorders;
pub mod shipments;
pub mod workorders;
