//! View State
//!
//! What the customer page knows at a given moment, and how an operation
//! reports what it did to it.

use crate::domain::Customer;
use crate::remote::RemoteFailure;

/// Customer page state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListState {
    /// Customers from the last successful load, in server order
    pub customers: Vec<Customer>,
    /// The "new customer" form
    pub draft: Customer,
    /// Record open in the inline editor
    pub editing: Option<Customer>,
    pub dark_mode: bool,
}

impl CustomerListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(mut self, draft: Customer) -> Self {
        self.draft = draft;
        self
    }
}

/// Why an operation returned without contacting the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Name or email was empty
    IncompleteDraft,
    /// No customer id to act on
    MissingId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
    /// State is what it was before the failing call
    Failed(RemoteFailure),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn failure(&self) -> Option<&RemoteFailure> {
        match self {
            Outcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Which parts of the state an operation wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub customers: bool,
    pub draft: bool,
    pub editing: bool,
}

impl Changes {
    pub const NONE: Changes = Changes {
        customers: false,
        draft: false,
        editing: false,
    };

    pub(crate) fn customers() -> Self {
        Self {
            customers: true,
            ..Self::NONE
        }
    }

    pub(crate) fn editing() -> Self {
        Self {
            editing: true,
            ..Self::NONE
        }
    }
}

/// Result of running one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CustomerListState,
    pub outcome: Outcome,
    pub changes: Changes,
}

impl Transition {
    pub(crate) fn applied(state: CustomerListState, changes: Changes) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
            changes,
        }
    }

    pub(crate) fn skipped(state: CustomerListState, reason: SkipReason) -> Self {
        Self {
            state,
            outcome: Outcome::Skipped(reason),
            changes: Changes::NONE,
        }
    }

    pub(crate) fn failed(state: CustomerListState, failure: RemoteFailure) -> Self {
        Self {
            state,
            outcome: Outcome::Failed(failure),
            changes: Changes::NONE,
        }
    }

    /// Copy the fields this operation wrote into `current`, leaving
    /// everything else as it is now.
    ///
    /// `current` may have moved on while the operation was in flight
    /// (typing, display mode), so the rest of `self.state` is stale.
    pub fn merge_into(self, current: &mut CustomerListState) -> Outcome {
        let Transition {
            state,
            outcome,
            changes,
        } = self;
        if changes.customers {
            current.customers = state.customers;
        }
        if changes.draft {
            current.draft = state.draft;
        }
        if changes.editing {
            current.editing = state.editing;
        }
        outcome
    }
}
