//! Application Context
//!
//! Shared state provided via Leptos Context API. Components call the
//! methods here; each one runs a view-model operation against a snapshot of
//! the current state and merges the fields it changed back in.

use std::future::Future;

use customer_core::view_model::{self, Changes, CustomerListState, Outcome, Transition};
use customer_core::{CustomerId, HttpCustomerAccessor, RemoteFailure};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Customer page state
    pub state: RwSignal<CustomerListState>,
    /// Message shown in the error banner
    pub error: RwSignal<Option<String>>,
    /// Requests currently in flight
    pub pending: RwSignal<u32>,
    accessor: StoredValue<HttpCustomerAccessor, LocalStorage>,
    error_dismiss_ms: u32,
}

impl AppContext {
    pub fn new(accessor: HttpCustomerAccessor, error_dismiss_ms: u32) -> Self {
        Self {
            state: RwSignal::new(CustomerListState::new()),
            error: RwSignal::new(None),
            pending: RwSignal::new(0),
            accessor: StoredValue::new_local(accessor),
            error_dismiss_ms,
        }
    }

    /// Get the context provided by `App`
    pub fn expect() -> Self {
        expect_context::<AppContext>()
    }

    // ========================
    // Remote operations
    // ========================

    pub fn load(&self) {
        self.dispatch("load customers", |accessor, state| async move {
            view_model::load(&accessor, state).await
        });
    }

    pub fn add(&self) {
        self.dispatch("add customer", |accessor, state| async move {
            view_model::add(&accessor, state).await
        });
    }

    pub fn delete(&self, id: Option<CustomerId>) {
        self.dispatch("delete customer", move |accessor, state| async move {
            view_model::delete(&accessor, state, id).await
        });
    }

    pub fn begin_edit(&self, id: Option<CustomerId>) {
        self.dispatch("open customer", move |accessor, state| async move {
            view_model::begin_edit(&accessor, state, id).await
        });
    }

    pub fn save_edit(&self) {
        self.dispatch("save customer", |accessor, state| async move {
            view_model::save_edit(&accessor, state).await
        });
    }

    // ========================
    // Local edits
    // ========================

    pub fn cancel_edit(&self) {
        self.state.update(|s| *s = view_model::cancel_edit(std::mem::take(s)));
    }

    pub fn toggle_dark_mode(&self) {
        self.state.update(|s| *s = view_model::toggle_dark_mode(std::mem::take(s)));
    }

    pub fn set_draft_name(&self, name: String) {
        self.state.update(|s| s.draft.name = name);
    }

    pub fn set_draft_email(&self, email: String) {
        self.state.update(|s| s.draft.email = email);
    }

    pub fn set_editing_name(&self, name: String) {
        self.state.update(|s| {
            if let Some(editing) = s.editing.as_mut() {
                editing.name = name;
            }
        });
    }

    pub fn set_editing_email(&self, email: String) {
        self.state.update(|s| {
            if let Some(editing) = s.editing.as_mut() {
                editing.email = email;
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    /// Run an operation on a snapshot of the state.
    ///
    /// Overlapping remote calls are not serialized; each one only writes the
    /// fields it owns when it completes.
    fn dispatch<F, Fut>(&self, label: &'static str, operation: F)
    where
        F: FnOnce(HttpCustomerAccessor, CustomerListState) -> Fut + 'static,
        Fut: Future<Output = Transition> + 'static,
    {
        let ctx = *self;
        let accessor = self.accessor.get_value();
        let snapshot = self.state.get_untracked();
        self.pending.update(|n| *n += 1);

        spawn_local(async move {
            let transition = operation(accessor, snapshot).await;
            if let Some(failure) = ctx.settle(label, transition) {
                ctx.report(format!("Could not {label}: {failure}"));
            }
        });
    }

    /// Fold a finished operation into the current state.
    ///
    /// Local edits made while the call was in flight survive; a failure
    /// writes nothing beyond what the operation already committed.
    fn settle(&self, label: &str, transition: Transition) -> Option<RemoteFailure> {
        self.pending.update(|n| *n = n.saturating_sub(1));
        let outcome = if transition.changes == Changes::NONE {
            transition.outcome
        } else {
            let mut merged = Outcome::Applied;
            self.state.update(|current| merged = transition.merge_into(current));
            merged
        };
        Self::failure_of(label, outcome)
    }

    fn failure_of(label: &str, outcome: Outcome) -> Option<RemoteFailure> {
        match outcome {
            Outcome::Applied => None,
            Outcome::Skipped(reason) => {
                log::debug!("{label} skipped: {reason:?}");
                None
            }
            Outcome::Failed(failure) => Some(failure),
        }
    }

    /// Show an error and clear it after the configured delay, unless a
    /// newer error replaced it in the meantime.
    fn report(&self, message: String) {
        log::warn!("{message}");
        self.error.set(Some(message.clone()));

        let error = self.error;
        let delay = self.error_dismiss_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if error.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                error.set(None);
            }
        });
    }
}
