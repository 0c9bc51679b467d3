//! View-Model Operations
//!
//! Every mutation is followed by a full reload; the local list is never
//! patched in place.

use log::{debug, warn};

use super::{Changes, CustomerListState, SkipReason, Transition};
use crate::domain::CustomerId;
use crate::remote::CustomerAccessor;

/// `0` is never a stored id; treat it like no id at all
fn present(id: Option<CustomerId>) -> Option<CustomerId> {
    id.filter(|id| *id != 0)
}

/// Replace the customer list with what the store currently holds
pub async fn load<A>(accessor: &A, state: CustomerListState) -> Transition
where
    A: CustomerAccessor + ?Sized,
{
    match accessor.list().await {
        Ok(customers) => {
            debug!("loaded {} customers", customers.len());
            Transition::applied(CustomerListState { customers, ..state }, Changes::customers())
        }
        Err(failure) => {
            warn!("failed to load customers: {failure}");
            Transition::failed(state, failure)
        }
    }
}

/// Submit the draft, then reset it and reload.
///
/// A failed create keeps the draft so the user can resubmit.
pub async fn add<A>(accessor: &A, mut state: CustomerListState) -> Transition
where
    A: CustomerAccessor + ?Sized,
{
    if !state.draft.is_complete() {
        debug!("add skipped: draft is incomplete");
        return Transition::skipped(state, SkipReason::IncompleteDraft);
    }

    match accessor.create(&state.draft.to_draft()).await {
        Ok(created) => {
            debug!("created customer {:?}", created.id);
            state.draft = Default::default();
            // The reset stands even if the reload fails
            let mut transition = load(accessor, state).await;
            transition.changes.draft = true;
            transition
        }
        Err(failure) => {
            warn!("failed to create customer: {failure}");
            Transition::failed(state, failure)
        }
    }
}

/// Delete by id, then reload
pub async fn delete<A>(accessor: &A, state: CustomerListState, id: Option<CustomerId>) -> Transition
where
    A: CustomerAccessor + ?Sized,
{
    let Some(id) = present(id) else {
        debug!("delete skipped: no id");
        return Transition::skipped(state, SkipReason::MissingId);
    };

    match accessor.delete(id).await {
        Ok(()) => {
            debug!("deleted customer {id}");
            load(accessor, state).await
        }
        Err(failure) => {
            warn!("failed to delete customer {id}: {failure}");
            Transition::failed(state, failure)
        }
    }
}

/// Open the editor with the store's current copy of the record
pub async fn begin_edit<A>(
    accessor: &A,
    mut state: CustomerListState,
    id: Option<CustomerId>,
) -> Transition
where
    A: CustomerAccessor + ?Sized,
{
    let Some(id) = present(id) else {
        debug!("edit skipped: no id");
        return Transition::skipped(state, SkipReason::MissingId);
    };

    match accessor.fetch(id).await {
        Ok(customer) => {
            state.editing = Some(customer);
            Transition::applied(state, Changes::editing())
        }
        Err(failure) => {
            warn!("failed to fetch customer {id}: {failure}");
            Transition::failed(state, failure)
        }
    }
}

/// Write the edited record back, close the editor and reload.
///
/// On failure the editor stays open with the user's changes.
pub async fn save_edit<A>(accessor: &A, mut state: CustomerListState) -> Transition
where
    A: CustomerAccessor + ?Sized,
{
    let Some((id, edited)) = state
        .editing
        .as_ref()
        .and_then(|c| present(c.id).map(|id| (id, c.clone())))
    else {
        debug!("save skipped: nothing with an id is being edited");
        return Transition::skipped(state, SkipReason::MissingId);
    };
    if !edited.is_complete() {
        debug!("save skipped: customer {id} is incomplete");
        return Transition::skipped(state, SkipReason::IncompleteDraft);
    }

    match accessor.update(id, &edited).await {
        Ok(_) => {
            debug!("updated customer {id}");
            state.editing = None;
            let mut transition = load(accessor, state).await;
            transition.changes.editing = true;
            transition
        }
        Err(failure) => {
            warn!("failed to update customer {id}: {failure}");
            Transition::failed(state, failure)
        }
    }
}

pub fn cancel_edit(state: CustomerListState) -> CustomerListState {
    CustomerListState {
        editing: None,
        ..state
    }
}

/// Presentation only; no remote call
pub fn toggle_dark_mode(state: CustomerListState) -> CustomerListState {
    CustomerListState {
        dark_mode: !state.dark_mode,
        ..state
    }
}
