//! View-Model Layer
//!
//! Explicit list state plus the async operations that move it forward.
//! Each operation takes the state by value and hands back a
//! [`Transition`]; nothing is held behind a shared mutable singleton.

mod operations;
mod state;


pub use operations::{add, begin_edit, cancel_edit, delete, load, save_edit, toggle_dark_mode};
pub use state::{Changes, CustomerListState, Outcome, SkipReason, Transition};
