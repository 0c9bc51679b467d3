//! Domain Layer
//!
//! The customer record shared by the view-model and the remote store.
//! No transport or UI dependencies live here.

mod customer;

pub use customer::{Customer, CustomerId};
