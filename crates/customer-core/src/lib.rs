//! Customer List Core
//!
//! Layered architecture:
//! - domain: the customer record
//! - remote: accessor contract and its HTTP implementation
//! - view_model: list state and the operations that drive it
//! - config: where the remote store lives

pub mod config;
pub mod domain;
pub mod remote;
pub mod view_model;

pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use domain::{Customer, CustomerId};
pub use remote::{CustomerAccessor, HttpCustomerAccessor, RemoteFailure, RemoteResult};
pub use view_model::{Changes, CustomerListState, Outcome, SkipReason, Transition};
