//! Remote Layer - Accessor Trait
//!
//! Abstract interface to the customer store. The HTTP implementation
//! lives in `http.rs`; tests substitute a recording stub.

use async_trait::async_trait;

use super::RemoteResult;
use crate::domain::{Customer, CustomerId};

/// CRUD access to the remote customer collection.
///
/// Futures are not required to be `Send`: in the browser the transport is
/// `fetch`, whose futures are tied to the JS event loop.
#[async_trait(?Send)]
pub trait CustomerAccessor {
    /// List every customer
    async fn list(&self) -> RemoteResult<Vec<Customer>>;

    /// Fetch one customer by id
    async fn fetch(&self, id: CustomerId) -> RemoteResult<Customer>;

    /// Create a customer from a draft; returns the stored record
    async fn create(&self, draft: &Customer) -> RemoteResult<Customer>;

    /// Replace the customer stored under `id`
    async fn update(&self, id: CustomerId, customer: &Customer) -> RemoteResult<Customer>;

    /// Delete customer by id
    async fn delete(&self, id: CustomerId) -> RemoteResult<()>;
}
