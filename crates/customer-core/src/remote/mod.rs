//! Remote Layer
//!
//! The accessor contract the view-model talks to, and the HTTP
//! implementation that speaks to the customer REST API.

mod error;
mod http;
mod traits;


pub use error::{RemoteFailure, RemoteResult};
pub use http::HttpCustomerAccessor;
pub use traits::CustomerAccessor;
