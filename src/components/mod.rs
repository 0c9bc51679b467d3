//! UI Components
//!
//! Leptos components for the customer page.

mod customer_row;
mod customer_table;
mod delete_confirm_button;
mod edit_customer_form;
mod error_banner;
mod new_customer_form;
mod title_bar;

pub use customer_row::CustomerRow;
pub use customer_table::CustomerTable;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_customer_form::EditCustomerForm;
pub use error_banner::ErrorBanner;
pub use new_customer_form::NewCustomerForm;
pub use title_bar::TitleBar;
