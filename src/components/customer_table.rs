//! Customer Table Component
//!
//! Renders the customers from the last successful load.

use leptos::prelude::*;

use super::CustomerRow;
use crate::context::AppContext;

#[component]
pub fn CustomerTable() -> impl IntoView {
    let ctx = AppContext::expect();
    let customers = Memo::new(move |_| ctx.state.with(|s| s.customers.clone()));

    view! {
        <Show
            when=move || !customers.with(|c| c.is_empty())
            fallback=|| view! { <p class="empty-state">"No customers yet."</p> }
        >
            <table class="customer-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    // Keyed on the whole record so an edited row re-renders
                    <For
                        each=move || customers.get()
                        key=|customer| customer.clone()
                        children=move |customer| view! { <CustomerRow customer=customer /> }
                    />
                </tbody>
            </table>
        </Show>
        <p class="customer-count">{move || format!("{} customers", customers.with(|c| c.len()))}</p>
    }
}
