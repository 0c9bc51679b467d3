//! Customer Row Component

use customer_core::Customer;
use leptos::prelude::*;

use super::DeleteConfirmButton;
use crate::context::AppContext;

/// One table row with edit and delete actions
#[component]
pub fn CustomerRow(customer: Customer) -> impl IntoView {
    let ctx = AppContext::expect();
    let id = customer.id;
    let id_label = id.map(|id| id.to_string()).unwrap_or_default();

    view! {
        <tr class="customer-row">
            <td class="customer-id">{id_label}</td>
            <td class="customer-name">{customer.name}</td>
            <td class="customer-email">{customer.email}</td>
            <td class="customer-actions">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(id)>"Edit"</button>
                <DeleteConfirmButton on_confirm=move |_| ctx.delete(id) />
            </td>
        </tr>
    }
}
