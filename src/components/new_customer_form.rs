//! New Customer Form Component
//!
//! Draft entry for a new customer. Submitting with an empty field does
//! nothing.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewCustomerForm() -> impl IntoView {
    let ctx = AppContext::expect();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add();
    };

    view! {
        <form class="new-customer-form" on:submit=on_submit>
            <h3>"Add Customer"</h3>
            <div class="new-customer-row">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || ctx.state.with(|s| s.draft.name.clone())
                    on:input=move |ev| ctx.set_draft_name(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || ctx.state.with(|s| s.draft.email.clone())
                    on:input=move |ev| ctx.set_draft_email(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
