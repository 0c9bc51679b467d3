//! Edit Customer Form Component
//!
//! Inline editor for the record opened from a table row. Hidden while
//! nothing is being edited.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn EditCustomerForm() -> impl IntoView {
    let ctx = AppContext::expect();
    let editing_id = Memo::new(move |_| ctx.state.with(|s| s.editing.as_ref().and_then(|c| c.id)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.save_edit();
    };

    view! {
        <Show when=move || ctx.state.with(|s| s.editing.is_some())>
            <form class="edit-customer-form" on:submit=on_submit>
                <h3>{move || match editing_id.get() {
                    Some(id) => format!("Edit Customer #{id}"),
                    None => "Edit Customer".to_string(),
                }}</h3>
                <div class="edit-customer-row">
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || ctx.state.with(|s| {
                            s.editing.as_ref().map(|c| c.name.clone()).unwrap_or_default()
                        })
                        on:input=move |ev| ctx.set_editing_name(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || ctx.state.with(|s| {
                            s.editing.as_ref().map(|c| c.email.clone()).unwrap_or_default()
                        })
                        on:input=move |ev| ctx.set_editing_email(event_target_value(&ev))
                    />
                    <button type="submit">"Save"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
