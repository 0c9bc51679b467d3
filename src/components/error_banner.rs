//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Shows the latest remote failure until dismissed or timed out
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = AppContext::expect();

    view! {
        {move || ctx.error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button class="error-dismiss" on:click=move |_| ctx.dismiss_error()>"×"</button>
            </div>
        })}
    }
}
