//! Title Bar Component
//!
//! Page header with the dark-mode toggle and a busy indicator.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = AppContext::expect();
    let dark_mode = Memo::new(move |_| ctx.state.with(|s| s.dark_mode));
    let busy = Memo::new(move |_| ctx.pending.get() != 0);

    view! {
        <header class="title-bar">
            <h2 class="title">"Customer List"</h2>
            <Show when=move || busy.get()>
                <span class="busy-indicator" title="Working...">"…"</span>
            </Show>
            <button
                class=move || if dark_mode.get() { "mode-toggle active" } else { "mode-toggle" }
                title=move || if dark_mode.get() { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=move |_| ctx.toggle_dark_mode()
            >
                {move || if dark_mode.get() { "Light" } else { "Dark" }}
            </button>
        </header>
    }
}
