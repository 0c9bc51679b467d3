//! Customer List App
//!
//! Root component: wires the HTTP accessor into context, loads the list on
//! mount and lays out the page.

use customer_core::HttpCustomerAccessor;
use leptos::prelude::*;

use crate::components::{CustomerTable, EditCustomerForm, ErrorBanner, NewCustomerForm, TitleBar};
use crate::config::UiConfig;
use crate::context::AppContext;

const DARK_MODE_CLASS: &str = "dark-mode";

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let ctx = AppContext::new(HttpCustomerAccessor::new(config.client), config.error_dismiss_ms);
    provide_context(ctx);

    // Initial load
    ctx.load();

    // Mirror the display mode onto <body>
    Effect::new(move |_| {
        let dark = ctx.state.with(|s| s.dark_mode);
        set_body_dark_mode(dark);
    });

    view! {
        <div class="app-layout">
            <TitleBar />
            <ErrorBanner />
            <main class="main-content">
                <NewCustomerForm />
                <EditCustomerForm />
                <CustomerTable />
            </main>
        </div>
    }
}

fn set_body_dark_mode(enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::warn!("no <body> to apply display mode to");
        return;
    };
    if let Err(err) = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled) {
        log::warn!("failed to toggle {DARK_MODE_CLASS}: {err:?}");
    }
}
