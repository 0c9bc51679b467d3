//! Customer List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = UiConfig::load();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(config.log_level);
    for warning in warnings {
        log::warn!("{warning}");
    }
    log::info!("customer api at {}", config.client.base_url());

    mount_to_body(move || view! { <App config=config /> });
}
