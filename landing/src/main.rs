// Axie Studio site - Leptos 0.8 CSR entry point
// Developed by the Axie Studio team (c)2025

use axie_landing::{App, ConfigErrorNotice, SiteConfig, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::embedded();
    let filter = config.as_ref().map(|c| c.log_filter.as_str()).unwrap_or("info");
    if let Err(err) = logging::init(filter) {
        leptos::logging::warn!("{err}");
    }

    match config {
        Ok(config) => {
            tracing::info!(pages = config.pages.len(), menu = config.menu.len(), "mounting site");
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => {
            tracing::error!(error = %err, "site config rejected");
            let message = err.to_string();
            leptos::mount::mount_to_body(move || view! { <ConfigErrorNotice message=message /> });
        }
    }
}
