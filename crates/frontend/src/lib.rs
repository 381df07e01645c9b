pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use contracts::shared::PageConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = PageConfig::load_default();

    // initializes logging using the `log` crate
    let level = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    match config {
        Ok(config) => {
            log::info!(
                "page configuration loaded: {} categories, {} blocks",
                config.categories.len(),
                config.blocks.len()
            );
            leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
        }
        Err(err) => {
            let message = format!("{:#}", err);
            log::error!("{}", message);
            leptos::mount::mount_to_body(move || view! { <app::ConfigError message=message /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
