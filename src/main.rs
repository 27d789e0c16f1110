#![allow(warnings)]
//! Storefront Frontend Entry Point

mod models;
mod config;
mod commands;
mod cart;
mod store;
mod context;
mod components;
mod enhance;
mod app;

use console_logger::{ConsoleLogger, DEFAULT_CAPACITY};
use log::LevelFilter;
use wasm_bindgen::prelude::*;

use config::StorefrontConfig;

fn main() {
    console_error_panic_hook::set_once();
    if ConsoleLogger::new(LevelFilter::Trace, DEFAULT_CAPACITY).init().is_err() {
        web_sys::console::warn_1(&"Logger already installed".into());
    }

    let config = StorefrontConfig::from_document();
    log::set_max_level(config.level_filter());

    enhance::install(&config);
    app::mount_cart(&config);
}

/// Recent log lines, for pasting into bug reports: `storefrontLogs()` in the console
#[wasm_bindgen(js_name = storefrontLogs)]
pub fn storefront_logs() -> String {
    console_logger::global().map(ConsoleLogger::dump).unwrap_or_default()
}
