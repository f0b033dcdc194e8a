#![allow(warnings)]
//! Draggable List Frontend Entry Point

mod models;
mod error;
mod source;
mod config;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::{RollingLogger, DEFAULT_CAPACITY};

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = RollingLogger::init(DEFAULT_CAPACITY, level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
