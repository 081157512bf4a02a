#![allow(warnings)]
//! Taskmaster Frontend Entry Point

mod models;
mod api;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    mount_to_body(App);
}
