//! АИС ШКОЛА Frontend Entry Point

mod app;
mod columns;
mod commands;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    commands::init_config();
    mount_to_body(App);
}
