pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point of the admin console.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let cfg = shared::config::config();
    log::info!(
        "admin console starting: api origin '{}', realtime {}",
        cfg.api.origin,
        if cfg.realtime.enabled { "on" } else { "off" }
    );

    leptos::mount::mount_to_body(app::App);
}
