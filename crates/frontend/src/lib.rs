pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_note) = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());
    console_error_panic_hook::set_once();
    log::info!("{}", config_note);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
