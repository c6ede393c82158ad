pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Staffdesk frontend (wasm)");

    // Resolve the API base URL early; requests made before this finishes
    // resolve it themselves.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
