pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, runtime config, then the router.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("starting Yoga app frontend");

    // window.__YOGA_ENV (env.js) wins over ./config.json; loading does not block mounting.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
