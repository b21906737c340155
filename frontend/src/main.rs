#[cfg(target_arch = "wasm32")]
fn main() {
    yoga_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "yoga-frontend runs in the browser; build it for wasm32 (e.g. `trunk serve`) and point it at {}",
        yoga_frontend::config::DEFAULT_API_BASE_URL
    );
}
