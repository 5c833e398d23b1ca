#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    building_export::app::run()
}

// The web build is started from JS through `start_web`.
#[cfg(target_arch = "wasm32")]
fn main() {}
