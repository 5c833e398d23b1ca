// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry points wiring egui/eframe to launch the building export UI.

use crate::ui::BuildingExportApp;
use eframe::egui;
use egui_phosphor::Variant;

fn phosphor_fonts() -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);
    fonts
}

/// Bootstrap the desktop application and run the main egui event loop.
#[cfg(not(target_arch = "wasm32"))]
pub fn run() -> eframe::Result<()> {
    let fonts = phosphor_fonts();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Building Export",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(BuildingExportApp::default()))
        }),
    )
}

/// Mount the application on the canvas with id `canvas_id`.
///
/// Installs the browser console logger on first call.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_web(canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    // A second mount keeps the logger from the first one.
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .ok_or_else(|| js_sys::Error::new(&format!("No element with id {canvas_id}")))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| js_sys::Error::new(&format!("Element {canvas_id} is not a canvas")))?;

    let fonts = phosphor_fonts();
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    cc.egui_ctx.set_fonts(fonts);
                    Ok(Box::new(BuildingExportApp::default()))
                }),
            )
            .await;
        if let Err(err) = started {
            log::error!("Failed to start web app: {err:?}");
        }
    });
    Ok(())
}
