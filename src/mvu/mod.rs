// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring generator state, messages, and export commands.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::logic::generator::building_yaml;
use crate::models::download::Download;
use crate::models::warehouse::Warehouse;
use crate::platform::SaveOutcome;
use crate::ui::components::warehouse_panel::{self, WarehouseMsg};

/// Top-level application state.
pub struct AppModel {
    /// Generator parameters.
    pub warehouse: Warehouse,
    /// Building YAML generated from `warehouse`.
    pub document: String,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl Default for AppModel {
    fn default() -> Self {
        let mut model = Self {
            warehouse: Warehouse::default(),
            document: String::new(),
            status: None,
            error: None,
            pending_commands: 0,
        };
        regenerate(&mut model);
        model
    }
}

/// Where an export should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    /// File chosen in the native save dialog.
    #[cfg(not(target_arch = "wasm32"))]
    File(PathBuf),
    /// Browser download of the page's blob.
    #[cfg(target_arch = "wasm32")]
    Browser,
}

/// Application messages routed through the update function.
pub enum Msg {
    Warehouse(WarehouseMsg),
    SaveRequested(SaveTarget),
    SaveCancelled,
    SaveCompleted(Result<SaveOutcome, String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    Export {
        target: SaveTarget,
        download: Download,
    },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Warehouse(m) => {
            let before = model.warehouse;
            warehouse_panel::update(&mut model.warehouse, m);
            if model.warehouse != before {
                regenerate(model);
            }
        }
        Msg::DismissError => model.error = None,
        Msg::SaveRequested(target) => cmds.push(Command::Export {
            target,
            download: Download::building_yaml(model.document.clone()),
        }),
        Msg::SaveCancelled => surface_event(model, "Save cancelled.".to_string(), false),
        Msg::SaveCompleted(result) => match result {
            #[cfg(not(target_arch = "wasm32"))]
            Ok(SaveOutcome::Saved(path)) => {
                surface_event(model, format!("Building saved: {}", path.display()), false)
            }
            Ok(SaveOutcome::Offered) => surface_event(
                model,
                format!(
                    "Download offered: {}",
                    crate::models::download::BUILDING_FILE_NAME
                ),
                false,
            ),
            Ok(SaveOutcome::Cancelled) => {
                surface_event(model, "Save cancelled.".to_string(), false)
            }
            Err(err) => {
                log::warn!("Building export failed: {err}");
                surface_event(model, format!("Failed to save building:\n\n{err}"), true)
            }
        },
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::Export { target, download } => {
            let res = export(target, &download);
            Msg::SaveCompleted(res.map_err(|e| format!("{e:#}")))
        }
    }
}

fn export(target: SaveTarget, download: &Download) -> anyhow::Result<SaveOutcome> {
    match target {
        #[cfg(not(target_arch = "wasm32"))]
        SaveTarget::File(path) => {
            crate::platform::native::write_download(&path, download).map(SaveOutcome::Saved)
        }
        #[cfg(target_arch = "wasm32")]
        SaveTarget::Browser => crate::platform::download_building_yaml(&download.content),
    }
}

/// Rebuild the building document from the current warehouse parameters.
fn regenerate(model: &mut AppModel) {
    match building_yaml(&model.warehouse) {
        Ok(text) => model.document = text,
        Err(err) => surface_event(
            model,
            format!("Failed to generate building:\n\n{err:#}"),
            true,
        ),
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
