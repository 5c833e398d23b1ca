// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for generating and exporting a building map.
//! Handles layout, the save button, and wiring to the export backends.

pub mod components;

use eframe::egui;

use crate::models::download::BUILDING_FILE_NAME;
use crate::mvu::{self, AppModel, Command, Msg, SaveTarget};
use crate::ui::components::warehouse_panel;

/// Stateful egui application for generating and exporting a warehouse building map.
pub struct BuildingExportApp {
    model: AppModel,
    inbox: Vec<Msg>,
    #[cfg(not(target_arch = "wasm32"))]
    cmd_tx: crossbeam_channel::Sender<Command>,
    #[cfg(not(target_arch = "wasm32"))]
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for BuildingExportApp {
    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(1, 2))
            .unwrap_or(1);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
        }
    }
}

impl eframe::App for BuildingExportApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker results, applies messages to the MVU model,
    /// dispatches resulting commands, then renders the top bar, status bar, generator panel,
    /// and a read-only preview of the generated YAML.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(not(target_arch = "wasm32"))]
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if let Some(reply) = self.dispatch(cmd) {
                    msgs.push(reply);
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Building Export");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_save_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::SidePanel::left("generator_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            let panel_msgs = warehouse_panel::view(&self.model.warehouse, ui);
            self.inbox.extend(panel_msgs.into_iter().map(Msg::Warehouse));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_preview(ui);
        });
    }
}

impl BuildingExportApp {
    /// Hand a command to the worker pool; the reply arrives on a later frame.
    #[cfg(not(target_arch = "wasm32"))]
    fn dispatch(&mut self, cmd: Command) -> Option<Msg> {
        if self.cmd_tx.send(cmd).is_ok() {
            self.model.pending_commands += 1;
        }
        None
    }

    /// DOM access must stay on the UI thread, so commands run inline.
    #[cfg(target_arch = "wasm32")]
    fn dispatch(&mut self, cmd: Command) -> Option<Msg> {
        Some(mvu::run_command(cmd))
    }

    /// Render the save button and translate a click into `Msg::SaveRequested`.
    ///
    /// On the desktop a native save dialog suggesting `warehouse.building.yaml` is shown first;
    /// cancelling it pushes `Msg::SaveCancelled`. In the browser the download is requested directly.
    fn render_save_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Save {}",
            egui_phosphor::regular::FLOPPY_DISK,
            BUILDING_FILE_NAME
        ));
        if !ui.add(button).clicked() {
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match crate::platform::native::pick_save_path(BUILDING_FILE_NAME) {
                Some(path) => self.inbox.push(Msg::SaveRequested(SaveTarget::File(path))),
                None => self.inbox.push(Msg::SaveCancelled),
            }
        }

        #[cfg(target_arch = "wasm32")]
        self.inbox.push(Msg::SaveRequested(SaveTarget::Browser));
    }

    /// Show the generated document without letting the user edit it.
    fn render_preview(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(format!(
                "{} ({} bytes)",
                BUILDING_FILE_NAME,
                self.model.document.len()
            ))
            .small()
            .color(egui::Color32::from_gray(110)),
        );
        egui::ScrollArea::vertical().show(ui, |ui| {
            let mut text = self.model.document.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Export failed")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
