// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Warehouse generator controls, structured for MVU-style updates.

use eframe::egui;

use crate::logic::generator::Layout;
use crate::models::warehouse::{AISLE_WIDTH_RANGE, AREA_RANGE, HEIGHT_RANGE, Warehouse};

/// Messages emitted by the generator controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WarehouseMsg {
    SetArea(f64),
    SetAisleWidth(f64),
    SetHeight(i32),
    Reset,
}

/// Apply a message; values are clamped into their allowed ranges.
pub fn update(model: &mut Warehouse, msg: WarehouseMsg) {
    let next = match msg {
        WarehouseMsg::SetArea(area) => Warehouse { area, ..*model },
        WarehouseMsg::SetAisleWidth(aisle_width) => Warehouse {
            aisle_width,
            ..*model
        },
        WarehouseMsg::SetHeight(height) => Warehouse { height, ..*model },
        WarehouseMsg::Reset => Warehouse::default(),
    };
    *model = next.clamped();
}

/// Render the sliders and a summary of the resulting layout.
pub fn view(model: &Warehouse, ui: &mut egui::Ui) -> Vec<WarehouseMsg> {
    let mut msgs = Vec::new();

    ui.heading("Warehouse Generator");
    ui.add_space(10.0);

    let mut area = model.area;
    if ui
        .add(egui::Slider::new(&mut area, AREA_RANGE).text("Area (m^2)"))
        .changed()
    {
        msgs.push(WarehouseMsg::SetArea(area));
    }

    let mut aisle_width = model.aisle_width;
    if ui
        .add(egui::Slider::new(&mut aisle_width, AISLE_WIDTH_RANGE).text("Aisle width (m)"))
        .changed()
    {
        msgs.push(WarehouseMsg::SetAisleWidth(aisle_width));
    }

    let mut height = model.height;
    if ui
        .add(
            egui::Slider::new(&mut height, HEIGHT_RANGE)
                .text("Shelf height (m)")
                .step_by(2.0),
        )
        .changed()
    {
        msgs.push(WarehouseMsg::SetHeight(height));
    }

    ui.add_space(6.0);
    if ui
        .button(format!(
            "{} Defaults",
            egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
        ))
        .clicked()
    {
        msgs.push(WarehouseMsg::Reset);
    }

    let layout = Layout::for_warehouse(model);
    ui.add_space(10.0);
    ui.label(
        egui::RichText::new(format!(
            "{} aisles, {} racks per row, {:.1} m side",
            layout.num_aisles, layout.num_racks, layout.width
        ))
        .small()
        .color(egui::Color32::from_gray(110)),
    );

    msgs
}
