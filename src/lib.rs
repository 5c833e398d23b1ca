// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Building map editor that exports `warehouse.building.yaml`.
//!
//! On the desktop the file goes through a native save dialog; in the browser it is
//! offered as a download via a temporary object URL.

pub mod app;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod platform;
pub mod ui;

pub use models::download::{BUILDING_FILE_NAME, Download, YAML_MIME};
pub use platform::{SaveOutcome, download_building_yaml};
