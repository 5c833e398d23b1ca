// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Target-specific save backends behind a single export operation.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use anyhow::Result;

use crate::models::download::Download;

/// How an export request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The browser was asked to download the file.
    Offered,
    /// The file was written to disk.
    #[cfg(not(target_arch = "wasm32"))]
    Saved(PathBuf),
    /// The user dismissed the save dialog.
    Cancelled,
}

/// Hand `data` to the user as `warehouse.building.yaml`.
///
/// In the browser this triggers a download through a temporary object URL.
/// On the desktop it opens a save dialog and writes the file to the chosen path.
///
/// # Errors
///
/// Returns an error when the browser primitives are unavailable or the file cannot be written.
pub fn download_building_yaml(data: &str) -> Result<SaveOutcome> {
    #[cfg(target_arch = "wasm32")]
    {
        web::offer(&Download::building_yaml(data))?;
        Ok(SaveOutcome::Offered)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        save_with_picker(data, native::pick_save_path)
    }
}

/// Save `data` to the path returned by `pick`, which receives the suggested file name.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_with_picker<F>(data: &str, pick: F) -> Result<SaveOutcome>
where
    F: FnOnce(&str) -> Option<PathBuf>,
{
    let download = Download::building_yaml(data);
    match pick(&download.file_name) {
        Some(path) => Ok(SaveOutcome::Saved(native::write_download(&path, &download)?)),
        None => Ok(SaveOutcome::Cancelled),
    }
}
