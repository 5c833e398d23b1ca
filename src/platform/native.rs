// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Desktop backend: native save dialog and file writing.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::download::Download;

/// Ask the user where to save a file, suggesting `file_name`.
///
/// Returns `None` when the dialog is cancelled.
pub fn pick_save_path(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save building")
        .add_filter("YAML", &["yaml", "yml"])
        .set_file_name(file_name)
        .save_file()
        .map(ensure_yaml_extension)
}

/// Keep a `.yaml`/`.yml` suffix (case-insensitive); otherwise append `.yaml`.
///
/// Appending rather than replacing keeps multi-part names such as
/// `site.building` intact. A name ending in a bare dot only gains `yaml`,
/// and a file named exactly `.yaml` or `.yml` is kept.
pub fn ensure_yaml_extension(path: PathBuf) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if name.ends_with(".yaml") || name.ends_with(".yml") {
        return path;
    }

    let suffix = if name.ends_with('.') { "yaml" } else { ".yaml" };
    let mut raw: OsString = path.into_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

/// Write the download content to `path` byte for byte.
///
/// Parent directories are created if missing.
///
/// # Errors
///
/// Returns an error when the parent directory cannot be created or the file cannot be written.
pub fn write_download(path: &Path, download: &Download) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, download.content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved {} ({} bytes)", path.display(), download.len());
    Ok(path.to_path_buf())
}
