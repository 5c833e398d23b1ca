// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Download payload offered to the user (UI-agnostic).

/// Suggested file name for every exported building map.
pub const BUILDING_FILE_NAME: &str = "warehouse.building.yaml";

/// Content type the exported blob is tagged with.
pub const YAML_MIME: &str = "text/yaml";

/// Text content plus the name and type it should be saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub content: String,
    pub file_name: String,
    pub mime: &'static str,
}

impl Download {
    /// Wrap `content` as `warehouse.building.yaml` / `text/yaml`.
    ///
    /// The content is copied as-is; no YAML validation happens here.
    pub fn building_yaml(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_name: BUILDING_FILE_NAME.to_string(),
            mime: YAML_MIME,
        }
    }

    /// Size of the content in UTF-8 bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
