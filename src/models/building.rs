// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Building map data in the legacy `.building.yaml` layout.
//!
//! Vertices, walls and lanes are positional arrays; their properties use the
//! `[type_id, value]` encoding of the traffic-editor format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Property type ids used by the `[type_id, value]` encoding.
const RBMF_STRING: u8 = 1;
const RBMF_INT: u8 = 2;
const RBMF_FLOAT: u8 = 3;
const RBMF_BOOL: u8 = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RbmfString(pub u8, pub String);

impl From<&str> for RbmfString {
    fn from(value: &str) -> Self {
        Self(RBMF_STRING, value.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RbmfInt(pub u8, pub i64);

impl From<i64> for RbmfInt {
    fn from(value: i64) -> Self {
        Self(RBMF_INT, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RbmfFloat(pub u8, pub f64);

impl From<f64> for RbmfFloat {
    fn from(value: f64) -> Self {
        Self(RBMF_FLOAT, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RbmfBool(pub u8, pub bool);

impl From<bool> for RbmfBool {
    fn from(value: bool) -> Self {
        Self(RBMF_BOOL, value)
    }
}

/// `[x, y, z, name]` in meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex(pub f64, pub f64, pub f64, pub String);

impl Vertex {
    pub fn at(x: f64, y: f64) -> Self {
        Self(x, y, 0.0, String::new())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallProperties {
    pub alpha: RbmfFloat,
    pub texture_name: RbmfString,
}

impl Default for WallProperties {
    fn default() -> Self {
        Self {
            alpha: 1.0.into(),
            texture_name: "default".into(),
        }
    }
}

/// `[start_vertex, end_vertex, properties]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall(pub usize, pub usize, pub WallProperties);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneProperties {
    pub bidirectional: RbmfBool,
    pub graph_idx: RbmfInt,
    pub orientation: RbmfString,
}

impl Default for LaneProperties {
    fn default() -> Self {
        Self {
            bidirectional: true.into(),
            graph_idx: 0.into(),
            orientation: "".into(),
        }
    }
}

/// `[start_vertex, end_vertex, properties]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane(pub usize, pub usize, pub LaneProperties);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub model_name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f64,
    #[serde(rename = "static")]
    pub is_static: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub elevation: f64,
    pub vertices: Vec<Vertex>,
    pub walls: Vec<Wall>,
    pub lanes: Vec<Lane>,
    pub models: Vec<Model>,
}

impl Level {
    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_lane(&mut self, start: usize, end: usize) {
        self.lanes.push(Lane(start, end, LaneProperties::default()));
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingMap {
    pub name: String,
    pub coordinate_system: String,
    pub levels: BTreeMap<String, Level>,
}

impl BuildingMap {
    /// Empty map in meter coordinates.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            coordinate_system: "cartesian_meters".to_string(),
            levels: BTreeMap::new(),
        }
    }
}
