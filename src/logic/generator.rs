// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Procedural warehouse layout: boundary walls, pallet rack rows, and the lane graph.
//!
//! Responsibilities:
//! - Derive rack and aisle counts from the warehouse parameters.
//! - Lay out rack rows on both sides of every aisle with parking and travel vertices.
//! - Connect rows and aisles with bidirectional lanes and render the map as YAML.

use std::f64::consts::PI;

use anyhow::{Context, Result};

use crate::models::building::{BuildingMap, Level, Model, Vertex, Wall, WallProperties};
use crate::models::warehouse::Warehouse;

/// Level every generated element lives on.
pub const LEVEL_NAME: &str = "L1";

const RACK_LENGTH: f64 = 2.3784;
const RACK_DEPTH: f64 = 1.1;
const RACK_HEIGHT: f64 = 2.4;
const ROADWAY_WIDTH: f64 = 2.0;
const RACK_DEPTH_SPACING: f64 = 1.0;
const SECOND_SHELF_OFFSET: f64 = 1.0;

/// Rack and aisle counts for a warehouse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub num_racks: usize,
    pub aisle_spacing: f64,
    pub num_aisles: usize,
}

impl Layout {
    pub fn for_warehouse(warehouse: &Warehouse) -> Self {
        let width = warehouse.width();
        let num_racks = ((width - 2.0 * ROADWAY_WIDTH) / RACK_LENGTH - 1.0).max(0.0) as usize;
        let aisle_spacing = warehouse.aisle_width + 2.0 * RACK_DEPTH;
        let num_aisles = (width / aisle_spacing).floor().max(0.0) as usize;
        Self {
            width,
            num_racks,
            aisle_spacing,
            num_aisles,
        }
    }

    /// Center line of aisle `idx`, with the aisles centered on the origin.
    pub fn aisle_y(&self, idx: usize) -> f64 {
        (idx as f64 - (self.num_aisles as f64 - 1.0) / 2.0) * self.aisle_spacing
    }

    fn rack_start_x(&self) -> f64 {
        -(self.width - 2.0 * ROADWAY_WIDTH) / 2.0 + 1.0
    }
}

/// Offsets of a rack row's parking and travel vertices from the rack line.
struct RowOffsets {
    parking: (f64, f64),
    travel: (f64, f64),
}

/// Vertex ids at both ends of a rack row's travel lane.
struct RowEnds {
    first: usize,
    last: usize,
}

/// Build the full building map for `warehouse`.
pub fn generate_building(warehouse: &Warehouse) -> BuildingMap {
    let warehouse = warehouse.clamped();
    let layout = Layout::for_warehouse(&warehouse);
    let mut level = Level::default();

    add_boundary(&mut level, layout.width);

    let stacks = warehouse.vertical_stacks();
    let aisle_width = warehouse.aisle_width;
    let left = RowOffsets {
        parking: (-RACK_LENGTH / 2.0, 0.7),
        travel: (-RACK_LENGTH / 2.0, 1.7),
    };
    let right = RowOffsets {
        parking: (-RACK_LENGTH / 2.0, -RACK_DEPTH - 0.7),
        travel: (-RACK_LENGTH / 2.0, -RACK_DEPTH - 1.7),
    };

    let mut previous_right: Option<RowEnds> = None;
    for aisle_idx in 0..layout.num_aisles {
        let aisle_y = layout.aisle_y(aisle_idx);
        let rack_1_y = aisle_y - aisle_width / 2.0 + RACK_DEPTH - RACK_DEPTH_SPACING;
        let rack_2_y = aisle_y + aisle_width / 2.0 + RACK_DEPTH_SPACING;

        let left_row = add_rack_row(&mut level, &layout, rack_1_y, stacks, &left);
        let right_row = add_rack_row(&mut level, &layout, rack_2_y, stacks, &right);

        // Close the aisle at both ends.
        level.add_lane(left_row.last, right_row.last);
        level.add_lane(left_row.first, right_row.first);
        if let Some(prev) = &previous_right {
            level.add_lane(prev.last, left_row.last);
            level.add_lane(prev.first, right_row.first);
        }
        previous_right = Some(right_row);
    }

    let mut map = BuildingMap::new("warehouse");
    map.levels.insert(LEVEL_NAME.to_string(), level);
    map
}

/// Render the generated map as a `.building.yaml` document.
///
/// The output is JSON-flavoured YAML (flow style), which every YAML 1.2 reader accepts.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn building_yaml(warehouse: &Warehouse) -> Result<String> {
    let map = generate_building(warehouse);
    let mut text =
        serde_json::to_string_pretty(&map).context("Failed to serialize building map")?;
    text.push('\n');
    Ok(text)
}

/// Square outer walls of side `width`, centered on the origin.
fn add_boundary(level: &mut Level, width: f64) {
    let half = width / 2.0;
    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)];
    for (x, y) in corners {
        level.add_vertex(Vertex::at(x, y));
    }
    for i in 0..corners.len() {
        level
            .walls
            .push(Wall(i, (i + 1) % corners.len(), WallProperties::default()));
    }
}

/// One row of pallet racks along the x axis at height `y`.
///
/// Each rack bay gets a parking vertex linked to a travel vertex; travel vertices
/// are chained into a lane that runs past both ends of the row.
fn add_rack_row(
    level: &mut Level,
    layout: &Layout,
    y: f64,
    stacks: i32,
    offsets: &RowOffsets,
) -> RowEnds {
    let start_x = layout.rack_start_x();
    let yaw = -PI / 2.0;

    let first = level.add_vertex(Vertex::at(
        start_x - 0.5 * RACK_LENGTH,
        y + offsets.travel.1,
    ));
    let mut previous_travel = first;

    for idx in 0..=layout.num_racks {
        let rack_x = start_x + idx as f64 * RACK_LENGTH;

        if idx > 0 {
            let parking = level.add_vertex(Vertex::at(
                rack_x + offsets.parking.0,
                y + offsets.parking.1,
            ));
            let travel = level.add_vertex(Vertex::at(
                rack_x + offsets.travel.0,
                y + offsets.travel.1,
            ));
            level.add_lane(parking, travel);
            level.add_lane(travel, previous_travel);
            previous_travel = travel;
        }

        for stack in 0..stacks {
            let z = f64::from(stack) * RACK_HEIGHT;
            level.models.push(rack_model(
                "vert_beam1",
                "OpenRobotics/PalletRackVertBeams",
                rack_x,
                y,
                z,
                yaw,
            ));
            if idx < layout.num_racks {
                for shelf_z in [z, z + SECOND_SHELF_OFFSET] {
                    level.models.push(rack_model(
                        "horiz_beam1",
                        "OpenRobotics/PalletRackHorBeams",
                        rack_x,
                        y,
                        shelf_z,
                        yaw,
                    ));
                }
            }
        }
    }

    let last = level.add_vertex(Vertex::at(
        start_x + (layout.num_racks as f64 + 0.5) * RACK_LENGTH,
        y + offsets.travel.1,
    ));
    level.add_lane(previous_travel, last);

    RowEnds { first, last }
}

fn rack_model(name: &str, model_name: &str, x: f64, y: f64, z: f64, yaw: f64) -> Model {
    Model {
        name: name.to_string(),
        model_name: model_name.to_string(),
        x,
        y,
        z,
        yaw,
        is_static: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(map: &BuildingMap) -> &Level {
        map.levels.get(LEVEL_NAME).unwrap()
    }

    #[test]
    fn default_layout_counts() {
        // width = sqrt(540) ~ 23.24 m
        let layout = Layout::for_warehouse(&Warehouse::default());
        assert_eq!(layout.num_racks, 7);
        assert!((layout.aisle_spacing - 7.2).abs() < 1e-9);
        assert_eq!(layout.num_aisles, 3);
    }

    #[test]
    fn layout_counts_at_range_limits() {
        let small = Layout::for_warehouse(&Warehouse {
            area: 400.0,
            aisle_width: 2.0,
            height: 6,
        });
        assert_eq!(small.num_racks, 5);
        assert_eq!(small.num_aisles, 4);

        let large = Layout::for_warehouse(&Warehouse {
            area: 1000.0,
            aisle_width: 8.0,
            height: 2,
        });
        assert_eq!(large.num_racks, 10);
        assert_eq!(large.num_aisles, 3);
    }

    #[test]
    fn aisles_are_centered_on_origin() {
        let layout = Layout::for_warehouse(&Warehouse::default());
        assert!((layout.aisle_y(0) + 7.2).abs() < 1e-9);
        assert!(layout.aisle_y(1).abs() < 1e-9);
        assert!((layout.aisle_y(2) - 7.2).abs() < 1e-9);
    }

    #[test]
    fn default_warehouse_element_counts() {
        let map = generate_building(&Warehouse::default());
        let level = level(&map);

        // 4 corners + per aisle 2 rows of (2 * racks + 2) vertices.
        assert_eq!(level.vertices.len(), 4 + 3 * 2 * (2 * 7 + 2));
        assert_eq!(level.walls.len(), 4);
        // Per row 2 * racks + 1 lanes, 2 aisle-end lanes, 2 links to the previous aisle.
        assert_eq!(level.lanes.len(), 3 * (2 * (2 * 7 + 1) + 2) + 2 * 2);
        // Per row (racks + 1) vertical beams and 2 * racks horizontal beams per stack.
        assert_eq!(level.models.len(), 3 * 2 * (8 + 14));
    }

    #[test]
    fn taller_shelves_multiply_beams_only() {
        let low = generate_building(&Warehouse::default());
        let high = generate_building(&Warehouse {
            height: 6,
            ..Default::default()
        });
        assert_eq!(level(&high).models.len(), 3 * level(&low).models.len());
        assert_eq!(level(&high).lanes.len(), level(&low).lanes.len());

        let top = level(&high)
            .models
            .iter()
            .map(|m| m.z)
            .fold(f64::MIN, f64::max);
        assert!((top - (2.0 * RACK_HEIGHT + SECOND_SHELF_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn boundary_is_square_of_side_sqrt_area() {
        let map = generate_building(&Warehouse {
            area: 400.0,
            ..Default::default()
        });
        let level = level(&map);
        let corners: Vec<(f64, f64)> = level.vertices[..4].iter().map(|v| (v.0, v.1)).collect();
        assert_eq!(
            corners,
            vec![(-10.0, -10.0), (10.0, -10.0), (10.0, 10.0), (-10.0, 10.0)]
        );
        assert_eq!(level.walls[3].0, 3);
        assert_eq!(level.walls[3].1, 0);
    }

    #[test]
    fn lanes_reference_existing_vertices_and_are_bidirectional() {
        let map = generate_building(&Warehouse {
            area: 1000.0,
            aisle_width: 3.0,
            height: 4,
        });
        let level = level(&map);
        for lane in &level.lanes {
            assert!(lane.0 < level.vertices.len());
            assert!(lane.1 < level.vertices.len());
            assert_ne!(lane.0, lane.1);
            assert!(lane.2.bidirectional.1);
        }
        // Boundary corners carry walls only.
        assert!(level.lanes.iter().all(|l| l.0 >= 4 && l.1 >= 4));
    }

    #[test]
    fn aisle_end_lanes_join_first_vertices_of_both_rows() {
        let map = generate_building(&Warehouse::default());
        let level = level(&map);
        let row_len = 2 * 7 + 2;
        let first_left = 4;
        let first_right = 4 + row_len;
        assert!(
            level
                .lanes
                .iter()
                .any(|l| l.0 == first_left && l.1 == first_right)
        );
        // Travel lanes run past the row ends at the travel offset.
        assert!((level.vertices[first_left].1 - level.vertices[first_left + 2].1).abs() < 1e-9);
    }

    #[test]
    fn building_yaml_is_parseable_and_names_level() {
        let text = building_yaml(&Warehouse::default()).unwrap();
        assert!(text.ends_with('\n'));

        let parsed: BuildingMap = serde_json::from_str(&text).unwrap();
        let expected = generate_building(&Warehouse::default());
        assert_eq!(parsed.levels["L1"].lanes, expected.levels["L1"].lanes);
        assert_eq!(
            parsed.levels["L1"].vertices.len(),
            expected.levels["L1"].vertices.len()
        );
        assert_eq!(parsed.name, "warehouse");
        assert_eq!(parsed.coordinate_system, "cartesian_meters");
        assert!(parsed.levels.contains_key("L1"));
    }
}
