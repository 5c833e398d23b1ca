// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Warehouse generator parameters and their allowed ranges.

use std::ops::RangeInclusive;

/// Floor area in square meters.
pub const AREA_RANGE: RangeInclusive<f64> = 400.0..=1000.0;
/// Aisle width in meters.
pub const AISLE_WIDTH_RANGE: RangeInclusive<f64> = 2.0..=8.0;
/// Shelf height in meters; racks come in 2 m stacks.
pub const HEIGHT_RANGE: RangeInclusive<i32> = 2..=6;

/// User-chosen warehouse parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Warehouse {
    pub area: f64,
    pub aisle_width: f64,
    pub height: i32,
}

impl Default for Warehouse {
    fn default() -> Self {
        Self {
            area: 540.0,
            aisle_width: 5.0,
            height: 2,
        }
    }
}

impl Warehouse {
    /// Clamp every parameter into its range and snap the height to a whole stack.
    pub fn clamped(self) -> Self {
        let area = self.area.clamp(*AREA_RANGE.start(), *AREA_RANGE.end());
        let aisle_width = self
            .aisle_width
            .clamp(*AISLE_WIDTH_RANGE.start(), *AISLE_WIDTH_RANGE.end());
        let height = self.height.clamp(*HEIGHT_RANGE.start(), *HEIGHT_RANGE.end()) / 2 * 2;
        Self {
            area,
            aisle_width,
            height,
        }
    }

    /// Side length of the square floor plan.
    pub fn width(&self) -> f64 {
        self.area.sqrt()
    }

    /// Number of 2 m rack stacks per column.
    pub fn vertical_stacks(&self) -> i32 {
        self.height / 2
    }
}
