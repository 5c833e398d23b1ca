// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between UI, generator, and export backends.

pub mod building;
pub mod download;
pub mod warehouse;
