// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic independent of any particular host.

pub mod generator;
pub mod trigger;
