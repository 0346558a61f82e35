//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Elevation lookup from terrain-RGB tiles

pub mod control;
pub mod sampler;

pub use self::control::ElevationControl;
pub use self::sampler::{decode_elevation, ElevationSampler, NO_ELEVATION, TERRAIN_TILE_SIZE};

#[cfg(test)]
mod control_test;
