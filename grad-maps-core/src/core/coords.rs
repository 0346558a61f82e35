//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Conversion between game world positions and geographic coordinates
//!
//! The world square `[0, world_size]²` (origin bottom left, y pointing north)
//! is stretched over the whole Spherical Mercator square, so `(0, 0)` is the
//! south west corner of the map widget and `(world_size, world_size)` the
//! north east corner.

use tile_grid::{lonlat_to_merc, merc_to_lonlat, MERC_MAX};

/// Geographic position in degrees
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }
}

/// Visible area of a map, given by its south west and north east corners
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct LatLngBounds {
    pub sw: LatLng,
    pub ne: LatLng,
}

impl LatLngBounds {
    pub fn new(sw: LatLng, ne: LatLng) -> LatLngBounds {
        LatLngBounds { sw, ne }
    }
    pub fn nw(&self) -> LatLng {
        LatLng::new(self.ne.lat, self.sw.lng)
    }
    pub fn se(&self) -> LatLng {
        LatLng::new(self.sw.lat, self.ne.lng)
    }
    /// Corners in the order south west, north west, north east, south east
    pub fn corners(&self) -> [LatLng; 4] {
        [self.sw, self.nw(), self.ne, self.se()]
    }
}

fn merc_factor(world_size: f64) -> f64 {
    2.0 * MERC_MAX / world_size
}

/// World position `[x, y]` to `[lat, lng]`
pub fn arma_to_lat_lng(world_size: f64, pos: [f64; 2]) -> [f64; 2] {
    let factor = merc_factor(world_size);
    let (lng, lat) = merc_to_lonlat(pos[0] * factor - MERC_MAX, pos[1] * factor - MERC_MAX);
    [lat, lng]
}

/// `[lat, lng]` to world position `[x, y]`
pub fn lat_lng_to_arma(world_size: f64, pos: [f64; 2]) -> [f64; 2] {
    let factor = merc_factor(world_size);
    let (mx, my) = lonlat_to_merc(pos[1], pos[0]);
    [(mx + MERC_MAX) / factor, (my + MERC_MAX) / factor]
}
