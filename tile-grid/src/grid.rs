//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Web Mercator grids in XYZ addressing

use std::f64::consts;
use std::fmt;

pub const EARTH_RADIUS: f64 = 6378137.0;
/// Half the side of the Spherical Mercator square, in meters
pub const MERC_MAX: f64 = 20037508.3427892480;
/// Latitude of the Spherical Mercator square's northern edge
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    /// Full Spherical Mercator extent in meters
    pub fn web_mercator() -> Extent {
        Extent {
            minx: -MERC_MAX,
            miny: -MERC_MAX,
            maxx: MERC_MAX,
            maxy: MERC_MAX,
        }
    }
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

/// Tile address in XYZ scheme (origin top left)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileKey {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileKey {
    pub fn new(z: u8, x: u32, y: u32) -> TileKey {
        TileKey { z, x, y }
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Square pixel grid over the Spherical Mercator world
#[derive(Clone, Debug)]
pub struct PixelGrid {
    /// The width and height of an individual tile, in pixels.
    tile_size: u32,
    pub extent: Extent,
}

impl PixelGrid {
    /// Grid of 256x256 tiles (raster tile sources)
    pub fn web_mercator() -> PixelGrid {
        PixelGrid::new(256)
    }

    pub fn new(tile_size: u32) -> PixelGrid {
        PixelGrid {
            tile_size,
            extent: Extent::web_mercator(),
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Side length of the whole world in pixels at a (fractional) zoom level
    pub fn world_size(&self, zoom: f64) -> f64 {
        self.tile_size as f64 * zoom.exp2()
    }

    /// Fractional world pixel of a lon/lat position, origin top left
    pub fn lonlat_to_world_px(&self, lon: f64, lat: f64, zoom: f64) -> (f64, f64) {
        let size = self.world_size(zoom);
        let (mx, my) = lonlat_to_merc(lon, lat);
        let x = (mx - self.extent.minx) / self.extent.width() * size;
        let y = (self.extent.maxy - my) / self.extent.height() * size;
        (x, y)
    }

    /// Inverse of `lonlat_to_world_px`
    pub fn world_px_to_lonlat(&self, x: f64, y: f64, zoom: f64) -> (f64, f64) {
        let size = self.world_size(zoom);
        let mx = self.extent.minx + x / size * self.extent.width();
        let my = self.extent.maxy - y / size * self.extent.height();
        merc_to_lonlat(mx, my)
    }

    /// Integer world pixel of a lon/lat position at an integer zoom level.
    ///
    /// Pixels are rounded to the nearest integer and kept inside the world.
    pub fn px(&self, lon: f64, lat: f64, zoom: u8) -> (u32, u32) {
        let size = self.world_size(zoom as f64);
        let half = size / 2.0;
        let f = lat.to_radians().sin().max(-0.9999).min(0.9999);
        let x = (half + lon * size / 360.0).round();
        let y = (half - 0.5 * ((1.0 + f) / (1.0 - f)).ln() * size / (2.0 * consts::PI)).round();
        let last = size - 1.0;
        (x.max(0.0).min(last) as u32, y.max(0.0).min(last) as u32)
    }

    /// Tile containing the given integer world pixel
    pub fn tile_for_px(&self, px: (u32, u32), zoom: u8) -> TileKey {
        TileKey {
            z: zoom,
            x: px.0 / self.tile_size,
            y: px.1 / self.tile_size,
        }
    }

    /// Tile containing a lon/lat position
    pub fn tile_containing(&self, lon: f64, lat: f64, zoom: u8) -> TileKey {
        self.tile_for_px(self.px(lon, lat, zoom), zoom)
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.max(-MAX_LATITUDE).min(MAX_LATITUDE);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Returns (lon, lat) in degrees of a Spherical Mercator position
pub fn merc_to_lonlat(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - consts::PI * 0.5).to_degrees();
    (lon, lat)
}
