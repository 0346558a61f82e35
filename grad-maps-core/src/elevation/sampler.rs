//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::host::map::TextureReader;
use std::collections::HashMap;
use tile_grid::{PixelGrid, TileKey};

pub const TERRAIN_TILE_SIZE: u32 = 256;

/// Returned for positions without a cached tile
pub const NO_ELEVATION: f64 = -1.0;

/// Highest zoom level with pixel coordinates fitting into `u32`
const MAX_ZOOM: f64 = 24.0;

/// Terrain-RGB encoding: `-10000 + (R * 256² + G * 256 + B) * 0.1` meters
pub fn decode_elevation(r: u8, g: u8, b: u8) -> f64 {
    let value = r as u32 * 256 * 256 + g as u32 * 256 + b as u32;
    -10000.0 + value as f64 * 0.1
}

/// Decoded terrain-RGB tiles of the tiles currently loaded by the map
pub struct ElevationSampler {
    tiles: HashMap<TileKey, Vec<u8>>,
    grid: PixelGrid,
}

impl ElevationSampler {
    pub fn new() -> ElevationSampler {
        ElevationSampler {
            tiles: HashMap::new(),
            grid: PixelGrid::new(TERRAIN_TILE_SIZE),
        }
    }

    /// Cache the RGBA pixels of a tile
    pub fn insert(&mut self, key: TileKey, pixels: Vec<u8>) {
        debug!("Caching elevation tile {}", key);
        self.tiles.insert(key, pixels);
    }

    /// Read back and cache a loaded tile. Read errors leave the cache untouched.
    pub fn insert_from_texture(&mut self, key: TileKey, texture: &dyn TextureReader) -> bool {
        match texture.read_pixels() {
            Ok(pixels) => {
                self.insert(key, pixels);
                true
            }
            Err(e) => {
                debug!("Couldn't read pixels of tile {}: {}", key, e);
                false
            }
        }
    }

    pub fn remove(&mut self, key: &TileKey) -> bool {
        self.tiles.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn contains(&self, key: &TileKey) -> bool {
        self.tiles.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Elevation in meters at a position, looked up in the most detailed
    /// cached tile from zoom level `ceil(zoom)` downwards.
    pub fn query(&self, lat: f64, lng: f64, zoom: f64) -> f64 {
        if !(lat.is_finite() && lng.is_finite() && zoom.is_finite()) {
            return NO_ELEVATION;
        }
        let top = zoom.ceil().min(MAX_ZOOM);
        if top < 1.0 {
            return NO_ELEVATION;
        }
        for z in (1..=top as u8).rev() {
            let px = self.grid.px(lng, lat, z);
            let key = self.grid.tile_for_px(px, z);
            let pixels = match self.tiles.get(&key) {
                Some(pixels) => pixels,
                None => continue,
            };
            let pixel_x = (px.0 % TERRAIN_TILE_SIZE) as usize;
            let pixel_y = (px.1 % TERRAIN_TILE_SIZE) as usize;
            let index = (TERRAIN_TILE_SIZE as usize * pixel_y + pixel_x) * 4;
            match pixels.get(index..index + 3) {
                Some(rgb) => return decode_elevation(rgb[0], rgb[1], rgb[2]),
                None => {
                    debug!("Elevation tile {} has only {} bytes", key, pixels.len());
                    continue;
                }
            }
        }
        NO_ELEVATION
    }
}

impl Default for ElevationSampler {
    fn default() -> ElevationSampler {
        ElevationSampler::new()
    }
}
