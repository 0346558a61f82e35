//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::coords::LatLng;
use crate::core::ids::IdGenerator;
use crate::elevation::control::ElevationControl;
use crate::elevation::sampler::NO_ELEVATION;
use crate::host::headless::HeadlessMap;
use crate::host::map::{Control, HostMap, TextureReader};
use tile_grid::TileKey;

const URL: &str = "http://localhost:8080/stratis/terrainrgb/tile.json";

struct FlatTexture(u8, u8, u8);

impl TextureReader for FlatTexture {
    fn read_pixels(&self) -> Result<Vec<u8>, String> {
        Ok([self.0, self.1, self.2, 255].repeat(256 * 256))
    }
}

struct FailingTexture;

impl TextureReader for FailingTexture {
    fn read_pixels(&self) -> Result<Vec<u8>, String> {
        Err("context lost".to_string())
    }
}

fn attached_map() -> (HeadlessMap, ElevationControl) {
    let mut map = HeadlessMap::new(800.0, 600.0);
    map.set_view(LatLng::new(0.0, 0.0), 2.0);
    let ids = IdGenerator::new();
    let mut control = ElevationControl::new(URL, &ids);
    control.attach(&mut map);
    (map, control)
}

#[test]
fn test_unique_ids() {
    let ids = IdGenerator::new();
    let first = ElevationControl::new(URL, &ids);
    let second = ElevationControl::new(URL, &ids);
    assert!(first.id().starts_with("grad-elevation-control-"));
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_attach() {
    let (map, control) = attached_map();
    assert!(control.is_attached());
    assert_eq!(map.listener_count(), 1);
    assert_eq!(map.sources().len(), 1);
    assert_eq!(map.sources()[0].id, control.id());
    assert_eq!(map.sources()[0].url, URL);
    let layer = &map.layers()[0];
    assert_eq!(layer.id, control.id());
    assert_eq!(layer.source, control.id());
    assert_eq!(layer.opacity, 0.0);
}

#[test]
fn test_tile_lifecycle() {
    let (mut map, control) = attached_map();
    let id = control.id().to_string();
    assert_eq!(control.get_elevation(LatLng::new(0.0, 0.0), map.view()), NO_ELEVATION);

    map.load_tile(&id, TileKey::new(2, 2, 2), &FlatTexture(1, 134, 170));
    assert_eq!(control.cached_tiles(), 1);
    let elevation = control.get_elevation(LatLng::new(0.0, 0.0), map.view());
    assert!((elevation - 1.0).abs() < 1e-6, "{}", elevation);

    map.unload_tile(&id, TileKey::new(2, 2, 2));
    assert_eq!(control.cached_tiles(), 0);
    assert_eq!(control.get_elevation(LatLng::new(0.0, 0.0), map.view()), NO_ELEVATION);
}

#[test]
fn test_foreign_source_ignored() {
    let (mut map, control) = attached_map();
    map.load_tile("satellite", TileKey::new(2, 2, 2), &FlatTexture(1, 134, 170));
    assert_eq!(control.cached_tiles(), 0);
}

#[test]
fn test_read_error_ignored() {
    let (mut map, control) = attached_map();
    let id = control.id().to_string();
    map.load_tile(&id, TileKey::new(2, 2, 2), &FailingTexture);
    assert_eq!(control.cached_tiles(), 0);
    assert_eq!(control.get_elevation(LatLng::new(0.0, 0.0), map.view()), NO_ELEVATION);
}

#[test]
fn test_detach() {
    let (mut map, mut control) = attached_map();
    let id = control.id().to_string();
    map.load_tile(&id, TileKey::new(2, 2, 2), &FlatTexture(1, 134, 170));

    control.detach(&mut map);
    assert!(!control.is_attached());
    assert_eq!(control.cached_tiles(), 0);
    assert_eq!(map.listener_count(), 0);
    assert!(map.sources().is_empty());
    assert!(map.layers().is_empty());
    assert_eq!(control.get_elevation(LatLng::new(0.0, 0.0), map.view()), NO_ELEVATION);

    // no listener left
    map.load_tile(&id, TileKey::new(2, 2, 2), &FlatTexture(1, 134, 170));
    assert_eq!(control.cached_tiles(), 0);

    control.detach(&mut map);
    control.attach(&mut map);
    assert_eq!(map.listener_count(), 1);
    assert_eq!(map.sources().len(), 1);
}
