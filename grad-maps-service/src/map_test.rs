//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::api::ApiClient;
use crate::map::{GradMap, MapOptions, SATELLITE_ID};
use grad_maps_core::core::config::MapCfg;
use grad_maps_core::core::coords::LatLng;
use grad_maps_core::core::meta::MapMetaData;
use grad_maps_core::core::Config;
use grad_maps_core::elevation::NO_ELEVATION;
use grad_maps_core::grid::GridStyle;
use grad_maps_core::host::{Control, HeadlessMap, HostMap, RasterLayer, TextureReader};
use tile_grid::TileKey;

const META: &str = r#"{
    "author": "Bohemia Interactive",
    "displayName": "Stratis",
    "gridOffsetX": 0,
    "gridOffsetY": 8192,
    "grids": [
        { "format": "XY", "formatX": "000", "formatY": "000", "stepX": 100, "stepY": 100, "zoomMax": 0.1 },
        { "format": "XY", "formatX": "00", "formatY": "00", "stepX": 1000, "stepY": 1000, "zoomMax": 0.5 }
    ],
    "worldName": "stratis",
    "worldSize": 8192
}"#;

fn meta() -> MapMetaData {
    MapMetaData::from_json(META).unwrap()
}

fn grad_map(options: MapOptions) -> GradMap<HeadlessMap> {
    let mut host = HeadlessMap::new(800.0, 600.0);
    host.set_view(LatLng::new(0.0, 0.0), 3.0);
    GradMap::new(
        host,
        ApiClient::new("http://localhost:8080"),
        "stratis",
        options,
        GridStyle::default(),
    )
}

struct FlatTexture;

impl TextureReader for FlatTexture {
    fn read_pixels(&self) -> Result<Vec<u8>, String> {
        Ok([1, 134, 160, 255].repeat(256 * 256))
    }
}

#[test]
fn test_new() {
    let map = grad_map(MapOptions::default());
    assert_eq!(
        map.host().style(),
        Some("http://localhost:8080/stratis/mvt/style.json")
    );
    assert!(!map.host().rotation_enabled());
    assert!(!map.is_loaded());
    assert!(map.meta_data().is_none());
    assert!(map.host().sources().is_empty());
    assert_eq!(map.pos_to_grid(1.0, 1.0), None);
}

#[test]
fn test_load_before_meta() {
    let mut map = grad_map(MapOptions::default());
    map.on_load();
    assert_eq!(map.host().sources().len(), 1);
    assert_eq!(map.host().sources()[0].id, SATELLITE_ID);
    assert_eq!(
        map.host().sources()[0].url,
        "http://localhost:8080/stratis/sat/tile.json"
    );
    // satellite hidden by default
    assert!(map.host().layers().is_empty());
    assert!(map.host().surfaces().is_empty());

    map.set_meta_data(meta());
    assert_eq!(map.meta_data().unwrap().world_name, "stratis");
    assert!(map.grid().unwrap().is_attached());
    assert_eq!(map.host().surfaces().len(), 1);
    assert_eq!(map.pos_to_grid(1234.0, 5678.0), Some("012943".to_string()));
}

#[test]
fn test_meta_before_load() {
    let mut map = grad_map(MapOptions::default());
    map.set_meta_data(meta());
    assert!(!map.grid().unwrap().is_attached());
    map.on_load();
    assert!(map.grid().unwrap().is_attached());
    // loading twice changes nothing
    map.on_load();
    assert_eq!(map.host().sources().len(), 1);
    assert_eq!(map.host().surfaces().len(), 1);
}

#[test]
fn test_satellite_layer() {
    let mut map = grad_map(MapOptions {
        sat_shown: true,
        ..MapOptions::default()
    });
    map.host_mut().add_layer(
        RasterLayer {
            id: "water".to_string(),
            source: "mvt".to_string(),
            opacity: 1.0,
        },
        None,
    );
    map.on_load();
    let ids: Vec<&str> = map.host().layers().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec![SATELLITE_ID, "water"]);
    assert_eq!(map.host().layers()[0].opacity, 0.8);

    map.set_sat_shown(false);
    assert!(!map.sat_shown());
    assert_eq!(map.host().layers().len(), 1);
    map.set_sat_shown(true);
    map.set_sat_shown(true);
    assert_eq!(map.host().layers().len(), 2);
}

#[test]
fn test_grid_toggle() {
    let mut map = grad_map(MapOptions {
        grid_shown: false,
        ..MapOptions::default()
    });
    map.on_load();
    map.set_meta_data(meta());
    assert!(!map.grid().unwrap().is_attached());

    map.set_grid_shown(true);
    assert!(map.grid_shown());
    assert!(map.grid().unwrap().is_attached());
    assert_eq!(map.host().listener_count(), 2);

    map.set_grid_shown(false);
    assert!(!map.grid().unwrap().is_attached());
    assert_eq!(map.host().listener_count(), 0);
    assert!(map.host().surfaces().is_empty());
}

#[test]
fn test_grid_rendering() {
    let mut map = grad_map(MapOptions::default());
    map.on_load();
    map.set_meta_data(meta());
    map.host_mut().set_view(LatLng::new(0.0, 0.0), 3.0);
    let svg = map.host().to_svg();
    assert!(svg.contains(">04</text>"), "{}", svg);
    assert!(svg.contains(">96</text>"), "{}", svg);
}

#[test]
fn test_replace_meta_data() {
    let mut map = grad_map(MapOptions::default());
    map.on_load();
    map.set_meta_data(meta());
    map.set_meta_data(meta());
    assert_eq!(map.host().surfaces().len(), 1);
    assert_eq!(map.host().listener_count(), 2);
}

#[test]
fn test_elevation() {
    let mut map = grad_map(MapOptions::default());
    assert_eq!(map.elevation(LatLng::new(0.0, 0.0)), NO_ELEVATION);
    map.enable_elevation();
    let id = map.elevation_control().unwrap().id().to_string();
    assert!(id.starts_with("grad-elevation-control-"));
    assert_eq!(
        map.elevation_control().unwrap().tile_json_url(),
        "http://localhost:8080/stratis/terrainrgb/tile.json"
    );

    map.host_mut().load_tile(&id, TileKey::new(3, 4, 4), &FlatTexture);
    let elevation = map.elevation(LatLng::new(0.0, 0.0));
    assert!(elevation.abs() < 1e-6, "{}", elevation);

    map.disable_elevation();
    assert!(map.elevation_control().is_none());
    assert!(map.host().sources().is_empty());
    assert_eq!(map.elevation(LatLng::new(0.0, 0.0)), NO_ELEVATION);
}

#[test]
fn test_into_host() {
    let mut map = grad_map(MapOptions::default());
    map.on_load();
    map.set_meta_data(meta());
    map.enable_elevation();
    let host = map.into_host();
    assert_eq!(host.listener_count(), 0);
    assert!(host.surfaces().is_empty());
    assert_eq!(host.sources().len(), 1);
}

#[test]
fn test_options_from_config() {
    let cfg = MapCfg {
        sat_shown: true,
        grid_shown: false,
        satellite_opacity: 0.5,
    };
    let options = MapOptions::from_config(&cfg).unwrap();
    assert!(options.sat_shown);
    assert!(!options.grid_shown);
    assert_eq!(options.satellite_opacity, 0.5);

    let cfg = MapCfg {
        satellite_opacity: 1.5,
        ..cfg
    };
    assert!(MapOptions::from_config(&cfg).is_err());
}
