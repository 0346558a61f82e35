//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Map metadata as published by the maps service (`meta.json`)

/// Grid definition for one zoom bracket
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MapMetaDataGrid {
    /// Position format, `X` and `Y` are replaced by the axis labels
    pub format: String,
    pub format_x: String,
    pub format_y: String,
    pub step_x: f64,
    pub step_y: f64,
    pub zoom_max: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MapMetaData {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub elevation_offset: f64,
    pub grid_offset_x: f64,
    pub grid_offset_y: f64,
    pub grids: Vec<MapMetaDataGrid>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub version: f64,
    pub world_name: String,
    pub world_size: f64,
}

/// Entry of the maps list
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    pub display_name: String,
    pub world_name: String,
    #[serde(default)]
    pub author: String,
}

impl MapMetaData {
    pub fn from_json(json: &str) -> Result<MapMetaData, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid map metadata: {}", e))
    }
}
