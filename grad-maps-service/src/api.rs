//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::ResponseError;
use grad_maps_core::core::config::ServiceCfg;
use grad_maps_core::core::coords::{LatLng, LatLngBounds};
use grad_maps_core::core::meta::{MapInfo, MapMetaData};
use grad_maps_core::core::Config;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tile_grid::TileKey;

/// Characters escaped in a map name used as path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Sizes of the prerendered preview images
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PreviewSize {
    S128,
    S256,
    S512,
    S1024,
}

impl PreviewSize {
    pub fn from_pixels(size: u32) -> Option<PreviewSize> {
        match size {
            128 => Some(PreviewSize::S128),
            256 => Some(PreviewSize::S256),
            512 => Some(PreviewSize::S512),
            1024 => Some(PreviewSize::S1024),
            _ => None,
        }
    }

    pub fn pixels(&self) -> u32 {
        match self {
            PreviewSize::S128 => 128,
            PreviewSize::S256 => 256,
            PreviewSize::S512 => 512,
            PreviewSize::S1024 => 1024,
        }
    }
}

#[derive(Deserialize, Debug)]
struct TileJson {
    maxzoom: u8,
}

/// Raster tile layer of the satellite imagery
#[derive(PartialEq, Clone, Debug)]
pub struct SatTileLayer {
    /// Url with `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
    /// Highest zoom level with tiles, upscaled beyond
    pub max_native_zoom: u8,
    pub opacity: f64,
    pub bounds: LatLngBounds,
}

impl SatTileLayer {
    pub fn tile_url(&self, tile: &TileKey) -> String {
        self.url_template
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

/// Client for the maps API
#[derive(Clone, Debug)]
pub struct ApiClient {
    api_uri: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(api_uri: &str) -> ApiClient {
        ApiClient {
            api_uri: api_uri.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(api_uri: &str, timeout: Option<Duration>) -> Result<ApiClient, String> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(ApiClient {
            api_uri: api_uri.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn api_uri(&self) -> &str {
        &self.api_uri
    }

    /// Absolute url of a path relative to the API base
    pub fn relative_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_uri, path)
    }

    fn map_url(&self, map: &str, path: &str) -> String {
        let map = utf8_percent_encode(map, PATH_SEGMENT);
        self.relative_url(&format!("{}/{}", map, path))
    }

    pub fn maps_url(&self) -> String {
        self.relative_url("maps")
    }

    pub fn meta_data_url(&self, map: &str) -> String {
        self.map_url(map, "meta.json")
    }

    /// Preview image, `preview.png` without size
    pub fn map_preview_img_url(&self, map: &str, size: Option<PreviewSize>) -> String {
        match size {
            Some(size) => self.map_url(map, &format!("preview_{}.png", size.pixels())),
            None => self.map_url(map, "preview.png"),
        }
    }

    /// Basemap style of the vector tiles
    pub fn style_url(&self, map: &str) -> String {
        self.map_url(map, "mvt/style.json")
    }

    pub fn sat_tile_json_url(&self, map: &str) -> String {
        self.map_url(map, "sat/tile.json")
    }

    pub fn sat_tile_url_template(&self, map: &str) -> String {
        self.map_url(map, "sat/{z}/{x}/{y}.png")
    }

    pub fn terrain_rgb_tile_json_url(&self, map: &str) -> String {
        self.map_url(map, "terrainrgb/tile.json")
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ResponseError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if let Some(err) = ResponseError::from_status(url, response.status()) {
            return Err(err);
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Available maps
    pub async fn fetch_maps(&self) -> Result<Vec<MapInfo>, ResponseError> {
        self.fetch_json(&self.maps_url()).await
    }

    pub async fn fetch_map_meta_data(&self, map: &str) -> Result<MapMetaData, ResponseError> {
        let meta: MapMetaData = self.fetch_json(&self.meta_data_url(map)).await?;
        info!(
            "Loaded meta data of '{}' ({} grids)",
            meta.world_name,
            meta.grids.len()
        );
        Ok(meta)
    }

    /// Satellite tile layer limited to the zoom levels published in its tilejson
    pub async fn sat_tile_layer(&self, map: &str) -> Result<SatTileLayer, ResponseError> {
        let tilejson: TileJson = self.fetch_json(&self.sat_tile_json_url(map)).await?;
        Ok(SatTileLayer {
            url_template: self.sat_tile_url_template(map),
            max_native_zoom: tilejson.maxzoom,
            opacity: 0.85,
            bounds: LatLngBounds::new(LatLng::new(-90.0, -180.0), LatLng::new(90.0, 180.0)),
        })
    }
}

impl<'a> Config<'a, ServiceCfg> for ApiClient {
    fn from_config(cfg: &ServiceCfg) -> Result<Self, String> {
        if !(cfg.api_uri.starts_with("http://") || cfg.api_uri.starts_with("https://")) {
            return Err(format!("Invalid api_uri '{}'", cfg.api_uri));
        }
        ApiClient::with_timeout(&cfg.api_uri, cfg.timeout.map(Duration::from_secs))
    }
    fn gen_config() -> String {
        let toml = r#"
[service]
# Base URI of the maps API
api_uri = "http://localhost:8080"
# Request timeout in seconds
#timeout = 30
"#;
        toml.to_string()
    }
}
