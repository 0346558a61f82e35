//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::api::ApiClient;
use crate::error::ResponseError;
use grad_maps_core::core::config::{default_satellite_opacity, MapCfg};
use grad_maps_core::core::coords::LatLng;
use grad_maps_core::core::ids::IdGenerator;
use grad_maps_core::core::meta::MapMetaData;
use grad_maps_core::core::Config;
use grad_maps_core::elevation::{ElevationControl, NO_ELEVATION};
use grad_maps_core::grid::{GridControl, GridStyle};
use grad_maps_core::host::{Control, HostMap, RasterLayer, RasterSource};

/// Id of the satellite source and layer
pub const SATELLITE_ID: &str = "satellite";
/// Basemap layer the satellite imagery is inserted below
pub const SATELLITE_BEFORE: &str = "water";

#[derive(PartialEq, Clone, Debug)]
pub struct MapOptions {
    pub sat_shown: bool,
    pub grid_shown: bool,
    pub satellite_opacity: f64,
}

impl Default for MapOptions {
    fn default() -> MapOptions {
        MapOptions {
            sat_shown: false,
            grid_shown: true,
            satellite_opacity: default_satellite_opacity(),
        }
    }
}

impl<'a> Config<'a, MapCfg> for MapOptions {
    fn from_config(cfg: &MapCfg) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&cfg.satellite_opacity) {
            return Err(format!(
                "satellite_opacity {} not in [0, 1]",
                cfg.satellite_opacity
            ));
        }
        Ok(MapOptions {
            sat_shown: cfg.sat_shown,
            grid_shown: cfg.grid_shown,
            satellite_opacity: cfg.satellite_opacity,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[map]
# Show satellite imagery below the vector basemap
sat_shown = false
grid_shown = true
#satellite_opacity = 0.8
"#;
        toml.to_string()
    }
}

/// Game world map: vector basemap with optional satellite imagery, grid
/// overlay and elevation lookup
pub struct GradMap<H: HostMap> {
    host: H,
    api: ApiClient,
    map_name: String,
    options: MapOptions,
    grid_style: GridStyle,
    ids: IdGenerator,
    loaded: bool,
    meta: Option<MapMetaData>,
    grid: Option<GridControl>,
    elevation: Option<ElevationControl>,
}

impl<H: HostMap> GradMap<H> {
    pub fn new(
        mut host: H,
        api: ApiClient,
        map_name: &str,
        options: MapOptions,
        grid_style: GridStyle,
    ) -> GradMap<H> {
        host.set_style(&api.style_url(map_name));
        host.disable_rotation();
        GradMap {
            host,
            api,
            map_name: map_name.to_string(),
            options,
            grid_style,
            ids: IdGenerator::new(),
            loaded: false,
            meta: None,
            grid: None,
            elevation: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn meta_data(&self) -> Option<&MapMetaData> {
        self.meta.as_ref()
    }

    pub fn grid(&self) -> Option<&GridControl> {
        self.grid.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Called when the host finished loading the basemap style
    pub fn on_load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.host.add_source(RasterSource {
            id: SATELLITE_ID.to_string(),
            url: self.api.sat_tile_json_url(&self.map_name),
        });
        if self.options.sat_shown {
            self.add_satellite_layer();
        }
        if self.options.grid_shown {
            self.attach_grid();
        }
    }

    /// Fetch the map's meta data and set up the grid
    pub async fn load_meta_data(&mut self) -> Result<(), ResponseError> {
        let meta = self.api.fetch_map_meta_data(&self.map_name).await?;
        self.set_meta_data(meta);
        Ok(())
    }

    pub fn set_meta_data(&mut self, meta: MapMetaData) {
        if let Some(mut grid) = self.grid.take() {
            grid.detach(&mut self.host);
        }
        self.grid = Some(GridControl::from_meta(&meta, self.grid_style.clone()));
        self.meta = Some(meta);
        if self.loaded && self.options.grid_shown {
            self.attach_grid();
        }
    }

    pub fn sat_shown(&self) -> bool {
        self.options.sat_shown
    }

    pub fn set_sat_shown(&mut self, value: bool) {
        if self.options.sat_shown == value {
            return;
        }
        self.options.sat_shown = value;
        if !self.loaded {
            return;
        }
        if value {
            self.add_satellite_layer();
        } else {
            self.host.remove_layer(SATELLITE_ID);
        }
    }

    pub fn grid_shown(&self) -> bool {
        self.options.grid_shown
    }

    pub fn set_grid_shown(&mut self, value: bool) {
        self.options.grid_shown = value;
        if !self.loaded {
            return;
        }
        if value {
            self.attach_grid();
        } else if let Some(ref mut grid) = self.grid {
            grid.detach(&mut self.host);
        }
    }

    /// Grid position of a world position, `None` before the meta data is known
    pub fn pos_to_grid(&self, x: f64, y: f64) -> Option<String> {
        self.grid.as_ref().and_then(|grid| grid.pos_to_grid(x, y))
    }

    /// Add the hidden terrain layer used by `elevation`
    pub fn enable_elevation(&mut self) {
        if self.elevation.is_some() {
            return;
        }
        let url = self.api.terrain_rgb_tile_json_url(&self.map_name);
        let mut control = ElevationControl::new(&url, &self.ids);
        control.attach(&mut self.host);
        self.elevation = Some(control);
    }

    pub fn disable_elevation(&mut self) {
        if let Some(mut control) = self.elevation.take() {
            control.detach(&mut self.host);
        }
    }

    pub fn elevation_control(&self) -> Option<&ElevationControl> {
        self.elevation.as_ref()
    }

    /// Elevation in meters, `NO_ELEVATION` if unknown
    pub fn elevation(&self, pos: LatLng) -> f64 {
        match self.elevation {
            Some(ref control) => control.get_elevation(pos, self.host.view()),
            None => NO_ELEVATION,
        }
    }

    /// Remove all overlays and hand back the host
    pub fn into_host(mut self) -> H {
        if let Some(mut grid) = self.grid.take() {
            grid.detach(&mut self.host);
        }
        self.disable_elevation();
        self.host
    }

    fn add_satellite_layer(&mut self) {
        self.host.add_layer(
            RasterLayer {
                id: SATELLITE_ID.to_string(),
                source: SATELLITE_ID.to_string(),
                opacity: self.options.satellite_opacity,
            },
            Some(SATELLITE_BEFORE),
        );
    }

    fn attach_grid(&mut self) {
        if let Some(ref mut grid) = self.grid {
            if !grid.is_attached() {
                grid.attach(&mut self.host);
            }
        }
    }
}
