//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod coords;
pub mod grid_format;
pub mod ids;
pub mod meta;
pub mod screen;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::coords::{arma_to_lat_lng, lat_lng_to_arma, LatLng, LatLngBounds};
pub use self::grid_format::GridFormat;
pub use self::ids::IdGenerator;
pub use self::meta::{MapInfo, MapMetaData, MapMetaDataGrid};

#[cfg(test)]
mod config_test;
