//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use clap::ArgMatches;
use grad_maps_core::core::config::{DEFAULT_CONFIG, RenderCfg};
use grad_maps_core::core::coords::{arma_to_lat_lng, LatLng};
use grad_maps_core::core::meta::MapMetaData;
use grad_maps_core::core::{parse_config, read_config, ApplicationCfg, Config};
use grad_maps_core::grid::{GridStyle, GridSystem};
use grad_maps_core::host::HeadlessMap;
use grad_maps_service::{ApiClient, GradMap, MapOptions};
use std::fs;

/// Configuration from `--config` or the defaults, with `--api` applied
pub fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = match args.value_of("config") {
        Some(cfgpath) => {
            info!("Reading configuration from '{}'", cfgpath);
            read_config(cfgpath)?
        }
        None => parse_config(DEFAULT_CONFIG.to_string(), "")?,
    };
    if let Some(api) = args.value_of("api") {
        config.service.api_uri = api.to_string();
    }
    Ok(config)
}

pub fn gen_config() -> String {
    let mut config = "# grad-maps configuration\n".to_string();
    config.push_str(&ApiClient::gen_config());
    config.push_str(&MapOptions::gen_config());
    config.push_str(&GridStyle::gen_config());
    config.push_str(
        r#"
[render]
# Size of rendered SVG maps
width = 1024
height = 768
background = "white"
"#,
    );
    config
}

/// Parse `"x,y"`
pub fn parse_pair(value: &str, name: &str) -> Result<[f64; 2], String> {
    let values = value
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| format!("Error parsing '{}' as pair of float values", name))?;
    match values.as_slice() {
        [x, y] => Ok([*x, *y]),
        _ => Err(format!("Error parsing '{}' as pair of float values", name)),
    }
}

fn required<'a>(args: &'a ArgMatches<'_>, name: &str) -> Result<&'a str, String> {
    args.value_of(name)
        .ok_or_else(|| format!("Missing argument '{}'", name))
}

fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Couldn't start runtime: {}", e))
}

/// Meta data from `--meta` or the API
fn meta_data(api: &ApiClient, args: &ArgMatches<'_>) -> Result<MapMetaData, String> {
    if let Some(path) = args.value_of("meta") {
        info!("Reading meta data from '{}'", path);
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Error reading meta data '{}': {}", path, e))?;
        return MapMetaData::from_json(&json);
    }
    let map = required(args, "map")?;
    runtime()?
        .block_on(api.fetch_map_meta_data(map))
        .map_err(|e| format!("Error fetching meta data of '{}': {}", map, e))
}

/// `maps`: one line per map
pub fn maps(config: &ApplicationCfg) -> Result<String, String> {
    let api = ApiClient::from_config(&config.service)?;
    let maps = runtime()?
        .block_on(api.fetch_maps())
        .map_err(|e| format!("Error fetching maps: {}", e))?;
    let mut out = String::new();
    for map in maps {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            map.world_name, map.display_name, map.author
        ));
    }
    Ok(out)
}

/// `meta`: pretty printed meta data
pub fn meta(config: &ApplicationCfg, args: &ArgMatches<'_>) -> Result<String, String> {
    let api = ApiClient::from_config(&config.service)?;
    let meta = meta_data(&api, args)?;
    serde_json::to_string_pretty(&meta).map_err(|e| e.to_string())
}

/// `grid`: grid position of a world position
pub fn grid(config: &ApplicationCfg, args: &ArgMatches<'_>) -> Result<String, String> {
    let api = ApiClient::from_config(&config.service)?;
    let [x, y] = parse_pair(required(args, "pos")?, "pos")?;
    let meta = meta_data(&api, args)?;
    let system = GridSystem::from_meta(&meta);
    let pos = match args.value_of("level") {
        Some(level) => {
            let level = level
                .parse::<usize>()
                .map_err(|_| "Error parsing 'level' as integer value".to_string())?;
            system.pos_to_grid_at(x, y, level)
        }
        None => system.pos_to_grid(x, y),
    };
    pos.ok_or_else(|| format!("No grid level available for '{}'", meta.world_name))
}

/// `render`: SVG of the grid overlay around a world position
pub fn render(config: &ApplicationCfg, args: &ArgMatches<'_>) -> Result<String, String> {
    let api = ApiClient::from_config(&config.service)?;
    let options = MapOptions::from_config(&config.map)?;
    let style = GridStyle::from_config(&config.grid)?;
    let [x, y] = parse_pair(required(args, "center")?, "center")?;
    let zoom = required(args, "zoom")?
        .parse::<f64>()
        .map_err(|_| "Error parsing 'zoom' as float value".to_string())?;
    let meta = meta_data(&api, args)?;
    let map_name = args
        .value_of("map")
        .unwrap_or(&meta.world_name)
        .to_string();
    let RenderCfg {
        width,
        height,
        background,
    } = &config.render;

    let [lat, lng] = arma_to_lat_lng(meta.world_size, [x, y]);
    let host = HeadlessMap::new(*width as f64, *height as f64).with_background(background);
    let mut map = GradMap::new(host, api, &map_name, options, style);
    map.on_load();
    map.set_meta_data(meta);
    map.host_mut().set_view(LatLng::new(lat, lng), zoom);
    info!(
        "Rendered '{}' at {},{} zoom {} ({}x{})",
        map_name, x, y, zoom, width, height
    );
    Ok(map.host().to_svg())
}

/// Print to stdout or write to `--output`
pub fn output(args: &ArgMatches<'_>, content: &str) -> Result<(), String> {
    match args.value_of("output") {
        Some(path) => {
            fs::write(path, content).map_err(|e| format!("Error writing '{}': {}", path, e))?;
            info!("Written to '{}'", path);
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
