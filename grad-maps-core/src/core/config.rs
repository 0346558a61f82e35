//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub service: ServiceCfg,
    #[serde(default)]
    pub map: MapCfg,
    #[serde(default)]
    pub grid: GridStyleCfg,
    #[serde(default)]
    pub render: RenderCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServiceCfg {
    /// Base URI of the maps API
    pub api_uri: String,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MapCfg {
    #[serde(default)]
    pub sat_shown: bool,
    #[serde(default = "default_true")]
    pub grid_shown: bool,
    #[serde(default = "default_satellite_opacity")]
    pub satellite_opacity: f64,
}

impl Default for MapCfg {
    fn default() -> Self {
        MapCfg {
            sat_shown: false,
            grid_shown: true,
            satellite_opacity: default_satellite_opacity(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridStyleCfg {
    #[serde(default = "default_grid_color")]
    pub stroke_style: String,
    #[serde(default = "default_grid_color")]
    pub fill_style: String,
    #[serde(default = "default_font")]
    pub font: String,
    /// Distance between a label and the viewport border in pixels
    #[serde(default = "default_label_padding")]
    pub label_padding: f64,
}

impl Default for GridStyleCfg {
    fn default() -> Self {
        GridStyleCfg {
            stroke_style: default_grid_color(),
            fill_style: default_grid_color(),
            font: default_font(),
            label_padding: default_label_padding(),
        }
    }
}

/// Offscreen rendering (CLI `render`)
#[derive(Deserialize, Clone, Debug)]
pub struct RenderCfg {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for RenderCfg {
    fn default() -> Self {
        RenderCfg {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

fn default_true() -> bool {
    true
}

pub fn default_satellite_opacity() -> f64 {
    0.8
}

pub const DEFAULT_GRID_COLOR: &str = "rgba(26, 26, 26, 0.6)";

pub fn default_grid_color() -> String {
    DEFAULT_GRID_COLOR.to_string()
}

pub fn default_font() -> String {
    "16px monospace".to_string()
}

pub fn default_label_padding() -> f64 {
    4.0
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

fn default_background() -> String {
    "white".to_string()
}

pub const DEFAULT_CONFIG: &'static str = r#"
[service]
api_uri = "http://localhost:8080"

[map]
sat_shown = false
grid_shown = true

[grid]
stroke_style = "rgba(26, 26, 26, 0.6)"

[render]
width = 1024
height = 768
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
