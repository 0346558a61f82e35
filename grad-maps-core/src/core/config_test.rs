//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{parse_config, read_config, ApplicationCfg, DEFAULT_CONFIG};
use std::env;

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.service.api_uri, "https://maps.example.org/api");
    assert_eq!(config.service.timeout, Some(10));
    assert!(config.map.sat_shown);
    assert!(!config.map.grid_shown);
    assert_eq!(config.map.satellite_opacity, 0.8);
    assert_eq!(config.grid.stroke_style, "rgba(0, 0, 0, 0.8)");
    assert_eq!(config.grid.fill_style, "rgba(26, 26, 26, 0.6)");
    assert_eq!(config.grid.font, "14px monospace");
    assert_eq!(config.grid.label_padding, 4.0);
    assert_eq!(config.render.width, 800);
    assert_eq!(config.render.background, "#f4f1e8");
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.service.api_uri, "http://localhost:8080");
    assert_eq!(config.service.timeout, None);
    assert!(!config.map.sat_shown);
    assert!(config.map.grid_shown);
    assert_eq!(config.render.width, 1024);
    assert_eq!(config.render.height, 768);
}

#[test]
fn test_minimal_config() {
    let toml = r#"
        [service]
        api_uri = "http://localhost:3000"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(config.map.grid_shown);
    assert_eq!(config.grid.font, "16px monospace");
    assert_eq!(config.render.background, "white");
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    let err = config.err().unwrap();
    assert!(err.starts_with("src/core/mod.rs - "), "{}", err);

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let config: Result<ApplicationCfg, _> = parse_config("[map]\n".to_string(), "nosvc.toml");
    let err = config.err().unwrap();
    assert!(err.starts_with("nosvc.toml - missing field `service`"), "{}", err);
}

#[test]
fn test_envvar_expansion() {
    env::set_var("GRAD_MAPS_TEST_API", "http://maps.test:8080");
    let toml = r#"
        [service]
        api_uri = "{{ env.GRAD_MAPS_TEST_API }}"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.service.api_uri, "http://maps.test:8080");

    let toml = r#"
        [service]
        api_uri = "{{ env.GRAD_MAPS_TEST_API | default(value='http://localhost') }}"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.service.api_uri, "http://maps.test:8080");

    let toml = r#"
        [service]
        api_uri = "{{ env.GRAD_MAPS_TEST_UNDEFINED | default(value='http://localhost') }}"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.service.api_uri, "http://localhost");
}

#[test]
fn test_old_envvar_syntax() {
    let toml = r#"
        [service]
        api_uri = "${GRAD_MAPS_API}"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        config.err(),
        Some("Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string())
    );

    let toml = r#"
        [service]
        api_uri = "{{ env.GRAD_MAPS_TEST_UNDEFINED }}"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().starts_with("Template error: "));
}
