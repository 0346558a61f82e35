//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{Config, GridStyleCfg};
use crate::core::coords::LatLng;
use crate::core::meta::MapMetaData;
use crate::core::meta_test::STRATIS_META;
use crate::core::screen::Side;
use crate::grid::level::GridSystem;
use crate::grid::renderer::{GridRenderer, GridStyle};
use crate::host::headless::HeadlessMap;
use crate::host::surface::SurfaceHandle;
use crate::host::svg::SvgSurface;
use std::cell::RefCell;
use std::rc::Rc;

fn stratis_renderer() -> GridRenderer {
    let meta = MapMetaData::from_json(STRATIS_META).unwrap();
    GridRenderer::new(GridSystem::from_meta(&meta), GridStyle::default())
}

#[test]
fn test_default_style() {
    let style = GridStyle::default();
    assert_eq!(style.stroke_style, "rgba(26, 26, 26, 0.6)");
    assert_eq!(style.fill_style, "rgba(26, 26, 26, 0.6)");
    assert_eq!(style.font, "16px monospace");
    assert_eq!(style.label_padding, 4.0);
}

#[test]
fn test_style_from_config() {
    let cfg = GridStyleCfg {
        stroke_style: "black".to_string(),
        fill_style: "white".to_string(),
        font: "10px sans-serif".to_string(),
        label_padding: 2.0,
    };
    let style = GridStyle::from_config(&cfg).unwrap();
    assert_eq!(style.stroke_style, "black");
    assert_eq!(style.label_padding, 2.0);

    let cfg = GridStyleCfg {
        label_padding: -1.0,
        ..cfg
    };
    assert_eq!(
        GridStyle::from_config(&cfg).err(),
        Some("Invalid grid label_padding -1".to_string())
    );

    assert!(GridStyle::gen_config().starts_with("\n[grid]\n"));
}

#[test]
fn test_without_surface() {
    let mut map = HeadlessMap::new(800.0, 600.0);
    map.set_view(LatLng::new(0.0, 0.0), 3.0);
    let mut renderer = stratis_renderer();
    renderer.fit_to(map.state());
    renderer.redraw(map.state());
    assert!(renderer.borders().is_empty());
}

#[test]
fn test_fit_to_view() {
    let mut map = HeadlessMap::new(800.0, 600.0);
    map.set_view(LatLng::new(0.0, 0.0), 3.0);
    let svg = Rc::new(RefCell::new(SvgSurface::new(10.0, 10.0, "white")));
    let surface: SurfaceHandle = svg.clone();

    let mut renderer = stratis_renderer();
    renderer.set_surface(Some(surface));
    renderer.fit_to(map.state());
    let sides: Vec<Side> = renderer.borders().iter().map(|b| b.side).collect();
    assert_eq!(sides, vec![Side::Left, Side::Top, Side::Right, Side::Bottom]);
    assert_eq!(renderer.borders()[2].start.x, 800.0);
    assert!(svg.borrow().to_svg().contains("width=\"800\" height=\"600\""));
    assert!(!svg.borrow().ops().is_empty());

    renderer.set_surface(None);
    assert!(renderer.borders().is_empty());
}
