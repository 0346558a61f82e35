//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{
    default_font, default_grid_color, default_label_padding, Config, GridStyleCfg,
};
use crate::core::coords::{arma_to_lat_lng, lat_lng_to_arma, LatLng};
use crate::core::screen::{line_intersection, viewport_borders, Border, Point, Side};
use crate::grid::level::GridSystem;
use crate::grid::lines::{calc_lines, GridLine};
use crate::host::map::MapView;
use crate::host::surface::{DrawingSurface, SurfaceHandle, TextAlign, TextBaseline};

const LABEL_HEIGHT: f64 = 20.0;
const LABEL_CHAR_WIDTH: f64 = 10.0;

#[derive(PartialEq, Clone, Debug)]
pub struct GridStyle {
    pub stroke_style: String,
    pub fill_style: String,
    pub font: String,
    pub label_padding: f64,
}

impl Default for GridStyle {
    fn default() -> GridStyle {
        GridStyle {
            stroke_style: default_grid_color(),
            fill_style: default_grid_color(),
            font: default_font(),
            label_padding: default_label_padding(),
        }
    }
}

impl<'a> Config<'a, GridStyleCfg> for GridStyle {
    fn from_config(cfg: &GridStyleCfg) -> Result<Self, String> {
        if !cfg.label_padding.is_finite() || cfg.label_padding < 0.0 {
            return Err(format!(
                "Invalid grid label_padding {}",
                cfg.label_padding
            ));
        }
        Ok(GridStyle {
            stroke_style: cfg.stroke_style.clone(),
            fill_style: cfg.fill_style.clone(),
            font: cfg.font.clone(),
            label_padding: cfg.label_padding,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
# Line color
stroke_style = "rgba(26, 26, 26, 0.6)"
# Label color
fill_style = "rgba(26, 26, 26, 0.6)"
font = "16px monospace"
# Distance between labels and the map border in pixels
label_padding = 4.0
"#;
        toml.to_string()
    }
}

/// Label position on a viewport border
#[derive(PartialEq, Clone, Debug)]
pub struct BorderLabel {
    pub pos: Point,
    pub text: String,
    pub side: Side,
}

/// Draws the grid of the current map view onto an overlay surface
pub struct GridRenderer {
    system: GridSystem,
    style: GridStyle,
    surface: Option<SurfaceHandle>,
    borders: Vec<Border>,
}

impl GridRenderer {
    pub fn new(system: GridSystem, style: GridStyle) -> GridRenderer {
        GridRenderer {
            system,
            style,
            surface: None,
            borders: Vec::new(),
        }
    }

    pub fn system(&self) -> &GridSystem {
        &self.system
    }

    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    pub fn set_surface(&mut self, surface: Option<SurfaceHandle>) {
        self.surface = surface;
        if self.surface.is_none() {
            self.borders.clear();
        }
    }

    /// Size the surface like the map canvas and redraw
    pub fn fit_to(&mut self, view: &dyn MapView) {
        let surface = match self.surface {
            Some(ref surface) => surface.clone(),
            None => return,
        };
        let (width, height) = view.canvas_size();
        surface.borrow_mut().resize(width, height);
        self.borders = viewport_borders(width, height);
        self.redraw(view);
    }

    pub fn redraw(&mut self, view: &dyn MapView) {
        let surface = match self.surface {
            Some(ref surface) => surface.clone(),
            None => return,
        };
        let mut ctx = surface.borrow_mut();
        let (width, height) = (ctx.width(), ctx.height());
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_stroke_style(&self.style.stroke_style);
        ctx.set_fill_style(&self.style.fill_style);
        ctx.set_font(&self.style.font);

        let zoom = view.zoom();
        let level = match self.system.level_for_zoom(zoom) {
            Some(level) => level,
            None => {
                debug!("No grid for zoom {}", zoom);
                return;
            }
        };

        let world_size = self.system.world_size;
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in view.bounds().corners().iter() {
            let [x, y] = lat_lng_to_arma(world_size, [corner.lat, corner.lng]);
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let x_lines = calc_lines(self.system.start_x, level.step_x, min_x, max_x, &level.format_x);
        let y_lines = calc_lines(self.system.start_y, level.step_y, min_y, max_y, &level.format_y);
        debug!(
            "Drawing {} x {} grid lines at zoom {}",
            x_lines.len(),
            y_lines.len(),
            zoom
        );

        let project = |x: f64, y: f64| {
            let [lat, lng] = arma_to_lat_lng(world_size, [x, y]);
            view.project(LatLng::new(lat, lng))
        };

        let mut labels = Vec::new();
        for line in &y_lines {
            let p1 = project(min_x, line.coord);
            let p2 = project(max_x, line.coord);
            draw_line(&mut *ctx, &self.borders, p1, p2, line, &mut labels);
        }
        for line in &x_lines {
            let p1 = project(line.coord, min_y);
            let p2 = project(line.coord, max_y);
            draw_line(&mut *ctx, &self.borders, p1, p2, line, &mut labels);
        }

        for label in &labels {
            draw_label(&mut *ctx, label, self.style.label_padding);
        }
    }
}

/// Stroke a grid line and collect its label positions on the borders
fn draw_line(
    ctx: &mut dyn DrawingSurface,
    borders: &[Border],
    p1: Point,
    p2: Point,
    line: &GridLine,
    labels: &mut Vec<BorderLabel>,
) {
    ctx.set_line_width(if line.major { 2.0 } else { 1.0 });
    ctx.begin_path();
    ctx.move_to(p1.x, p1.y);
    ctx.line_to(p2.x, p2.y);
    ctx.stroke();

    for border in borders {
        if let Some(pos) = line_intersection(p1, p2, border.start, border.end) {
            labels.push(BorderLabel {
                pos,
                text: line.label.clone(),
                side: border.side,
            });
        }
    }
}

fn draw_label(ctx: &mut dyn DrawingSurface, label: &BorderLabel, padding: f64) {
    let Point { x, y } = label.pos;
    let w = 4.0 + LABEL_CHAR_WIDTH * label.text.chars().count() as f64;
    let h = LABEL_HEIGHT;
    let (x_offset, y_offset) = match label.side {
        Side::Top => {
            ctx.set_text_align(TextAlign::Center);
            ctx.set_text_baseline(TextBaseline::Top);
            ctx.clear_rect(x - w / 2.0, y, w, h);
            (0.0, padding)
        }
        Side::Left => {
            ctx.set_text_align(TextAlign::Left);
            ctx.set_text_baseline(TextBaseline::Middle);
            ctx.clear_rect(x, y - h / 2.0, w, h);
            (padding, 0.0)
        }
        Side::Bottom => {
            ctx.set_text_align(TextAlign::Center);
            ctx.set_text_baseline(TextBaseline::Bottom);
            ctx.clear_rect(x - w / 2.0, y - h, w, h);
            (0.0, -padding)
        }
        Side::Right => {
            ctx.set_text_align(TextAlign::Right);
            ctx.set_text_baseline(TextBaseline::Middle);
            ctx.clear_rect(x - w, y - h / 2.0, w, h);
            (-padding, 0.0)
        }
    };
    ctx.fill_text(&label.text, x + x_offset, y + y_offset);
}
