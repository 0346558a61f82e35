//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Drawing surface recording into SVG elements

use crate::core::screen::Point;
use crate::host::surface::{DrawingSurface, TextAlign, TextBaseline};
use std::fmt::Write;

/// Recorded drawing operation
#[derive(PartialEq, Clone, Debug)]
pub enum DrawOp {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Stroke {
        subpaths: Vec<Vec<Point>>,
        style: String,
        width: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        align: TextAlign,
        baseline: TextBaseline,
        font: String,
        style: String,
    },
}

pub struct SvgSurface {
    width: f64,
    height: f64,
    /// Fill of cleared areas
    background: String,
    stroke_style: String,
    fill_style: String,
    font: String,
    line_width: f64,
    text_align: TextAlign,
    text_baseline: TextBaseline,
    path: Vec<Vec<Point>>,
    ops: Vec<DrawOp>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, background: &str) -> SvgSurface {
        SvgSurface {
            width,
            height,
            background: background.to_string(),
            stroke_style: "black".to_string(),
            fill_style: "black".to_string(),
            font: "10px sans-serif".to_string(),
            line_width: 1.0,
            text_align: TextAlign::Left,
            text_baseline: TextBaseline::Middle,
            path: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// SVG elements without the surrounding `<svg>` tag
    pub fn svg_elements(&self) -> String {
        let mut svg = String::new();
        for op in &self.ops {
            match op {
                DrawOp::ClearRect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    let _ = writeln!(
                        svg,
                        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                        x,
                        y,
                        width,
                        height,
                        escape(&self.background)
                    );
                }
                DrawOp::Stroke {
                    subpaths,
                    style,
                    width,
                } => {
                    let mut d = String::new();
                    for subpath in subpaths {
                        for (i, p) in subpath.iter().enumerate() {
                            let cmd = if i == 0 { 'M' } else { 'L' };
                            let _ = write!(d, "{}{:.1} {:.1} ", cmd, p.x, p.y);
                        }
                    }
                    let _ = writeln!(
                        svg,
                        r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
                        d.trim_end(),
                        escape(style),
                        width
                    );
                }
                DrawOp::Text {
                    text,
                    x,
                    y,
                    align,
                    baseline,
                    font,
                    style,
                } => {
                    let anchor = match align {
                        TextAlign::Left => "start",
                        TextAlign::Center => "middle",
                        TextAlign::Right => "end",
                    };
                    let dominant_baseline = match baseline {
                        TextBaseline::Top => "hanging",
                        TextBaseline::Middle => "middle",
                        TextBaseline::Bottom => "text-after-edge",
                    };
                    let _ = writeln!(
                        svg,
                        r#"<text x="{:.1}" y="{:.1}" text-anchor="{}" dominant-baseline="{}" style="font: {}" fill="{}">{}</text>"#,
                        x,
                        y,
                        anchor,
                        dominant_baseline,
                        escape(font),
                        escape(style),
                        escape(text)
                    );
                }
            }
        }
        svg
    }

    /// Standalone SVG document
    pub fn to_svg(&self) -> String {
        svg_document(self.width, self.height, &self.background, &self.svg_elements())
    }
}

pub fn svg_document(width: f64, height: f64, background: &str, elements: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>\n{elements}</svg>\n",
        w = width,
        h = height,
        bg = escape(background),
        elements = elements
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl DrawingSurface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn resize(&mut self, width: f64, height: f64) {
        // Resizing a canvas discards its content
        self.width = width;
        self.height = height;
        self.ops.clear();
        self.path.clear();
    }
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height {
            self.ops.clear();
        } else {
            self.ops.push(DrawOp::ClearRect {
                x,
                y,
                width,
                height,
            });
        }
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.stroke_style = style.to_string();
    }
    fn set_fill_style(&mut self, style: &str) {
        self.fill_style = style.to_string();
    }
    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
    fn begin_path(&mut self) {
        self.path.clear();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(vec![Point::new(x, y)]);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push(Point::new(x, y)),
            // like canvas: a lineTo without current point starts a subpath
            None => self.path.push(vec![Point::new(x, y)]),
        }
    }
    fn stroke(&mut self) {
        let subpaths: Vec<Vec<Point>> = self
            .path
            .iter()
            .filter(|subpath| subpath.len() > 1)
            .cloned()
            .collect();
        if subpaths.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Stroke {
            subpaths,
            style: self.stroke_style.clone(),
            width: self.line_width,
        });
    }
    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }
    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.text_baseline = baseline;
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align: self.text_align,
            baseline: self.text_baseline,
            font: self.font.clone(),
            style: self.fill_style.clone(),
        });
    }
}
