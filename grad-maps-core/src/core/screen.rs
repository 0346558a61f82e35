//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry in screen coordinates

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Edge of the viewport
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// Viewport edge as a line segment
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Border {
    pub start: Point,
    pub end: Point,
    pub side: Side,
}

/// The four borders of a `width` x `height` viewport
pub fn viewport_borders(width: f64, height: f64) -> Vec<Border> {
    let tl = Point::new(0.0, 0.0);
    let bl = Point::new(0.0, height);
    let br = Point::new(width, height);
    let tr = Point::new(width, 0.0);
    vec![
        Border {
            start: bl,
            end: tl,
            side: Side::Left,
        },
        Border {
            start: tl,
            end: tr,
            side: Side::Top,
        },
        Border {
            start: tr,
            end: br,
            side: Side::Right,
        },
        Border {
            start: br,
            end: bl,
            side: Side::Bottom,
        },
    ]
}

/// Intersection of the infinite lines through `l1` and `l2`.
/// Returns `None` for parallel lines.
pub fn line_intersection(
    l1_start: Point,
    l1_end: Point,
    l2_start: Point,
    l2_end: Point,
) -> Option<Point> {
    let denominator = ((l2_end.y - l2_start.y) * (l1_end.x - l1_start.x))
        - ((l2_end.x - l2_start.x) * (l1_end.y - l1_start.y));
    if denominator == 0.0 {
        return None;
    }
    let a = l1_start.y - l2_start.y;
    let b = l1_start.x - l2_start.x;
    let numerator = ((l2_end.x - l2_start.x) * a) - ((l2_end.y - l2_start.y) * b);
    let c = numerator / denominator;

    Some(Point::new(
        l1_start.x + (c * (l1_end.x - l1_start.x)),
        l1_start.y + (c * (l1_end.y - l1_start.y)),
    ))
}
