//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::grid_format::GridFormat;

/// Upper limit of lines generated for one axis
pub const MAX_LINES: i64 = 100_000;

#[derive(PartialEq, Clone, Debug)]
pub struct GridLine {
    pub coord: f64,
    pub label: String,
    /// Every 10th line
    pub major: bool,
}

/// Grid lines at `start + i * step` within `[min, max]`.
///
/// Lines with index `i >= 0` come first in ascending index order, followed by
/// the lines with `i < 0` in descending order. A negative `step` makes the
/// index grow towards smaller coordinates.
pub fn calc_lines(start: f64, step: f64, min: f64, max: f64, format: &GridFormat) -> Vec<GridLine> {
    let mut lines = Vec::new();
    if !(start.is_finite() && step.is_finite() && min.is_finite() && max.is_finite()) {
        return lines;
    }
    if step == 0.0 || min > max {
        return lines;
    }

    let coord = |i: i64| start + i as f64 * step;
    let in_range = |i: i64| {
        let c = coord(i);
        c >= min && c <= max
    };

    // Index interval covering [min, max]
    let (lo, hi) = if step > 0.0 {
        ((min - start) / step, (max - start) / step)
    } else {
        ((max - start) / step, (min - start) / step)
    };
    if lo > (i64::MAX / 2) as f64 || hi < (i64::MIN / 2) as f64 {
        return lines;
    }
    let mut first = lo.ceil().max((i64::MIN / 2) as f64) as i64;
    let mut last = hi.floor().min((i64::MAX / 2) as f64) as i64;
    // Correct rounding errors of the division
    while in_range(first - 1) {
        first -= 1;
    }
    while first <= last && !in_range(first) {
        first += 1;
    }
    while in_range(last + 1) {
        last += 1;
    }
    while last >= first && !in_range(last) {
        last -= 1;
    }
    if first > last {
        return lines;
    }
    if last - first >= MAX_LINES {
        warn!(
            "Skipping grid with {} lines (step {} in [{}, {}])",
            last - first + 1,
            step,
            min,
            max
        );
        return lines;
    }

    lines.reserve((last - first + 1) as usize);
    let mut push = |i: i64| {
        lines.push(GridLine {
            coord: coord(i),
            label: format.format_grid_number(i),
            major: i % 10 == 0,
        });
    };
    // positive direction
    for i in first.max(0)..=last {
        push(i);
    }
    // negative direction
    for i in (first..=last.min(-1)).rev() {
        push(i);
    }

    lines
}
