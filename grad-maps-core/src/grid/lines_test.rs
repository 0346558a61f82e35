//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::grid_format::GridFormat;
use crate::grid::lines::{calc_lines, GridLine};

fn coords(lines: &[GridLine]) -> Vec<f64> {
    lines.iter().map(|l| l.coord).collect()
}

#[test]
fn test_order() {
    let format = GridFormat::new("00");
    let lines = calc_lines(300.0, 100.0, 0.0, 650.0, &format);
    assert_eq!(coords(&lines), vec![300.0, 400.0, 500.0, 600.0, 200.0, 100.0, 0.0]);
    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["00", "01", "02", "03", "99", "98", "97"]);
}

#[test]
fn test_boundaries_inclusive() {
    let format = GridFormat::new("00");
    let lines = calc_lines(0.0, 100.0, 100.0, 300.0, &format);
    assert_eq!(coords(&lines), vec![100.0, 200.0, 300.0]);

    let lines = calc_lines(0.0, 100.0, 101.0, 199.0, &format);
    assert!(lines.is_empty());
}

#[test]
fn test_start_outside_range() {
    let format = GridFormat::new("000");
    // start left of the range
    let lines = calc_lines(-1000.0, 100.0, 250.0, 520.0, &format);
    assert_eq!(coords(&lines), vec![300.0, 400.0, 500.0]);
    assert_eq!(lines[0].label, "013");

    // start right of the range
    let lines = calc_lines(1000.0, 100.0, 250.0, 520.0, &format);
    assert_eq!(coords(&lines), vec![500.0, 400.0, 300.0]);
    assert_eq!(lines[0].label, "995");

    // far away start is not walked line by line
    let lines = calc_lines(-1.0e12, 100.0, 0.0, 250.0, &format);
    assert_eq!(coords(&lines), vec![0.0, 100.0, 200.0]);
}

#[test]
fn test_negative_step() {
    let format = GridFormat::new("00");
    // y axis counted from the top of an 8192 world
    let lines = calc_lines(8192.0, -1000.0, 5000.0, 9000.0, &format);
    assert_eq!(coords(&lines), vec![8192.0, 7192.0, 6192.0, 5192.0]);
    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["00", "01", "02", "03"]);

    let lines = calc_lines(4000.0, -1000.0, 3500.0, 6500.0, &format);
    assert_eq!(coords(&lines), vec![4000.0, 5000.0, 6000.0]);
    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["00", "99", "98"]);
}

#[test]
fn test_major_lines() {
    let format = GridFormat::new("000");
    let lines = calc_lines(0.0, 1.0, -25.0, 25.0, &format);
    assert_eq!(lines.len(), 51);
    for line in &lines {
        let index = line.coord as i64;
        assert_eq!(line.major, index % 10 == 0, "index {}", index);
    }
    let majors: Vec<f64> = lines.iter().filter(|l| l.major).map(|l| l.coord).collect();
    assert_eq!(majors, vec![0.0, 10.0, 20.0, -10.0, -20.0]);
}

#[test]
fn test_coverage() {
    let format = GridFormat::new("0000");
    let cases = [
        (0.0, 100.0, 0.0, 1000.0),
        (50.0, 100.0, 0.0, 1000.0),
        (-30.0, 7.5, -100.0, 100.0),
        (5000.0, 250.0, 0.0, 1234.5),
        (-5000.0, 250.0, 0.0, 1234.5),
        (30720.0, -100.0, 12000.0, 13050.0),
        (0.1, 0.2, 0.0, 3.0),
    ];
    for &(start, step, min, max) in &cases {
        let lines = calc_lines(start, step, min, max, &format);
        let mut indices: Vec<i64> = lines
            .iter()
            .map(|l| ((l.coord - start) / step).round() as i64)
            .collect();
        for line in &lines {
            assert!(line.coord >= min && line.coord <= max);
        }
        indices.sort();
        let expected: Vec<i64> = (-100_000..100_000)
            .filter(|&i| {
                let c = start + i as f64 * step;
                c >= min && c <= max
            })
            .collect();
        assert_eq!(indices, expected, "case {:?}", (start, step, min, max));
    }
}

#[test]
fn test_degenerate_input() {
    let format = GridFormat::new("00");
    assert!(calc_lines(0.0, 0.0, 0.0, 100.0, &format).is_empty());
    assert!(calc_lines(0.0, 10.0, 100.0, 0.0, &format).is_empty());
    assert!(calc_lines(0.0, f64::NAN, 0.0, 100.0, &format).is_empty());
    assert!(calc_lines(0.0, 10.0, f64::NEG_INFINITY, 100.0, &format).is_empty());
    // far too many lines
    assert!(calc_lines(0.0, 1.0, 0.0, 1.0e9, &format).is_empty());
    // single line
    assert_eq!(coords(&calc_lines(0.0, 10.0, 20.0, 20.0, &format)), vec![20.0]);
}
