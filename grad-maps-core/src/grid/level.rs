//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::grid_format::GridFormat;
use crate::core::meta::{MapMetaData, MapMetaDataGrid};

const MAPBOX_FACTOR: f64 = 4.5;

/// Map widget zoom at which a grid with the given game zoom limit appears
pub fn calc_zoom(arma_zoom: f64) -> f64 {
    MAPBOX_FACTOR * (1.0 - (arma_zoom - 0.001).max(0.001))
}

/// Grid resolution shown from `min_zoom` on
#[derive(Clone, Debug)]
pub struct GridLevel {
    pub step_x: f64,
    pub step_y: f64,
    pub format_x: GridFormat,
    pub format_y: GridFormat,
    /// Position template, see `GridSystem::pos_to_grid`
    pub format: String,
    pub min_zoom: f64,
}

impl GridLevel {
    /// Smaller cells than `other`
    pub fn is_finer(&self, other: &GridLevel) -> bool {
        self.step_x.abs() * self.step_y.abs() < other.step_x.abs() * other.step_y.abs()
    }
}

impl From<&MapMetaDataGrid> for GridLevel {
    fn from(grid: &MapMetaDataGrid) -> GridLevel {
        GridLevel {
            step_x: grid.step_x,
            // The game's grid has its origin in the top left corner with y
            // counting downwards, contrary to world positions.
            step_y: -grid.step_y,
            format_x: GridFormat::new(&grid.format_x),
            format_y: GridFormat::new(&grid.format_y),
            format: grid.format.clone(),
            min_zoom: calc_zoom(grid.zoom_max),
        }
    }
}

/// Grid levels of one world
#[derive(Clone, Debug)]
pub struct GridSystem {
    pub start_x: f64,
    pub start_y: f64,
    pub world_size: f64,
    /// Coarsest level first
    pub levels: Vec<GridLevel>,
}

impl GridSystem {
    /// Grid system from the `meta.json` values
    pub fn new(
        grid_offset_x: f64,
        grid_offset_y: f64,
        world_size: f64,
        grids: &[MapMetaDataGrid],
    ) -> GridSystem {
        let mut sorted: Vec<&MapMetaDataGrid> = grids.iter().collect();
        sorted.sort_by(|a, b| {
            b.zoom_max
                .partial_cmp(&a.zoom_max)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        GridSystem {
            start_x: 0.0 - grid_offset_x,
            start_y: world_size - grid_offset_y,
            world_size,
            levels: sorted.into_iter().map(GridLevel::from).collect(),
        }
    }

    pub fn from_meta(meta: &MapMetaData) -> GridSystem {
        GridSystem::new(
            meta.grid_offset_x,
            meta.grid_offset_y,
            meta.world_size,
            &meta.grids,
        )
    }

    /// The level with the largest `min_zoom` not above `zoom`. The level
    /// with the smaller step wins on equal `min_zoom`.
    pub fn level_for_zoom(&self, zoom: f64) -> Option<&GridLevel> {
        let mut visible: Option<&GridLevel> = None;
        for level in &self.levels {
            if zoom < level.min_zoom {
                continue;
            }
            match visible {
                Some(best) if level.min_zoom < best.min_zoom => {}
                Some(best) if level.min_zoom == best.min_zoom && !level.is_finer(best) => {}
                _ => visible = Some(level),
            }
        }
        visible
    }

    /// Grid position of a world position in the finest level
    pub fn pos_to_grid(&self, x: f64, y: f64) -> Option<String> {
        let finest = self.levels.len().checked_sub(1)?;
        self.pos_to_grid_at(x, y, finest)
    }

    /// Grid position of a world position in the level with index `level`,
    /// e.g. `"052134"`
    pub fn pos_to_grid_at(&self, x: f64, y: f64, level: usize) -> Option<String> {
        let level = self.levels.get(level)?;
        let label_x = axis_label(x, self.start_x, level.step_x, &level.format_x)?;
        let label_y = axis_label(y, self.start_y, level.step_y, &level.format_y)?;
        Some(
            level
                .format
                .replacen('X', &label_x, 1)
                .replacen('Y', &label_y, 1),
        )
    }
}

fn axis_label(coord: f64, start: f64, step: f64, format: &GridFormat) -> Option<String> {
    if step == 0.0 || !step.is_finite() || !coord.is_finite() {
        return None;
    }
    let index = ((coord - start) / step).floor();
    if index.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }
    Some(format.format_grid_number(index as i64))
}
