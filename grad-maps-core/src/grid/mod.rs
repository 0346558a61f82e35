//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid overlay

pub mod control;
pub mod level;
pub mod lines;
pub mod renderer;

pub use self::control::GridControl;
pub use self::level::{calc_zoom, GridLevel, GridSystem};
pub use self::lines::{calc_lines, GridLine, MAX_LINES};
pub use self::renderer::{GridRenderer, GridStyle};

#[cfg(test)]
mod lines_test;
#[cfg(test)]
mod renderer_test;
