//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod api;
pub mod error;
pub mod map;

pub use crate::api::{ApiClient, PreviewSize, SatTileLayer};
pub use crate::error::ResponseError;
pub use crate::map::{GradMap, MapOptions};

#[cfg(test)]
mod map_test;
