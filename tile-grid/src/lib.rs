//! Web Mercator tile and pixel calculations
//!
//! ## Projection
//!
//! ```rust
//! use tile_grid::{lonlat_to_merc, merc_to_lonlat};
//!
//! let (x, y) = lonlat_to_merc(8.5, 47.3);
//! let (lon, lat) = merc_to_lonlat(x, y);
//! assert!((lon - 8.5).abs() < 1e-9);
//! assert!((lat - 47.3).abs() < 1e-9);
//! ```
//!
//! ## Tile lookup
//!
//! ```rust
//! use tile_grid::{PixelGrid, TileKey};
//!
//! let grid = PixelGrid::web_mercator();
//! assert_eq!(grid.tile_containing(10.0, 10.0, 1), TileKey::new(1, 1, 0));
//! assert_eq!(grid.tile_containing(10.0, 10.0, 1).to_string(), "1/1/0");
//! ```

mod grid;

pub use grid::{
    lonlat_to_merc, merc_to_lonlat, Extent, PixelGrid, TileKey, MAX_LATITUDE,
    MERC_MAX,
};
