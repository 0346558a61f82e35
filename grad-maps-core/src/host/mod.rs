//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod headless;
pub mod map;
pub mod surface;
pub mod svg;


pub use self::headless::HeadlessMap;
pub use self::map::{
    Control, EventKind, HostMap, Listener, ListenerId, MapEvent, MapView, RasterLayer,
    RasterSource, SourceDataEvent, TextureReader, TileData, TileState,
};
pub use self::surface::{DrawingSurface, SurfaceHandle, TextAlign, TextBaseline};
pub use self::svg::{DrawOp, SvgSurface};
