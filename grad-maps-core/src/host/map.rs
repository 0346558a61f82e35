//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Capabilities of the map widget hosting the overlays

use crate::core::coords::{LatLng, LatLngBounds};
use crate::core::screen::Point;
use crate::host::surface::SurfaceHandle;
use tile_grid::TileKey;

/// Read access to the current map view
pub trait MapView {
    fn zoom(&self) -> f64;
    fn bounds(&self) -> LatLngBounds;
    /// Geographic position to screen pixel
    fn project(&self, pos: LatLng) -> Point;
    /// Size of the map canvas in pixels
    fn canvas_size(&self) -> (f64, f64);
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum EventKind {
    Resize,
    Render,
    SourceData,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TileState {
    Loading,
    Loaded,
    Unloaded,
    Errored,
}

/// Pixel read-back of a rendered tile texture
pub trait TextureReader {
    /// RGBA bytes, row by row
    fn read_pixels(&self) -> Result<Vec<u8>, String>;
}

pub struct TileData<'a> {
    pub key: TileKey,
    pub state: TileState,
    pub texture: Option<&'a dyn TextureReader>,
}

pub struct SourceDataEvent<'a> {
    pub source_id: &'a str,
    pub tile: Option<TileData<'a>>,
}

pub enum MapEvent<'a> {
    Resize,
    Render,
    SourceData(SourceDataEvent<'a>),
}

impl<'a> MapEvent<'a> {
    pub fn kind(&self) -> EventKind {
        match self {
            MapEvent::Resize => EventKind::Resize,
            MapEvent::Render => EventKind::Render,
            MapEvent::SourceData(_) => EventKind::SourceData,
        }
    }
}

pub type Listener = Box<dyn FnMut(&MapEvent<'_>, &dyn MapView)>;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ListenerId(pub u64);

/// Raster source described by a TileJSON url
#[derive(PartialEq, Clone, Debug)]
pub struct RasterSource {
    pub id: String,
    pub url: String,
}

#[derive(PartialEq, Clone, Debug)]
pub struct RasterLayer {
    pub id: String,
    pub source: String,
    pub opacity: f64,
}

/// Map widget operations used by controls
pub trait HostMap {
    fn view(&self) -> &dyn MapView;
    /// Register an event listener
    fn on(&mut self, kind: EventKind, listener: Listener) -> ListenerId;
    /// Unregister an event listener. Returns false for unknown ids.
    fn off(&mut self, id: ListenerId) -> bool;
    /// Create an overlay surface stacked above the map canvas
    fn add_surface(&mut self) -> Option<SurfaceHandle>;
    fn remove_surface(&mut self, surface: &SurfaceHandle);
    fn add_source(&mut self, source: RasterSource);
    fn remove_source(&mut self, id: &str);
    /// Add a layer, below the layer `before` if given
    fn add_layer(&mut self, layer: RasterLayer, before: Option<&str>);
    fn remove_layer(&mut self, id: &str);
    /// Basemap style url
    fn set_style(&mut self, url: &str);
    fn disable_rotation(&mut self);
}

/// Component added to and removed from a host map
pub trait Control {
    fn attach(&mut self, host: &mut dyn HostMap);
    /// Undo `attach`. Calling it on a detached control does nothing.
    fn detach(&mut self, host: &mut dyn HostMap);
    fn is_attached(&self) -> bool;
}
