//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Offscreen map host

use crate::core::coords::{LatLng, LatLngBounds};
use crate::core::screen::Point;
use crate::host::map::{
    EventKind, HostMap, Listener, ListenerId, MapEvent, MapView, RasterLayer, RasterSource,
    SourceDataEvent, TextureReader, TileData, TileState,
};
use crate::host::surface::SurfaceHandle;
use crate::host::svg::{svg_document, SvgSurface};
use std::cell::RefCell;
use std::rc::Rc;
use tile_grid::{PixelGrid, TileKey};

/// Tile size defining the zoom scale of the map widget
pub const WIDGET_TILE_SIZE: u32 = 512;

/// View state of a headless map
pub struct MapState {
    pub center: LatLng,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
    grid: PixelGrid,
}

impl MapState {
    fn center_px(&self) -> (f64, f64) {
        self.grid
            .lonlat_to_world_px(self.center.lng, self.center.lat, self.zoom)
    }

    /// Screen pixel to geographic position
    pub fn unproject(&self, point: Point) -> LatLng {
        let (cx, cy) = self.center_px();
        let (lng, lat) = self.grid.world_px_to_lonlat(
            cx + point.x - self.width / 2.0,
            cy + point.y - self.height / 2.0,
            self.zoom,
        );
        LatLng::new(lat, lng)
    }
}

impl MapView for MapState {
    fn zoom(&self) -> f64 {
        self.zoom
    }
    fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(
            self.unproject(Point::new(0.0, self.height)),
            self.unproject(Point::new(self.width, 0.0)),
        )
    }
    fn project(&self, pos: LatLng) -> Point {
        let (cx, cy) = self.center_px();
        let (x, y) = self.grid.lonlat_to_world_px(pos.lng, pos.lat, self.zoom);
        Point::new(x - cx + self.width / 2.0, y - cy + self.height / 2.0)
    }
    fn canvas_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

struct Registration {
    id: ListenerId,
    kind: EventKind,
    listener: Listener,
}

/// Map host without a window, rendering overlays to SVG
pub struct HeadlessMap {
    state: MapState,
    listeners: Vec<Registration>,
    next_listener: u64,
    surfaces: Vec<Rc<RefCell<SvgSurface>>>,
    sources: Vec<RasterSource>,
    layers: Vec<RasterLayer>,
    style: Option<String>,
    rotation: bool,
    background: String,
}

impl HeadlessMap {
    pub fn new(width: f64, height: f64) -> HeadlessMap {
        HeadlessMap {
            state: MapState {
                center: LatLng::new(0.0, 0.0),
                zoom: 0.0,
                width,
                height,
                grid: PixelGrid::new(WIDGET_TILE_SIZE),
            },
            listeners: Vec::new(),
            next_listener: 0,
            surfaces: Vec::new(),
            sources: Vec::new(),
            layers: Vec::new(),
            style: None,
            rotation: true,
            background: "white".to_string(),
        }
    }

    pub fn with_background(mut self, background: &str) -> HeadlessMap {
        self.background = background.to_string();
        self
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    /// Move the view and render a frame
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.state.center = center;
        self.state.zoom = zoom;
        self.emit(&MapEvent::Render);
    }

    /// Resize the map canvas and render a frame
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state.width = width;
        self.state.height = height;
        self.emit(&MapEvent::Resize);
        self.emit(&MapEvent::Render);
    }

    pub fn emit(&mut self, event: &MapEvent<'_>) {
        let kind = event.kind();
        for registration in self.listeners.iter_mut() {
            if registration.kind == kind {
                (registration.listener)(event, &self.state);
            }
        }
    }

    /// Notify listeners about a loaded tile of a source
    pub fn load_tile(&mut self, source_id: &str, key: TileKey, texture: &dyn TextureReader) {
        self.emit(&MapEvent::SourceData(SourceDataEvent {
            source_id,
            tile: Some(TileData {
                key,
                state: TileState::Loaded,
                texture: Some(texture),
            }),
        }));
    }

    /// Notify listeners about an unloaded tile of a source
    pub fn unload_tile(&mut self, source_id: &str, key: TileKey) {
        self.emit(&MapEvent::SourceData(SourceDataEvent {
            source_id,
            tile: Some(TileData {
                key,
                state: TileState::Unloaded,
                texture: None,
            }),
        }));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn surfaces(&self) -> &[Rc<RefCell<SvgSurface>>] {
        &self.surfaces
    }

    pub fn sources(&self) -> &[RasterSource] {
        &self.sources
    }

    /// Layers in drawing order, bottom first
    pub fn layers(&self) -> &[RasterLayer] {
        &self.layers
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_ref().map(|s| s.as_str())
    }

    pub fn rotation_enabled(&self) -> bool {
        self.rotation
    }

    /// All overlay surfaces composed into one SVG document
    pub fn to_svg(&self) -> String {
        let elements: String = self
            .surfaces
            .iter()
            .map(|surface| surface.borrow().svg_elements())
            .collect();
        svg_document(
            self.state.width,
            self.state.height,
            &self.background,
            &elements,
        )
    }
}

impl HostMap for HeadlessMap {
    fn view(&self) -> &dyn MapView {
        &self.state
    }
    fn on(&mut self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Registration { id, kind, listener });
        id
    }
    fn off(&mut self, id: ListenerId) -> bool {
        let count = self.listeners.len();
        self.listeners.retain(|registration| registration.id != id);
        self.listeners.len() != count
    }
    fn add_surface(&mut self) -> Option<SurfaceHandle> {
        let surface = Rc::new(RefCell::new(SvgSurface::new(
            self.state.width,
            self.state.height,
            &self.background,
        )));
        self.surfaces.push(surface.clone());
        let handle: SurfaceHandle = surface;
        Some(handle)
    }
    fn remove_surface(&mut self, surface: &SurfaceHandle) {
        let target = Rc::as_ptr(surface) as *const u8;
        self.surfaces
            .retain(|s| Rc::as_ptr(s) as *const u8 != target);
    }
    fn add_source(&mut self, source: RasterSource) {
        if self.sources.iter().any(|s| s.id == source.id) {
            warn!("Source '{}' already exists", source.id);
            return;
        }
        self.sources.push(source);
    }
    fn remove_source(&mut self, id: &str) {
        self.sources.retain(|s| s.id != id);
    }
    fn add_layer(&mut self, layer: RasterLayer, before: Option<&str>) {
        if self.layers.iter().any(|l| l.id == layer.id) {
            warn!("Layer '{}' already exists", layer.id);
            return;
        }
        let position = before.and_then(|before| self.layers.iter().position(|l| l.id == before));
        match position {
            Some(index) => self.layers.insert(index, layer),
            None => self.layers.push(layer),
        }
    }
    fn remove_layer(&mut self, id: &str) {
        self.layers.retain(|l| l.id != id);
    }
    fn set_style(&mut self, url: &str) {
        self.style = Some(url.to_string());
    }
    fn disable_rotation(&mut self) {
        self.rotation = false;
    }
}
