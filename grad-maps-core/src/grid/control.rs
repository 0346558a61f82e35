//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::meta::MapMetaData;
use crate::grid::level::GridSystem;
use crate::grid::renderer::{GridRenderer, GridStyle};
use crate::host::map::{Control, EventKind, HostMap, ListenerId, MapEvent, MapView};
use crate::host::surface::SurfaceHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Overlay drawing the world's grid with labels on the map borders
pub struct GridControl {
    renderer: Rc<RefCell<GridRenderer>>,
    surface: Option<SurfaceHandle>,
    listeners: Vec<ListenerId>,
}

impl GridControl {
    pub fn new(system: GridSystem, style: GridStyle) -> GridControl {
        GridControl {
            renderer: Rc::new(RefCell::new(GridRenderer::new(system, style))),
            surface: None,
            listeners: Vec::new(),
        }
    }

    pub fn from_meta(meta: &MapMetaData, style: GridStyle) -> GridControl {
        GridControl::new(GridSystem::from_meta(meta), style)
    }

    /// Grid position in the finest grid, see `GridSystem::pos_to_grid`
    pub fn pos_to_grid(&self, x: f64, y: f64) -> Option<String> {
        self.renderer.borrow().system().pos_to_grid(x, y)
    }

    pub fn surface(&self) -> Option<&SurfaceHandle> {
        self.surface.as_ref()
    }
}

impl Control for GridControl {
    fn attach(&mut self, host: &mut dyn HostMap) {
        if self.is_attached() {
            warn!("Grid control is already attached");
            return;
        }
        let surface = match host.add_surface() {
            Some(surface) => surface,
            None => {
                warn!("Map offers no overlay surface for the grid");
                return;
            }
        };
        self.renderer.borrow_mut().set_surface(Some(surface.clone()));
        self.surface = Some(surface);

        let renderer = self.renderer.clone();
        self.listeners.push(host.on(
            EventKind::Resize,
            Box::new(move |_event: &MapEvent<'_>, view: &dyn MapView| {
                renderer.borrow_mut().fit_to(view);
            }),
        ));
        let renderer = self.renderer.clone();
        self.listeners.push(host.on(
            EventKind::Render,
            Box::new(move |_event: &MapEvent<'_>, view: &dyn MapView| {
                renderer.borrow_mut().redraw(view);
            }),
        ));

        self.renderer.borrow_mut().fit_to(host.view());
        info!("Grid control attached");
    }

    fn detach(&mut self, host: &mut dyn HostMap) {
        for id in self.listeners.drain(..) {
            host.off(id);
        }
        if let Some(surface) = self.surface.take() {
            host.remove_surface(&surface);
            self.renderer.borrow_mut().set_surface(None);
            info!("Grid control detached");
        }
    }

    fn is_attached(&self) -> bool {
        self.surface.is_some()
    }
}
