//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::coords::LatLng;
use crate::core::ids::IdGenerator;
use crate::elevation::sampler::{ElevationSampler, NO_ELEVATION};
use crate::host::map::{
    Control, EventKind, HostMap, ListenerId, MapEvent, MapView, RasterLayer, RasterSource,
    TileState,
};
use std::cell::RefCell;
use std::rc::Rc;

const ID_PREFIX: &str = "grad-elevation-control";

/// Invisible terrain-RGB layer answering elevation queries
pub struct ElevationControl {
    id: String,
    tile_json_url: String,
    sampler: Rc<RefCell<ElevationSampler>>,
    listener: Option<ListenerId>,
}

impl ElevationControl {
    /// Control for the terrain-RGB tiles described by `tile_json_url`
    pub fn new(tile_json_url: &str, ids: &IdGenerator) -> ElevationControl {
        ElevationControl {
            id: ids.next_id(ID_PREFIX),
            tile_json_url: tile_json_url.to_string(),
            sampler: Rc::new(RefCell::new(ElevationSampler::new())),
            listener: None,
        }
    }

    /// Id of the raster source and layer
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tile_json_url(&self) -> &str {
        &self.tile_json_url
    }

    pub fn cached_tiles(&self) -> usize {
        self.sampler.borrow().len()
    }

    /// Elevation in meters, `NO_ELEVATION` if unknown or detached
    pub fn get_elevation(&self, pos: LatLng, view: &dyn MapView) -> f64 {
        if !self.is_attached() {
            return NO_ELEVATION;
        }
        self.sampler.borrow().query(pos.lat, pos.lng, view.zoom())
    }
}

impl Control for ElevationControl {
    fn attach(&mut self, host: &mut dyn HostMap) {
        if self.is_attached() {
            warn!("Elevation control '{}' is already attached", self.id);
            return;
        }
        let sampler = self.sampler.clone();
        let source_id = self.id.clone();
        let listener = host.on(
            EventKind::SourceData,
            Box::new(move |event: &MapEvent<'_>, _view: &dyn MapView| {
                let data = match event {
                    MapEvent::SourceData(data) if data.source_id == source_id => data,
                    _ => return,
                };
                let tile = match data.tile {
                    Some(ref tile) => tile,
                    None => return,
                };
                match tile.state {
                    TileState::Loaded => match tile.texture {
                        Some(texture) => {
                            sampler.borrow_mut().insert_from_texture(tile.key, texture);
                        }
                        None => debug!("Loaded tile {} without texture", tile.key),
                    },
                    TileState::Unloaded => {
                        sampler.borrow_mut().remove(&tile.key);
                    }
                    TileState::Loading | TileState::Errored => {}
                }
            }),
        );
        self.listener = Some(listener);

        host.add_source(RasterSource {
            id: self.id.clone(),
            url: self.tile_json_url.clone(),
        });
        host.add_layer(
            RasterLayer {
                id: self.id.clone(),
                source: self.id.clone(),
                opacity: 0.0,
            },
            None,
        );
        info!("Elevation control '{}' attached", self.id);
    }

    fn detach(&mut self, host: &mut dyn HostMap) {
        self.sampler.borrow_mut().clear();
        if let Some(listener) = self.listener.take() {
            host.remove_layer(&self.id);
            host.remove_source(&self.id);
            host.off(listener);
            info!("Elevation control '{}' detached", self.id);
        }
    }

    fn is_attached(&self) -> bool {
        self.listener.is_some()
    }
}
