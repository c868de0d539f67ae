use dial_model::{FaceGeometry, FaceState, FloatTrig, Layer, SyncUpdate, TransportError, Trig};
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::layers::{Frame, HandLayer, LayerRenderer, Layers, PanelLayer};
use crate::AppDrawTarget;

/// Layers waiting for a redraw. Marking a layer twice before the next frame
/// still yields a single redraw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtyLayers {
    panel: bool,
    hand: bool,
}

impl DirtyLayers {
    pub fn mark(&mut self, layer: Layer) {
        match layer {
            Layer::Panel => self.panel = true,
            Layer::Hand => self.hand = true,
        }
    }

    pub fn contains(&self, layer: Layer) -> bool {
        match layer {
            Layer::Panel => self.panel,
            Layer::Hand => self.hand,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.panel || self.hand)
    }

    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

/// Owns the face state and the bound surface, and turns tick and sync events
/// into redraws.
pub struct Watchface<T: Trig = FloatTrig> {
    state: FaceState,
    geometry: Option<FaceGeometry>,
    dirty: DirtyLayers,
    layers: [Layers; 2],
    trig: T,
}

impl Watchface<FloatTrig> {
    pub fn new() -> Self {
        Self::with_trig(FloatTrig)
    }
}

impl Default for Watchface<FloatTrig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Trig> Watchface<T> {
    pub fn with_trig(trig: T) -> Self {
        Self {
            state: FaceState::new(),
            geometry: None,
            dirty: DirtyLayers::default(),
            layers: [PanelLayer.into(), HandLayer.into()],
            trig,
        }
    }

    pub fn bind(&mut self, bounds: Rectangle) {
        let geometry = FaceGeometry::from_bounds(bounds);
        debug!(
            "bound to {:?}: center {:?}, radius {}",
            bounds,
            geometry.center(),
            geometry.radius()
        );
        self.geometry = Some(geometry);
        self.dirty.mark(Layer::Panel);
        self.dirty.mark(Layer::Hand);
    }

    pub fn unbind(&mut self) {
        self.geometry = None;
    }

    pub fn geometry(&self) -> Option<&FaceGeometry> {
        self.geometry.as_ref()
    }

    pub fn state(&self) -> &FaceState {
        &self.state
    }

    pub fn dirty(&self) -> DirtyLayers {
        self.dirty
    }

    pub fn mark_dirty(&mut self, layer: Layer) {
        self.dirty.mark(layer);
    }

    pub fn on_minute_tick(&mut self, hour: u8, minute: u8) {
        let layer = self.state.on_minute_tick(hour, minute);
        self.dirty.mark(layer);
    }

    pub fn on_sync_update(&mut self, update: SyncUpdate) {
        self.state.on_astronomical_update(update);
    }

    /// Raw inbox pair. Unknown keys are logged and dropped.
    pub fn on_sync_message(&mut self, key: u32, value: i32) {
        if let Err(err) = self.state.on_sync_message(key, value) {
            self.state.on_sync_error(err);
        }
    }

    pub fn on_sync_error(&mut self, err: TransportError) {
        self.state.on_sync_error(err.into());
    }

    /// Draws pending layers and returns whether a frame was produced.
    ///
    /// The hand layer has no backing store of its own, so any redraw starts
    /// from the panel.
    pub fn render<D: AppDrawTarget<E>, E>(&mut self, display: &mut D) -> Result<bool, E> {
        let Some(geometry) = self.geometry.as_ref() else {
            return Ok(false);
        };
        let dirty = self.dirty.take();
        if dirty.is_empty() {
            return Ok(false);
        }
        debug!("redraw {:?}", dirty);

        let frame = Frame {
            state: &self.state,
            geometry,
            trig: &self.trig,
        };
        for layer in self.layers.iter() {
            debug!("render {:?}", layer.layer());
            layer.render(&frame, display)?;
        }
        display.hint_refresh();
        Ok(true)
    }
}
