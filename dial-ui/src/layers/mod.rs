mod hands;
mod panel;

use dial_model::{FaceGeometry, FaceState, Layer, Trig};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use enum_dispatch::enum_dispatch;
pub use hands::{HandLayer, HAND_MARKS};
pub use panel::{PanelLayer, PANEL_MARKS};

/// What a layer reads while rendering one frame.
pub struct Frame<'a> {
    pub state: &'a FaceState,
    pub geometry: &'a FaceGeometry,
    pub trig: &'a dyn Trig,
}

#[enum_dispatch(Layers)]
pub trait LayerRenderer {
    fn layer(&self) -> Layer;

    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        frame: &Frame<'_>,
        display: &mut D,
    ) -> Result<(), D::Error>;
}

/// Layer stack, bottom first.
#[enum_dispatch]
pub enum Layers {
    Panel(PanelLayer),
    Hand(HandLayer),
}
