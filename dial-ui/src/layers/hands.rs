use dial_model::{Layer, Ring};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Drawable;
use log::debug;

use super::{Frame, LayerRenderer};
use crate::config as cfg;
use crate::primitives::{HandStroke, Hub, SolarHand};
use crate::scene::Scene;

/// Two hand strokes, the hub, and the solar hand when the arc is known.
pub const HAND_MARKS: usize = 3 + 3 + 2 + 3;

#[derive(Copy, Clone, Debug, Default)]
pub struct HandLayer;

impl HandLayer {
    pub fn scene(&self, frame: &Frame<'_>) -> Scene<HAND_MARKS> {
        let geometry = frame.geometry;
        let center = geometry.center();
        let now = frame.state.now();

        let hour_tip = geometry.point(frame.trig, Ring::Hand, now.hour_fraction());
        let minute_tip = geometry.point(frame.trig, Ring::Hand, now.minute_fraction());

        let mut scene = Scene::new();
        scene.extend(
            HandStroke::new(
                center,
                hour_tip,
                cfg::HOUR_HAND_SPAN,
                cfg::COLOR_HAND,
                cfg::COLOR_HAND_ACCENT,
            )
            .marks(),
        );
        scene.extend(
            HandStroke::new(
                center,
                minute_tip,
                cfg::MINUTE_HAND_SPAN,
                cfg::COLOR_HAND,
                cfg::COLOR_HAND_ACCENT,
            )
            .marks(),
        );
        scene.extend(
            Hub::new(
                center,
                (cfg::HUB_RADIUS, cfg::HUB_INNER_RADIUS),
                cfg::COLOR_HUB,
                cfg::COLOR_HUB_INNER,
            )
            .marks(),
        );

        if frame.state.solar_window().is_some() {
            let solar_tip = geometry.point(frame.trig, Ring::Hand, now.day_fraction());
            scene.extend(SolarHand::new(center, solar_tip, cfg::COLOR_SOLAR).marks());
        }

        scene
    }
}

impl LayerRenderer for HandLayer {
    fn layer(&self) -> Layer {
        Layer::Hand
    }

    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        frame: &Frame<'_>,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let scene = self.scene(frame);
        debug!("hands: {} marks", scene.len());
        scene.draw(display)
    }
}
