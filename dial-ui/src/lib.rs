#![cfg_attr(not(any(test, feature = "std")), no_std)]

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

pub mod config;
mod layers;
mod primitives;
mod scene;
mod watchface;

pub use dial_model::Layer;
pub use layers::{Frame, HandLayer, LayerRenderer, Layers, PanelLayer, HAND_MARKS, PANEL_MARKS};
pub use primitives::{HandStroke, Hub, SolarHand};
pub use scene::{Mark, Scene};
pub use watchface::{DirtyLayers, Watchface};

pub trait HintRefresh {
    fn hint_refresh(&mut self);
}

pub trait AppDrawTarget<E>: DrawTarget<Color = Rgb565, Error = E> + HintRefresh {}
impl<E, D: DrawTarget<Color = Rgb565, Error = E> + HintRefresh> AppDrawTarget<E> for D {}
