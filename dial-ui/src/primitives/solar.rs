use dial_model::along;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Drawable;

use crate::config as cfg;
use crate::primitives::Hub;
use crate::scene::Mark;

/// A line through the center, long towards `tip` and short behind it, with
/// its own small hub.
pub struct SolarHand {
    line: Mark,
    hub: Hub,
}

impl SolarHand {
    pub fn new(center: Point, tip: Point, color: Rgb565) -> Self {
        Self {
            line: Mark::Line {
                start: tip,
                end: along(center, tip, -cfg::SOLAR_TAIL),
                width: cfg::SOLAR_HAND_WIDTH,
                color,
            },
            hub: Hub::new(
                center,
                (cfg::SOLAR_HUB_RADIUS, cfg::SOLAR_HUB_INNER_RADIUS),
                color,
                color,
            ),
        }
    }

    pub fn marks(&self) -> [Mark; 3] {
        let [outer, inner] = self.hub.marks();
        [self.line, outer, inner]
    }
}

impl Drawable for SolarHand {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.line.draw(target)?;
        self.hub.draw(target)
    }
}
