use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Drawable;

use crate::scene::Mark;

/// Two concentric filled circles, outer first.
pub struct Hub {
    marks: [Mark; 2],
}

impl Hub {
    pub fn new(center: Point, radii: (u32, u32), outer: Rgb565, inner: Rgb565) -> Self {
        Self {
            marks: [
                Mark::Dot {
                    center,
                    radius: radii.0,
                    color: outer,
                },
                Mark::Dot {
                    center,
                    radius: radii.1,
                    color: inner,
                },
            ],
        }
    }

    pub fn marks(&self) -> [Mark; 2] {
        self.marks
    }
}

impl Drawable for Hub {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.marks[0].draw(target)?;
        self.marks[1].draw(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn inner_circle_covers_the_outer_one() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);

        let center = Point::new(10, 10);
        Hub::new(center, (4, 2), Rgb565::WHITE, Rgb565::RED)
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.get_pixel(center), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(10, 7)), Some(Rgb565::WHITE));
        assert_eq!(display.get_pixel(Point::new(10, 0)), None);
    }
}
