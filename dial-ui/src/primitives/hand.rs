use dial_model::along;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Drawable;

use crate::config as cfg;
use crate::scene::Mark;

/// A thin stem from the center, then a wide blade with a dark accent
/// running down its middle.
pub struct HandStroke {
    marks: [Mark; 3],
}

impl HandStroke {
    /// `span` holds the stem and blade ends as fractions of `center..tip`.
    pub fn new(center: Point, tip: Point, span: (f32, f32), color: Rgb565, accent: Rgb565) -> Self {
        let (stem, blade) = span;
        let stem_end = along(center, tip, stem);
        let blade_end = along(center, tip, blade);

        Self {
            marks: [
                Mark::Line {
                    start: center,
                    end: stem_end,
                    width: cfg::HAND_STEM_WIDTH,
                    color,
                },
                Mark::Line {
                    start: stem_end,
                    end: blade_end,
                    width: cfg::HAND_BLADE_WIDTH,
                    color,
                },
                Mark::Line {
                    start: stem_end,
                    end: blade_end,
                    width: cfg::HAND_ACCENT_WIDTH,
                    color: accent,
                },
            ],
        }
    }

    pub fn marks(&self) -> [Mark; 3] {
        self.marks
    }
}

impl Drawable for HandStroke {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        for mark in self.marks.iter() {
            mark.draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn stem_then_blade_then_accent() {
        let center = Point::new(50, 50);
        let tip = Point::new(50, 0);
        let marks = HandStroke::new(center, tip, (0.2, 0.6), Rgb565::WHITE, Rgb565::BLACK).marks();

        assert_eq!(
            marks[0],
            Mark::Line {
                start: center,
                end: Point::new(50, 40),
                width: 3,
                color: Rgb565::WHITE,
            }
        );
        assert_eq!(
            marks[1],
            Mark::Line {
                start: Point::new(50, 40),
                end: Point::new(50, 20),
                width: 6,
                color: Rgb565::WHITE,
            }
        );
        assert_eq!(
            marks[2],
            Mark::Line {
                start: Point::new(50, 40),
                end: Point::new(50, 20),
                width: 2,
                color: Rgb565::BLACK,
            }
        );
    }
}
