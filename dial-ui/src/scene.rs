use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{Circle, Line, Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::Drawable;
use heapless::Vec;
use log::warn;

/// One drawing call against the display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Fill {
        area: Rectangle,
        color: Rgb565,
    },
    Dot {
        center: Point,
        radius: u32,
        color: Rgb565,
    },
    Line {
        start: Point,
        end: Point,
        width: u32,
        color: Rgb565,
    },
}

impl Drawable for Mark {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        match *self {
            Mark::Fill { area, color } => target.fill_solid(&area, color),
            Mark::Dot {
                center,
                radius,
                color,
            } => Circle::with_center(center, radius * 2 + 1)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(target),
            Mark::Line {
                start,
                end,
                width,
                color,
            } => Line::new(start, end)
                .into_styled(PrimitiveStyle::with_stroke(color, width))
                .draw(target),
        }
    }
}

/// Marks in painter's order: later marks cover earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scene<const N: usize> {
    marks: Vec<Mark, N>,
}

impl<const N: usize> Scene<N> {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn push(&mut self, mark: Mark) {
        if self.marks.push(mark).is_err() {
            warn!("scene full at {} marks, dropping {:?}", N, mark);
        }
    }

    pub fn extend<I: IntoIterator<Item = Mark>>(&mut self, marks: I) {
        for mark in marks {
            self.push(mark);
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn dots(&self) -> impl Iterator<Item = (Point, u32, Rgb565)> + '_ {
        self.marks.iter().filter_map(|m| match *m {
            Mark::Dot {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, u32, Rgb565)> + '_ {
        self.marks.iter().filter_map(|m| match *m {
            Mark::Line {
                start,
                end,
                width,
                color,
            } => Some((start, end, width, color)),
            _ => None,
        })
    }
}

impl<const N: usize> Drawable for Scene<N> {
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
