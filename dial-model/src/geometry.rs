use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use crate::angle::{point_on_circle, Fraction, Trig};

/// Concentric rings of the dial, each pulled in from the outer radius so
/// neighbouring rings never touch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ring {
    Hand,
    DayNight,
    HourTick,
    MinuteTick,
}

impl Ring {
    pub const fn inset(self) -> i32 {
        match self {
            Ring::Hand => 0,
            Ring::DayNight => 4,
            Ring::HourTick => 13,
            Ring::MinuteTick => 23,
        }
    }
}

/// Center and radius of the dial, fixed once the surface is bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceGeometry {
    bounds: Rectangle,
    center: Point,
    radius: i32,
}

impl FaceGeometry {
    /// Keeps the outermost dots off the surface edge.
    pub const EDGE_INSET: i32 = 2;

    pub fn from_bounds(bounds: Rectangle) -> Self {
        let Size { width, height } = bounds.size;
        let center = bounds.top_left + Point::new(width as i32 / 2, height as i32 / 2);
        let radius = (width.min(height) as i32 / 2 - Self::EDGE_INSET).max(0);

        Self {
            bounds,
            center,
            radius,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn ring_radius(&self, ring: Ring) -> i32 {
        (self.radius - ring.inset()).max(0)
    }

    pub fn point<T: Trig + ?Sized>(&self, trig: &T, ring: Ring, fraction: Fraction) -> Point {
        point_on_circle(trig, self.center, self.ring_radius(ring), fraction)
    }
}

/// The point `scale` of the way from `origin` towards `tip`. Negative scales
/// land on the far side of `origin`.
pub fn along(origin: Point, tip: Point, scale: f32) -> Point {
    let d = tip - origin;
    origin
        + Point::new(
            (d.x as f32 * scale).round() as i32,
            (d.y as f32 * scale).round() as i32,
        )
}
