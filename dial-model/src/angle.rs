use core::f32::consts::TAU;

use embedded_graphics::geometry::Point;
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

/// Position around the dial, clockwise from 12 o'clock, always in `[0, 1)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Fraction(f32);

impl Fraction {
    pub const ZERO: Fraction = Fraction(0.0);

    /// Wraps any finite value onto the circle.
    pub fn new(value: f32) -> Self {
        let wrapped = value.rem_euclid(1.0);
        // rem_euclid can land on the divisor itself for tiny negative inputs
        if wrapped >= 1.0 || wrapped.is_nan() {
            Fraction(0.0)
        } else {
            Fraction(wrapped)
        }
    }

    /// `part` out of `whole` equal steps.
    pub fn of(part: i32, whole: i32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self::new(part as f32 / whole as f32)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Trigonometry over full turns, so fixed-point or table-driven backends can
/// stand in for floating point.
pub trait Trig {
    /// Returns `(sin, cos)` of `turns` full revolutions.
    fn sin_cos(&self, turns: f32) -> (f32, f32);
}

impl<T: Trig + ?Sized> Trig for &T {
    fn sin_cos(&self, turns: f32) -> (f32, f32) {
        (**self).sin_cos(turns)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FloatTrig;

impl Trig for FloatTrig {
    fn sin_cos(&self, turns: f32) -> (f32, f32) {
        let angle = turns * TAU;
        (angle.sin(), angle.cos())
    }
}

pub fn point_on_circle<T: Trig + ?Sized>(
    trig: &T,
    center: Point,
    radius: i32,
    fraction: Fraction,
) -> Point {
    let (sin, cos) = trig.sin_cos(fraction.value());
    let r = radius as f32;
    Point::new(
        center.x + (sin * r).round() as i32,
        center.y - (cos * r).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const CENTER: Point = Point::new(90, 90);

    fn at(fraction: Fraction, radius: i32) -> Point {
        point_on_circle(&FloatTrig, CENTER, radius, fraction)
    }

    fn distance(p: Point) -> f32 {
        let d = p - CENTER;
        ((d.x * d.x + d.y * d.y) as f32).sqrt()
    }

    #[test]
    fn quarter_turns_land_on_axes() {
        assert_eq!(at(Fraction::of(0, 4), 88), Point::new(90, 2));
        assert_eq!(at(Fraction::of(1, 4), 88), Point::new(178, 90));
        assert_eq!(at(Fraction::of(2, 4), 88), Point::new(90, 178));
        assert_eq!(at(Fraction::of(3, 4), 88), Point::new(2, 90));
    }

    #[test]
    fn dial_calibration_rays() {
        // sin/cos of 30, 15 and 6 degrees scaled by 88
        assert_eq!(at(Fraction::of(1, 12), 88), Point::new(134, 14));
        assert_eq!(at(Fraction::of(1, 24), 88), Point::new(113, 5));
        assert_eq!(at(Fraction::of(1, 60), 88), Point::new(99, 2));
    }

    #[test]
    fn hour_ring_is_round() {
        let radius = 88 - 13;
        for i in 0..24 {
            let p = at(Fraction::of(i, 24), radius);
            assert!((distance(p) - radius as f32).abs() <= 1.0, "{i}: {p:?}");
        }
        let top = at(Fraction::of(0, 24), radius);
        assert_eq!(top.x, CENTER.x);
        assert!(top.y < CENTER.y);
    }

    #[test]
    fn fraction_wraps_onto_circle() {
        assert_eq!(Fraction::new(1.0), Fraction::ZERO);
        assert_eq!(Fraction::new(1.25).value(), 0.25);
        assert_eq!(Fraction::new(-0.25).value(), 0.75);
        assert!((Fraction::of(13, 12).value() - Fraction::of(1, 12).value()).abs() < 1e-6);
        assert_eq!(Fraction::of(5, 0), Fraction::ZERO);
    }

    /// The device build: micromath approximations instead of std floats.
    struct MicromathTrig;

    impl Trig for MicromathTrig {
        fn sin_cos(&self, turns: f32) -> (f32, f32) {
            let angle = turns * TAU;
            (micromath::F32Ext::sin(angle), micromath::F32Ext::cos(angle))
        }
    }

    #[test]
    fn micromath_rays_stay_within_a_pixel() {
        for radius in 20..200 {
            for steps in [12, 24, 60] {
                for i in 0..steps {
                    let fraction = Fraction::of(i, steps);
                    let exact = at(fraction, radius);
                    let approx = point_on_circle(&MicromathTrig, CENTER, radius, fraction);
                    let d = approx - exact;
                    assert!(d.x.abs() <= 1 && d.y.abs() <= 1, "r {radius}, {i}/{steps}");
                    assert!((distance(approx) - radius as f32).abs() <= 1.5);
                }
            }
        }
    }

    #[test]
    fn micromath_keeps_the_calibration_rays() {
        let approx = |f| point_on_circle(&MicromathTrig, CENTER, 88, f);
        assert_eq!(approx(Fraction::of(0, 12)), Point::new(90, 2));
        assert_eq!(approx(Fraction::of(1, 12)), Point::new(134, 14));
        assert_eq!(approx(Fraction::of(1, 24)), Point::new(113, 5));
        assert_eq!(approx(Fraction::of(1, 60)), Point::new(99, 2));
    }

    #[test]
    fn micromath_rounds_like_std() {
        for x in [17.6f32, -83.6, 44.000_005, 0.49, -0.49, 87.51, -87.51] {
            assert_eq!(micromath::F32Ext::round(x), x.round(), "{x}");
        }
    }

    proptest! {
        #[test]
        fn points_stay_on_their_ring(step in 0i32..1440, radius in 20i32..200) {
            let p = at(Fraction::of(step, 1440), radius);
            prop_assert!((distance(p) - radius as f32).abs() <= 1.0);
        }

        #[test]
        fn fractions_are_normalised(value in -1.0e6f32..1.0e6) {
            let f = Fraction::new(value).value();
            prop_assert!((0.0..1.0).contains(&f));
        }
    }
}
