use log::trace;

use crate::angle::Fraction;

pub const DAY_MINUTES: i32 = 1440;
pub const ARC_MARKERS: usize = 12;

/// Sunrise and sunset as minutes since local midnight. Both anchors are
/// taken as delivered; values outside a day still land on the circle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SolarWindow {
    pub sunrise: i32,
    pub sunset: i32,
}

impl SolarWindow {
    pub fn new(sunrise: i32, sunset: i32) -> Self {
        Self { sunrise, sunset }
    }

    /// Minutes from sunrise forward to sunset, wrapping past midnight.
    pub fn day_length(&self) -> i32 {
        (self.sunset as i64 - self.sunrise as i64).rem_euclid(DAY_MINUTES as i64) as i32
    }

    /// `DAY_MINUTES - day_length()`, except when sunrise and sunset
    /// coincide: then the night span is zero too and the night markers stack
    /// on the anchor with the day markers instead of circling the dial.
    pub fn night_length(&self) -> i32 {
        match self.day_length() {
            0 => 0,
            day => DAY_MINUTES - day,
        }
    }

    pub fn day_markers(&self) -> [Fraction; ARC_MARKERS] {
        markers(self.sunrise, self.day_length())
    }

    pub fn night_markers(&self) -> [Fraction; ARC_MARKERS] {
        markers(self.sunset, self.night_length())
    }
}

fn markers(start: i32, span: i32) -> [Fraction; ARC_MARKERS] {
    core::array::from_fn(|i| {
        let minutes = start as f32 + i as f32 * span as f32 / ARC_MARKERS as f32;
        let fraction = Fraction::new(minutes / DAY_MINUTES as f32);
        trace!("arc marker {} at {}", i, fraction.value());
        fraction
    })
}
