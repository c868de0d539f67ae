use log::info;

use crate::angle::Fraction;
use crate::arc::{SolarWindow, DAY_MINUTES};

/// The two independently redrawn layers of the face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Background, day/night arc and tick marks.
    Panel,
    /// Hour and minute hands, hub and solar hand.
    Hand,
}

/// Local wall-clock time as delivered by the minute tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
}

impl ClockTime {
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    pub fn hour_fraction(&self) -> Fraction {
        Fraction::of(i32::from(self.hours % 12), 12)
    }

    pub fn minute_fraction(&self) -> Fraction {
        Fraction::of(i32::from(self.minutes), 60)
    }

    /// Position of this time within a full 24 hour turn.
    pub fn day_fraction(&self) -> Fraction {
        Fraction::of(self.minutes_since_midnight(), DAY_MINUTES)
    }

    pub fn minutes_since_midnight(&self) -> i32 {
        i32::from(self.hours) * 60 + i32::from(self.minutes)
    }
}

/// Everything the renderers read. Written only by the tick and sync adapters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceState {
    now: ClockTime,
    sunrise: Option<i32>,
    sunset: Option<i32>,
}

impl FaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> ClockTime {
        self.now
    }

    pub fn sunrise(&self) -> Option<i32> {
        self.sunrise
    }

    pub fn sunset(&self) -> Option<i32> {
        self.sunset
    }

    pub(crate) fn set_sunrise(&mut self, minutes: i32) {
        self.sunrise = Some(minutes);
    }

    pub(crate) fn set_sunset(&mut self, minutes: i32) {
        self.sunset = Some(minutes);
    }

    /// `None` until both anchors have been received.
    pub fn solar_window(&self) -> Option<SolarWindow> {
        Some(SolarWindow::new(self.sunrise?, self.sunset?))
    }

    /// Records the new wall-clock time. Only the hand layer depends on it.
    pub fn on_minute_tick(&mut self, hour: u8, minute: u8) -> Layer {
        self.now = ClockTime::new(hour, minute);
        info!(
            "tick {:02}:{:02}, sunrise {:?}, sunset {:?}",
            hour, minute, self.sunrise, self.sunset
        );
        Layer::Hand
    }
}
