#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod angle;
mod arc;
mod geometry;
mod state;
mod sync;

pub use angle::{point_on_circle, FloatTrig, Fraction, Trig};
pub use arc::{SolarWindow, ARC_MARKERS, DAY_MINUTES};
pub use geometry::{along, FaceGeometry, Ring};
pub use state::{ClockTime, FaceState, Layer};
pub use sync::{SyncError, SyncKey, SyncUpdate, TransportError};
