mod hand;
mod hub;
mod solar;

pub use hand::HandStroke;
pub use hub::Hub;
pub use solar::SolarHand;
