use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};

pub const COLOR_BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const COLOR_DAY: Rgb565 = Rgb565::CSS_ORANGE;
pub const COLOR_NIGHT: Rgb565 = Rgb565::BLUE;
pub const COLOR_HOUR_TICK: Rgb565 = Rgb565::CSS_PALE_GREEN;
pub const COLOR_FIVE_MINUTE_TICK: Rgb565 = Rgb565::GREEN;
pub const COLOR_MINUTE_TICK: Rgb565 = Rgb565::CSS_DIM_GRAY;
pub const COLOR_HAND: Rgb565 = Rgb565::WHITE;
pub const COLOR_HAND_ACCENT: Rgb565 = Rgb565::BLACK;
pub const COLOR_HUB: Rgb565 = Rgb565::WHITE;
pub const COLOR_HUB_INNER: Rgb565 = Rgb565::BLACK;
pub const COLOR_SOLAR: Rgb565 = Rgb565::CSS_ORANGE;

pub const ARC_DOT_RADIUS: u32 = 2;
pub const HOUR_TICK_RADIUS: u32 = 1;
pub const FIVE_MINUTE_TICK_RADIUS: u32 = 3;
pub const MINUTE_TICK_RADIUS: u32 = 2;

pub const HAND_STEM_WIDTH: u32 = 3;
pub const HAND_BLADE_WIDTH: u32 = 6;
pub const HAND_ACCENT_WIDTH: u32 = 2;
/// Stem end and blade end, as fractions of the radius.
pub const HOUR_HAND_SPAN: (f32, f32) = (0.2, 0.6);
pub const MINUTE_HAND_SPAN: (f32, f32) = (0.2, 0.95);

pub const HUB_RADIUS: u32 = 4;
pub const HUB_INNER_RADIUS: u32 = 2;

pub const SOLAR_HAND_WIDTH: u32 = 2;
pub const SOLAR_TAIL: f32 = 0.2;
pub const SOLAR_HUB_RADIUS: u32 = 3;
pub const SOLAR_HUB_INNER_RADIUS: u32 = 1;
