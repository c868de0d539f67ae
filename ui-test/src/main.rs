mod companion;

use std::convert::Infallible;
use std::time::Duration;

use chrono::{Local, Timelike};
use clap::Parser;
use companion::Inbox;
use dial_model::{SyncKey, SyncUpdate};
use dial_ui::{HintRefresh, Layer, Watchface};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Pixel;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(about = "Desktop simulator for the solar dial")]
struct Args {
    #[arg(long, default_value_t = 180)]
    width: u32,
    #[arg(long, default_value_t = 180)]
    height: u32,
    #[arg(long, default_value_t = 2)]
    scale: u32,
    /// Companion position; without it the dial runs with no solar data.
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,
    /// Advance the clock one minute per frame.
    #[arg(long)]
    fast: bool,
}

struct Screen(SimulatorDisplay<Rgb565>);

impl OriginDimensions for Screen {
    fn size(&self) -> Size {
        self.0.size()
    }
}

impl DrawTarget for Screen {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }
}

impl HintRefresh for Screen {
    fn hint_refresh(&mut self) {}
}

/// Wall clock, optionally running fast. Reports each new minute once.
struct Clock {
    fast: bool,
    offset: chrono::Duration,
    last: Option<(u8, u8)>,
}

impl Clock {
    fn new(fast: bool) -> Self {
        Self {
            fast,
            offset: chrono::Duration::zero(),
            last: None,
        }
    }

    fn poll(&mut self) -> Option<(u8, u8)> {
        if self.fast {
            self.offset += chrono::Duration::minutes(1);
        }
        let now = Local::now() + self.offset;
        let current = (now.hour() as u8, now.minute() as u8);
        if self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        Some(current)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut display = Screen(SimulatorDisplay::new(Size::new(args.width, args.height)));
    let mut face = Watchface::new();
    face.bind(display.bounding_box());

    let (tx, mut inbox) = mpsc::channel(8);
    match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => {
            tokio::spawn(companion::run(latitude, longitude, tx));
        }
        _ => log::info!("no coordinates, press D for a sample day"),
    }

    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut w = Window::new("Solar dial", &output_settings);
    let mut clock = Clock::new(args.fast);

    'outer: loop {
        if let Some((hour, minute)) = clock.poll() {
            face.on_minute_tick(hour, minute);
        }

        let mut synced = false;
        while let Ok(message) = inbox.try_recv() {
            match message {
                Inbox::Update { key, value } => {
                    face.on_sync_message(key, value);
                    synced = true;
                }
                Inbox::Error(err) => face.on_sync_error(err),
            }
        }
        if synced {
            face.mark_dirty(Layer::Panel);
        }

        face.render(&mut display)?;
        w.update(&display.0);

        for e in w.events() {
            match e {
                SimulatorEvent::Quit => {
                    break 'outer;
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::P => face.mark_dirty(Layer::Panel),
                    Keycode::D => {
                        face.on_sync_update(SyncUpdate::new(SyncKey::Sunrise, 6 * 60));
                        face.on_sync_update(SyncUpdate::new(SyncKey::Sunset, 18 * 60));
                        face.mark_dirty(Layer::Panel);
                    }
                    _ => (),
                },
                _ => (),
            }
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    Ok(())
}
