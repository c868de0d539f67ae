use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};
use dial_model::{SyncKey, TransportError, DAY_MINUTES};
use log::{info, warn};
use sunrise::{Coordinates, SolarDay, SolarEvent};
use tokio::sync::mpsc::Sender;

/// Extra wait past a sunrise/sunset boundary before resending.
const BOUNDARY_MARGIN_SECS: u64 = 5;

#[derive(Debug)]
pub enum Inbox {
    Update { key: u32, value: i32 },
    Error(TransportError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SolarTimes {
    pub rise: i32,
    pub set: i32,
}

pub fn solar_times(latitude: f64, longitude: f64, date: NaiveDate) -> Option<SolarTimes> {
    let coord = Coordinates::new(latitude, longitude)?;
    let day = SolarDay::new(coord, date);
    Some(SolarTimes {
        rise: local_minutes(day.event_time(SolarEvent::Sunrise)),
        set: local_minutes(day.event_time(SolarEvent::Sunset)),
    })
}

fn local_minutes(time: DateTime<Utc>) -> i32 {
    let time = time.with_timezone(&Local);
    (time.hour() * 60 + time.minute()) as i32
}

/// The pair the dial should show at `now`, and the minute (possibly past
/// midnight) at which that choice changes. Before sunrise the night started
/// with yesterday's sunset; after sunset it ends with tomorrow's sunrise.
pub fn select(
    now: i32,
    yesterday: SolarTimes,
    today: SolarTimes,
    tomorrow: SolarTimes,
) -> (SolarTimes, i32) {
    if now < today.rise {
        (
            SolarTimes {
                rise: today.rise,
                set: yesterday.set,
            },
            today.rise,
        )
    } else if now < today.set {
        (today, today.set)
    } else {
        (
            SolarTimes {
                rise: tomorrow.rise,
                set: today.set,
            },
            DAY_MINUTES + tomorrow.rise,
        )
    }
}

pub async fn run(latitude: f64, longitude: f64, inbox: Sender<Inbox>) {
    loop {
        let now = Local::now();
        let date = now.date_naive();
        let days = (
            date.pred_opt()
                .and_then(|d| solar_times(latitude, longitude, d)),
            solar_times(latitude, longitude, date),
            date.succ_opt()
                .and_then(|d| solar_times(latitude, longitude, d)),
        );
        let (Some(yesterday), Some(today), Some(tomorrow)) = days else {
            warn!("no solar times for {}, {}", latitude, longitude);
            let _ = inbox.send(Inbox::Error(TransportError::NotConnected)).await;
            return;
        };

        let minutes = (now.hour() * 60 + now.minute()) as i32;
        let (times, boundary) = select(minutes, yesterday, today, tomorrow);
        info!(
            "sending sunrise {} sunset {}, next change at minute {}",
            times.rise, times.set, boundary
        );

        for (key, value) in [(SyncKey::Sunrise, times.rise), (SyncKey::Sunset, times.set)] {
            let update = Inbox::Update {
                key: key as u32,
                value,
            };
            if inbox.send(update).await.is_err() {
                return;
            }
        }

        let wait = (boundary - minutes).max(1) as u64 * 60 + BOUNDARY_MARGIN_SECS;
        tokio::time::sleep(Duration::from_secs(wait)).await;
    }
}
