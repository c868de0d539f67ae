use log::{debug, warn};

use crate::state::FaceState;

/// Inbox keys shared with the companion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum SyncKey {
    Sunrise = 0,
    Sunset = 1,
}

impl TryFrom<u32> for SyncKey {
    type Error = SyncError;

    fn try_from(key: u32) -> Result<Self, Self::Error> {
        match key {
            0 => Ok(SyncKey::Sunrise),
            1 => Ok(SyncKey::Sunset),
            other => Err(SyncError::UnknownKey(other)),
        }
    }
}

/// A single key/value pair from the companion. The value is minutes since
/// local midnight and is not range checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SyncUpdate {
    pub key: SyncKey,
    pub minutes: i32,
}

impl SyncUpdate {
    pub fn new(key: SyncKey, minutes: i32) -> Self {
        Self { key, minutes }
    }

    pub fn decode(key: u32, value: i32) -> Result<Self, SyncError> {
        Ok(Self::new(SyncKey::try_from(key)?, value))
    }
}

/// Delivery failures reported by the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("companion is not connected")]
    NotConnected,
    #[error("message dropped by the inbox")]
    Dropped,
    #[error("message does not fit the inbox buffer")]
    Overflow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("unknown sync key {0}")]
    UnknownKey(u32),
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl FaceState {
    pub fn on_astronomical_update(&mut self, update: SyncUpdate) {
        debug!("sync {:?} = {}", update.key, update.minutes);
        match update.key {
            SyncKey::Sunrise => self.set_sunrise(update.minutes),
            SyncKey::Sunset => self.set_sunset(update.minutes),
        }
    }

    /// Decodes a raw inbox pair and applies it. State is untouched on error.
    pub fn on_sync_message(&mut self, key: u32, value: i32) -> Result<(), SyncError> {
        let update = SyncUpdate::decode(key, value)?;
        self.on_astronomical_update(update);
        Ok(())
    }

    /// Failed deliveries and rejected messages are logged and otherwise
    /// ignored; the last good anchors stay in place.
    pub fn on_sync_error(&mut self, err: SyncError) {
        warn!("ignoring sync failure: {}", err);
    }
}
