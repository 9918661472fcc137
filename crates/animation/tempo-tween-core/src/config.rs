//! Playback configuration.

use serde::{Deserialize, Serialize};

use crate::playback::PlaybackMode;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode the controller starts in.
    pub initial_mode: PlaybackMode,
    /// Initial value of the playback clock.
    pub start_time: f32,
    /// Emit a `log::warn!` for every failed destination lookup.
    pub log_missing_targets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_mode: PlaybackMode::Play,
            start_time: 0.0,
            log_missing_targets: true,
        }
    }
}
