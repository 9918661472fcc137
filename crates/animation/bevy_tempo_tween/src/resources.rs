use bevy::prelude::*;
use tempo_tween_core::{Playback, PlaybackCommand};

/// Shared playback controller. UI reads `current_time()`/`total_time()` from here.
#[derive(Resource, Debug, Default)]
pub struct TweenPlayback(pub Playback);

/// Transport commands queued by UI, drained once per frame before ticking.
#[derive(Resource, Debug, Default)]
pub struct PendingTransport {
    pub commands: Vec<PlaybackCommand>,
}

impl PendingTransport {
    pub fn push(&mut self, cmd: PlaybackCommand) {
        self.commands.push(cmd);
    }
}

/// Host time units per second of `Time` delta. Defaults to milliseconds.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TweenTimeUnits(pub f32);

impl Default for TweenTimeUnits {
    fn default() -> Self {
        Self(1000.0)
    }
}
