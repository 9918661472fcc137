//! Per-tick outputs.
//!
//! Outputs are cleared at the start of every tick. Adapters read them to
//! surface diagnostics; the writes themselves already happened through
//! `lerp`.

use serde::{Deserialize, Serialize};

use crate::playback::PlaybackMode;
use crate::target::ComponentTag;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenEvent {
    ModeChanged {
        from: PlaybackMode,
        to: PlaybackMode,
    },
    TargetMissing {
        entity: String,
        component: ComponentTag,
    },
    /// Play was suppressed because the clock sits outside `[0, total]`.
    OutOfRange { time: f32, total: f32 },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Number of `lerp` writes performed this tick.
    pub applied: usize,
    pub events: Vec<TweenEvent>,
}

impl Outputs {
    pub fn clear(&mut self) {
        self.applied = 0;
        self.events.clear();
    }

    pub fn push_event(&mut self, event: TweenEvent) {
        self.events.push(event);
    }

    pub fn missing_targets(&self) -> impl Iterator<Item = &TweenEvent> {
        self.events
            .iter()
            .filter(|ev| matches!(ev, TweenEvent::TargetMissing { .. }))
    }
}
