//! Bevy adapter for `tempo-tween-core`.
//!
//! Entities carry [`TweenAnimate`]; the plugin ticks a shared [`TweenPlayback`]
//! each frame and writes into `Transform` / [`TweenScalar`] on the same entity.

use bevy::prelude::*;
use tempo_tween_core::{Config, Playback};

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{TweenAnimate, TweenScalar};
pub use resources::{PendingTransport, TweenPlayback, TweenTimeUnits};

/// Systems run in order: invalidate, transport, tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TweenSystems;

#[derive(Default)]
pub struct TweenPlugin {
    pub config: Config,
}

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TweenPlayback(Playback::new(self.config.clone())))
            .init_resource::<PendingTransport>()
            .init_resource::<TweenTimeUnits>()
            .add_systems(
                Update,
                (
                    systems::invalidate_total_time_system,
                    systems::apply_transport_system,
                    systems::tick_tweens_system,
                )
                    .chain()
                    .in_set(TweenSystems),
            );
    }
}
