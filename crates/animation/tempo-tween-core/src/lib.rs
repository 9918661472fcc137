//! Tempo tween core (engine-agnostic).
//!
//! Composes easing-driven tweens into sequences and drives them from a shared
//! playback clock. Hosts supply entity storage through [`ComponentLookup`] and
//! call [`Playback::tick`] once per frame.

pub mod config;
pub mod easing;
pub mod error;
pub mod outputs;
pub mod playback;
pub mod stored;
pub mod target;
pub mod tween;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use easing::EasingFunction;
pub use error::TweenError;
pub use outputs::{Outputs, TweenEvent};
pub use playback::{compute_total_time, Playback, PlaybackCommand, PlaybackMode, PlaybackState};
pub use stored::{animate_to_json, parse_animate_json};
pub use target::{Animatable, Axis, ComponentLookup, ComponentTag, TargetProperty, TweenTarget};
pub use tween::{Animate, Sequence, Tween};
