//! Error types for the tween core.

use serde::{Deserialize, Serialize};

use crate::target::ComponentTag;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// The entity has no component of the kind the binding writes to.
    #[error("entity {entity} has no {component:?} component")]
    MissingComponent {
        entity: String,
        component: ComponentTag,
    },

    /// Playback clock must stay finite.
    #[error("invalid playback time: {time}")]
    InvalidTime { time: f32 },

    #[error("parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        TweenError::Parse {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TweenError>;
