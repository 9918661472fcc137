use bevy::prelude::*;
use tempo_tween_core::Animate;

/// Sequences driving this entity. Destinations are looked up on the same entity.
#[derive(Component, Debug, Clone, Default)]
pub struct TweenAnimate(pub Animate);

impl From<Animate> for TweenAnimate {
    fn from(animate: Animate) -> Self {
        Self(animate)
    }
}

/// Generic scalar destination for `TargetProperty::Scalar` bindings
/// (opacity, intensity, material parameters read by other systems).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct TweenScalar(pub f32);
