//! Target bindings and the lookup seam adapters implement.
//!
//! A [`TweenTarget`] carries a `(start, end)` range and the property it writes.
//! The property decides which component the controller must fetch from the
//! entity ([`ComponentTag`]); the host answers through [`ComponentLookup`].

use serde::{Deserialize, Serialize};

/// Vector component addressed by a property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Destination component kind a binding needs from the entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentTag {
    Transform,
    Scalar,
}

/// Field written by a binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetProperty {
    Translation(Axis),
    Scale(Axis),
    /// Euler angle in radians, XYZ order.
    Rotation(Axis),
    Scalar,
}

impl TargetProperty {
    /// Component that owns this property.
    pub fn component(self) -> ComponentTag {
        match self {
            TargetProperty::Translation(_)
            | TargetProperty::Scale(_)
            | TargetProperty::Rotation(_) => ComponentTag::Transform,
            TargetProperty::Scalar => ComponentTag::Scalar,
        }
    }
}

/// Implemented by host components that can receive interpolated values.
pub trait Animatable {
    fn apply(&mut self, property: TargetProperty, value: f32);
}

/// Component lookup over the host's entity storage.
///
/// Returning `None` means the entity lacks the requested component; the
/// controller reports it and skips the tween.
pub trait ComponentLookup<E> {
    type Target<'a>: Animatable
    where
        Self: 'a;

    fn lookup(&mut self, entity: E, component: ComponentTag) -> Option<Self::Target<'_>>;
}

/// Numeric range bound to one destination property.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenTarget {
    pub property: TargetProperty,
    pub start: f32,
    pub end: f32,
}

impl TweenTarget {
    pub fn new(property: TargetProperty, start: f32, end: f32) -> Self {
        Self {
            property,
            start,
            end,
        }
    }

    pub fn translation(axis: Axis, start: f32, end: f32) -> Self {
        Self::new(TargetProperty::Translation(axis), start, end)
    }

    pub fn scale(axis: Axis, start: f32, end: f32) -> Self {
        Self::new(TargetProperty::Scale(axis), start, end)
    }

    pub fn rotation(axis: Axis, start: f32, end: f32) -> Self {
        Self::new(TargetProperty::Rotation(axis), start, end)
    }

    pub fn scalar(start: f32, end: f32) -> Self {
        Self::new(TargetProperty::Scalar, start, end)
    }

    /// Tag used to fetch the destination component.
    #[inline]
    pub fn component(&self) -> ComponentTag {
        self.property.component()
    }

    #[inline]
    pub fn value_at(&self, ratio: f32) -> f32 {
        self.start + (self.end - self.start) * ratio
    }

    /// Interpolate at `ratio`, write the result into `destination` and return it.
    pub fn lerp<D: Animatable + ?Sized>(&self, destination: &mut D, ratio: f32) -> f32 {
        let value = self.value_at(ratio);
        destination.apply(self.property, value);
        value
    }
}
