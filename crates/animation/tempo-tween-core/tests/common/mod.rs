#![allow(dead_code)]
//! In-memory entity store used by the integration tests.

use std::collections::HashMap;

use tempo_tween_core::{Animatable, Animate, ComponentLookup, ComponentTag, TargetProperty};

pub fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3 {
    pub translation: [f32; 3],
    pub scale: [f32; 3],
    pub rotation: [f32; 3],
}

impl Default for Transform3 {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            scale: [1.0; 3],
            rotation: [0.0; 3],
        }
    }
}

impl Animatable for Transform3 {
    fn apply(&mut self, property: TargetProperty, value: f32) {
        match property {
            TargetProperty::Translation(axis) => self.translation[axis.index()] = value,
            TargetProperty::Scale(axis) => self.scale[axis.index()] = value,
            TargetProperty::Rotation(axis) => self.rotation[axis.index()] = value,
            TargetProperty::Scalar => {}
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scalar(pub f32);

impl Animatable for Scalar {
    fn apply(&mut self, property: TargetProperty, value: f32) {
        if property == TargetProperty::Scalar {
            self.0 = value;
        }
    }
}

/// One recorded destination write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Write {
    pub entity: u32,
    pub property: TargetProperty,
    pub value: f32,
}

#[derive(Default)]
pub struct MemoryWorld {
    pub animated: Vec<(u32, Animate)>,
    pub transforms: HashMap<u32, Transform3>,
    pub scalars: HashMap<u32, Scalar>,
    pub journal: Vec<Write>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_transform(&mut self, entity: u32, animate: Animate) {
        self.transforms.insert(entity, Transform3::default());
        self.animated.push((entity, animate));
    }

    pub fn translation(&self, entity: u32) -> [f32; 3] {
        self.transforms[&entity].translation
    }
}

pub struct Dest<'a> {
    entity: u32,
    inner: &'a mut dyn Animatable,
    journal: &'a mut Vec<Write>,
}

impl Animatable for Dest<'_> {
    fn apply(&mut self, property: TargetProperty, value: f32) {
        self.journal.push(Write {
            entity: self.entity,
            property,
            value,
        });
        self.inner.apply(property, value);
    }
}

/// Lookup half of the world, split off so `animated` can be borrowed alongside it.
pub struct Lookup<'w> {
    pub transforms: &'w mut HashMap<u32, Transform3>,
    pub scalars: &'w mut HashMap<u32, Scalar>,
    pub journal: &'w mut Vec<Write>,
}

impl<'w> ComponentLookup<u32> for Lookup<'w> {
    type Target<'a>
        = Dest<'a>
    where
        Self: 'a;

    fn lookup(&mut self, entity: u32, component: ComponentTag) -> Option<Dest<'_>> {
        let inner: &mut dyn Animatable = match component {
            ComponentTag::Transform => self.transforms.get_mut(&entity)?,
            ComponentTag::Scalar => self.scalars.get_mut(&entity)?,
        };
        Some(Dest {
            entity,
            inner,
            journal: &mut *self.journal,
        })
    }
}

impl MemoryWorld {
    /// Tick `playback` over every animated entity in insertion order.
    pub fn tick(&mut self, playback: &mut tempo_tween_core::Playback) -> tempo_tween_core::Outputs {
        let mut lookup = Lookup {
            transforms: &mut self.transforms,
            scalars: &mut self.scalars,
            journal: &mut self.journal,
        };
        playback
            .tick(self.animated.iter().map(|(e, a)| (*e, a)), &mut lookup)
            .clone()
    }
}
