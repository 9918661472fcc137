use bevy::log::{debug, warn};
use bevy::prelude::*;
use tempo_tween_core::{Animatable, ComponentLookup, ComponentTag, TargetProperty, TweenEvent};

use crate::components::{TweenAnimate, TweenScalar};
use crate::resources::{PendingTransport, TweenPlayback, TweenTimeUnits};

/// Destination component fetched for one `lerp` write.
pub enum TweenDestination<'a> {
    Transform(Mut<'a, Transform>),
    Scalar(Mut<'a, TweenScalar>),
}

impl Animatable for TweenDestination<'_> {
    fn apply(&mut self, property: TargetProperty, value: f32) {
        match (self, property) {
            (TweenDestination::Transform(tf), TargetProperty::Translation(axis)) => {
                tf.translation[axis.index()] = value;
            }
            (TweenDestination::Transform(tf), TargetProperty::Scale(axis)) => {
                tf.scale[axis.index()] = value;
            }
            (TweenDestination::Transform(tf), TargetProperty::Rotation(axis)) => {
                let (x, y, z) = tf.rotation.to_euler(EulerRot::XYZ);
                let mut euler = [x, y, z];
                euler[axis.index()] = value;
                tf.rotation = Quat::from_euler(EulerRot::XYZ, euler[0], euler[1], euler[2]);
            }
            (TweenDestination::Scalar(s), TargetProperty::Scalar) => {
                s.0 = value;
            }
            // Property lives on a different component.
            _ => {}
        }
    }
}

/// Component lookup backed by the tick system's queries. Each query keeps its
/// own world/state lifetimes.
pub struct EcsLookup<'a, 'b, T, S> {
    pub transforms: &'a mut T,
    pub scalars: &'b mut S,
}

impl<'a, 'b, 'tw, 'ts, 'sw, 'ss> ComponentLookup<Entity>
    for EcsLookup<
        'a,
        'b,
        Query<'tw, 'ts, &'static mut Transform>,
        Query<'sw, 'ss, &'static mut TweenScalar>,
    >
{
    type Target<'x>
        = TweenDestination<'x>
    where
        Self: 'x;

    fn lookup(&mut self, entity: Entity, component: ComponentTag) -> Option<TweenDestination<'_>> {
        match component {
            ComponentTag::Transform => self
                .transforms
                .get_mut(entity)
                .ok()
                .map(TweenDestination::Transform),
            ComponentTag::Scalar => self
                .scalars
                .get_mut(entity)
                .ok()
                .map(TweenDestination::Scalar),
        }
    }
}

/// Flag total time for recomputation whenever animated entities change.
pub fn invalidate_total_time_system(
    changed: Query<(), Changed<TweenAnimate>>,
    mut removed: RemovedComponents<TweenAnimate>,
    mut playback: ResMut<TweenPlayback>,
) {
    let removed_any = removed.read().count() > 0;
    if removed_any || !changed.is_empty() {
        playback.0.invalidate();
    }
}

/// Drain queued UI commands into the controller.
pub fn apply_transport_system(
    mut pending: ResMut<PendingTransport>,
    mut playback: ResMut<TweenPlayback>,
) {
    for cmd in pending.commands.drain(..) {
        if let Err(err) = playback.0.apply(cmd) {
            warn!("rejected transport command {cmd:?}: {err}");
        }
    }
}

/// Per-frame tick: feed `Time` delta into the clock and write tweened values.
pub fn tick_tweens_system(
    time: Res<Time>,
    units: Res<TweenTimeUnits>,
    mut playback: ResMut<TweenPlayback>,
    animated: Query<(Entity, &TweenAnimate)>,
    mut transforms: Query<&'static mut Transform>,
    mut scalars: Query<&'static mut TweenScalar>,
) {
    let pb = &mut playback.0;
    pb.set_dt(time.delta_seconds() * units.0);

    let mut lookup = EcsLookup {
        transforms: &mut transforms,
        scalars: &mut scalars,
    };
    let outputs = pb.tick(animated.iter().map(|(e, a)| (e, &a.0)), &mut lookup);
    for ev in &outputs.events {
        if let TweenEvent::ModeChanged { from, to } = ev {
            debug!("tween playback {from:?} -> {to:?}");
        }
    }
}
