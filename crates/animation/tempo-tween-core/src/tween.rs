//! Tweens, delays and the append-only sequence builder.

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::target::TweenTarget;

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration >= 0.0 {
        duration
    } else {
        log::warn!("tween duration {duration} is not a finite non-negative number; using 0");
        0.0
    }
}

/// One timed interpolation. A tween without a target is a delay.
///
/// `start_abs` is assigned when the tween is appended to a [`Sequence`] and is
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    ease: EasingFunction,
    duration: f32,
    target: Option<TweenTarget>,
    start_abs: f32,
}

impl Tween {
    pub fn new(ease: EasingFunction, duration: f32, target: TweenTarget) -> Self {
        Self {
            ease,
            duration: sanitize_duration(duration),
            target: Some(target),
            start_abs: 0.0,
        }
    }

    /// A tween that only occupies time.
    pub fn delay(duration: f32) -> Self {
        Self {
            ease: EasingFunction::default(),
            duration: sanitize_duration(duration),
            target: None,
            start_abs: 0.0,
        }
    }

    pub fn ease(&self) -> EasingFunction {
        self.ease
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn target(&self) -> Option<&TweenTarget> {
        self.target.as_ref()
    }

    pub fn is_delay(&self) -> bool {
        self.target.is_none()
    }

    /// Absolute start time within the owning sequence.
    pub fn start_abs(&self) -> f32 {
        self.start_abs
    }

    pub fn end_abs(&self) -> f32 {
        self.start_abs + self.duration
    }

    /// Inclusive window test used by play and plain seeks.
    #[inline]
    pub fn contains(&self, time: f32) -> bool {
        self.start_abs <= time && time <= self.end_abs()
    }

    /// Fully elapsed at `time`. Used by the updating seek.
    #[inline]
    pub fn elapsed_by(&self, time: f32) -> bool {
        self.start_abs <= time && self.end_abs() <= time
    }

    /// Linear progress through the window. Zero-length tweens report 1.0.
    pub fn ratio_at(&self, time: f32) -> f32 {
        if self.duration > 0.0 {
            (time - self.start_abs) / self.duration
        } else {
            1.0
        }
    }

    /// Eased progress at `time`.
    pub fn eased_ratio_at(&self, time: f32) -> f32 {
        self.ease.ease(self.ratio_at(time))
    }

    /// Start a sequence with `self`, followed by `next`.
    pub fn then(self, next: Tween) -> Sequence {
        Sequence::new().then(self).then(next)
    }

    /// Start a sequence with `self`, followed by a delay.
    pub fn then_delay(self, duration: f32) -> Sequence {
        Sequence::new().then(self).then_delay(duration)
    }
}

/// Ordered, non-overlapping chain of tweens.
///
/// Invariant: `tweens[0].start_abs == 0` and each later tween starts where the
/// previous one ends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SequenceDef", into = "SequenceDef")]
pub struct Sequence {
    tweens: Vec<Tween>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tween`, stamping its absolute start.
    pub fn then(mut self, tween: Tween) -> Self {
        self.push(tween);
        self
    }

    pub fn then_delay(self, duration: f32) -> Self {
        self.then(Tween::delay(duration))
    }

    /// In-place append for callers that build sequences in loops.
    pub fn push(&mut self, mut tween: Tween) {
        tween.start_abs = self.end_time();
        self.tweens.push(tween);
    }

    /// End of the last element, or 0 when empty.
    pub fn end_time(&self) -> f32 {
        self.tweens.last().map(Tween::end_abs).unwrap_or(0.0)
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tween> {
        self.tweens.iter()
    }

    /// First bound tween whose window contains `time`.
    pub fn active_at(&self, time: f32) -> Option<&Tween> {
        self.tweens
            .iter()
            .find(|tw| tw.target.is_some() && tw.contains(time))
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Tween;
    type IntoIter = std::slice::Iter<'a, Tween>;

    fn into_iter(self) -> Self::IntoIter {
        self.tweens.iter()
    }
}

impl FromIterator<Tween> for Sequence {
    fn from_iter<I: IntoIterator<Item = Tween>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        for tw in iter {
            seq.push(tw);
        }
        seq
    }
}

/// Sequences attached to one animated entity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Animate {
    #[serde(default)]
    pub sequences: Vec<Sequence>,
}

impl Animate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence(mut self, sequence: Sequence) -> Self {
        self.sequences.push(sequence);
        self
    }

    /// Latest end time over all sequences.
    pub fn end_time(&self) -> f32 {
        self.sequences
            .iter()
            .flat_map(Sequence::iter)
            .map(Tween::end_abs)
            .fold(0.0, f32::max)
    }
}

impl From<Sequence> for Animate {
    fn from(sequence: Sequence) -> Self {
        Self {
            sequences: vec![sequence],
        }
    }
}

/// Serialized tween shape. `start_abs` is derived and never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TweenDef {
    #[serde(default)]
    ease: EasingFunction,
    duration: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<TweenTarget>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SequenceDef {
    #[serde(default)]
    tweens: Vec<TweenDef>,
}

impl From<SequenceDef> for Sequence {
    fn from(def: SequenceDef) -> Self {
        def.tweens
            .into_iter()
            .map(|td| match td.target {
                Some(target) => Tween::new(td.ease, td.duration, target),
                None => Tween::delay(td.duration),
            })
            .collect()
    }
}

impl From<Sequence> for SequenceDef {
    fn from(seq: Sequence) -> Self {
        SequenceDef {
            tweens: seq
                .tweens
                .into_iter()
                .map(|tw| TweenDef {
                    ease: tw.ease,
                    duration: tw.duration,
                    target: tw.target,
                })
                .collect(),
        }
    }
}
