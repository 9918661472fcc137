//! Playback controller: shared clock, transport state machine and the per-tick
//! walk over animated entities.
//!
//! Each tick runs exactly one transition function for the current mode. The
//! transient modes (`Reset`, `SeekWithUpdate`, `SeekWithoutUpdate`) always hand
//! back `Pause`; `Play` and `Pause` keep themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::outputs::{Outputs, TweenEvent};
use crate::target::{ComponentLookup, TweenTarget};
use crate::tween::Animate;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackMode {
    #[default]
    Play,
    Pause,
    Reset,
    SeekWithUpdate,
    SeekWithoutUpdate,
}

impl PlaybackMode {
    /// Modes that run for a single tick before settling in `Pause`.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            PlaybackMode::Reset | PlaybackMode::SeekWithUpdate | PlaybackMode::SeekWithoutUpdate
        )
    }
}

/// Transport commands issued by host UI.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Reset,
    /// Jump the clock to `time`. With `update`, tweens that fully elapsed by
    /// `time` are snapped to their end values; without it, the tween under the
    /// playhead in each sequence is sampled.
    Seek { time: f32, update: bool },
}

/// Clock and mode shared by every sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaybackState {
    last_time: Option<f32>,
    current_time: f32,
    mode: PlaybackMode,
    dt: f32,
    total_time: f32,
    needs_update: bool,
}

impl PlaybackState {
    fn new(cfg: &Config) -> Self {
        let current_time = if cfg.start_time.is_finite() {
            cfg.start_time
        } else {
            log::warn!("ignoring non-finite start time {}; using 0", cfg.start_time);
            0.0
        };
        Self {
            last_time: None,
            current_time,
            mode: cfg.initial_mode,
            dt: 0.0,
            total_time: 0.0,
            needs_update: true,
        }
    }

    pub fn last_time(&self) -> Option<f32> {
        self.last_time
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Cached end of the longest sequence. Stale while `needs_update` is set.
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    fn in_range(&self) -> bool {
        self.current_time >= 0.0 && self.current_time <= self.total_time
    }
}

/// Latest `start_abs + duration` over every tween of every sequence.
pub fn compute_total_time<'a, I>(animated: I) -> f32
where
    I: IntoIterator<Item = &'a Animate>,
{
    animated
        .into_iter()
        .map(Animate::end_time)
        .fold(0.0, f32::max)
}

/// Destination writes for one tick. Lookup failures are reported and skipped.
struct Pass<'p, L: ?Sized> {
    lookup: &'p mut L,
    outputs: &'p mut Outputs,
    log_missing: bool,
}

impl<L: ?Sized> Pass<'_, L> {
    fn write<E>(&mut self, entity: E, target: &TweenTarget, ratio: f32)
    where
        E: Copy + fmt::Debug,
        L: ComponentLookup<E>,
    {
        let component = target.component();
        match self.lookup.lookup(entity, component) {
            Some(mut dest) => {
                target.lerp(&mut dest, ratio);
                self.outputs.applied += 1;
            }
            None => {
                let entity = format!("{entity:?}");
                if self.log_missing {
                    let err = TweenError::MissingComponent {
                        entity: entity.clone(),
                        component,
                    };
                    log::warn!("skipping tween: {err}");
                }
                self.outputs
                    .push_event(TweenEvent::TargetMissing { entity, component });
            }
        }
    }
}

/// Advance the clock and sample the active tween of every sequence.
fn play<E, L>(
    state: &mut PlaybackState,
    animated: &[(E, &Animate)],
    pass: &mut Pass<'_, L>,
) -> PlaybackMode
where
    E: Copy + fmt::Debug,
    L: ComponentLookup<E> + ?Sized,
{
    if !state.in_range() {
        pass.outputs.push_event(TweenEvent::OutOfRange {
            time: state.current_time,
            total: state.total_time,
        });
        return PlaybackMode::Play;
    }
    sample_active(state.current_time, animated, pass);
    state.current_time += state.dt;
    PlaybackMode::Play
}

fn pause() -> PlaybackMode {
    PlaybackMode::Pause
}

/// Snap every bound tween back to its start, last-defined first.
fn reset<E, L>(animated: &[(E, &Animate)], pass: &mut Pass<'_, L>) -> PlaybackMode
where
    E: Copy + fmt::Debug,
    L: ComponentLookup<E> + ?Sized,
{
    for (entity, anim) in animated {
        for seq in &anim.sequences {
            for tw in seq.iter().rev() {
                if let Some(target) = tw.target() {
                    pass.write(*entity, target, 0.0);
                }
            }
        }
    }
    PlaybackMode::Pause
}

/// Snap tweens that have fully elapsed by the clock to their end values.
/// Tweens still in progress or in the future are left untouched.
fn seek_with_update<E, L>(
    state: &PlaybackState,
    animated: &[(E, &Animate)],
    pass: &mut Pass<'_, L>,
) -> PlaybackMode
where
    E: Copy + fmt::Debug,
    L: ComponentLookup<E> + ?Sized,
{
    let time = state.current_time;
    for (entity, anim) in animated {
        for seq in &anim.sequences {
            for tw in seq {
                if let Some(target) = tw.target() {
                    if tw.elapsed_by(time) {
                        pass.write(*entity, target, 1.0);
                    }
                }
            }
        }
    }
    PlaybackMode::Pause
}

fn seek_without_update<E, L>(
    state: &PlaybackState,
    animated: &[(E, &Animate)],
    pass: &mut Pass<'_, L>,
) -> PlaybackMode
where
    E: Copy + fmt::Debug,
    L: ComponentLookup<E> + ?Sized,
{
    sample_active(state.current_time, animated, pass);
    PlaybackMode::Pause
}

/// First matching tween per sequence wins.
fn sample_active<E, L>(time: f32, animated: &[(E, &Animate)], pass: &mut Pass<'_, L>)
where
    E: Copy + fmt::Debug,
    L: ComponentLookup<E> + ?Sized,
{
    for (entity, anim) in animated {
        for seq in &anim.sequences {
            if let Some(tw) = seq.active_at(time) {
                if let Some(target) = tw.target() {
                    pass.write(*entity, target, tw.eased_ratio_at(time));
                }
            }
        }
    }
}

/// Playback controller. The host owns entity storage and calls [`Playback::tick`]
/// once per frame.
#[derive(Debug)]
pub struct Playback {
    cfg: Config,
    state: PlaybackState,
    outputs: Outputs,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Playback {
    pub fn new(cfg: Config) -> Self {
        Self {
            state: PlaybackState::new(&cfg),
            cfg,
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn mode(&self) -> PlaybackMode {
        self.state.mode
    }

    pub fn current_time(&self) -> f32 {
        self.state.current_time
    }

    pub fn total_time(&self) -> f32 {
        self.state.total_time
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Force a `total_time` recomputation on the next tick. Call after
    /// sequences are added, removed or replaced.
    pub fn invalidate(&mut self) {
        self.state.needs_update = true;
    }

    /// Apply a transport command. Takes effect on the next tick.
    pub fn apply(&mut self, cmd: PlaybackCommand) -> Result<()> {
        match cmd {
            PlaybackCommand::Play => self.state.mode = PlaybackMode::Play,
            PlaybackCommand::Pause => self.state.mode = PlaybackMode::Pause,
            PlaybackCommand::Reset => self.state.mode = PlaybackMode::Reset,
            PlaybackCommand::Seek { time, update } => {
                if !time.is_finite() {
                    return Err(TweenError::InvalidTime { time });
                }
                self.state.current_time = time;
                self.state.mode = if update {
                    PlaybackMode::SeekWithUpdate
                } else {
                    PlaybackMode::SeekWithoutUpdate
                };
            }
        }
        Ok(())
    }

    /// Set the clock advance used by the next `Play` tick.
    pub fn set_dt(&mut self, dt: f32) {
        if dt.is_finite() {
            self.state.dt = dt;
        } else {
            log::warn!("ignoring non-finite dt {dt}");
            self.state.dt = 0.0;
        }
    }

    /// Derive `dt` from an absolute frame timestamp. The first call yields 0.
    pub fn set_frame_time(&mut self, now: f32) {
        if !now.is_finite() {
            log::warn!("ignoring non-finite frame time {now}");
            return;
        }
        let dt = self.state.last_time.map_or(0.0, |last| now - last);
        self.state.last_time = Some(now);
        self.set_dt(dt);
    }

    /// Run one tick over `animated`, writing through `lookup`.
    pub fn tick<'a, E, I, L>(&mut self, animated: I, lookup: &mut L) -> &Outputs
    where
        E: Copy + fmt::Debug,
        I: IntoIterator<Item = (E, &'a Animate)>,
        L: ComponentLookup<E> + ?Sized,
    {
        self.outputs.clear();
        let animated: Vec<(E, &Animate)> = animated.into_iter().collect();

        if self.state.needs_update {
            self.state.total_time = compute_total_time(animated.iter().map(|(_, a)| *a));
            self.state.needs_update = false;
            log::debug!("total time recomputed: {}", self.state.total_time);
        }

        let from = self.state.mode;
        let mut pass = Pass {
            lookup,
            outputs: &mut self.outputs,
            log_missing: self.cfg.log_missing_targets,
        };
        let next = match from {
            PlaybackMode::Play => play(&mut self.state, &animated, &mut pass),
            PlaybackMode::Pause => pause(),
            PlaybackMode::Reset => reset(&animated, &mut pass),
            PlaybackMode::SeekWithUpdate => seek_with_update(&self.state, &animated, &mut pass),
            PlaybackMode::SeekWithoutUpdate => {
                seek_without_update(&self.state, &animated, &mut pass)
            }
        };

        if next != from {
            log::debug!("playback mode {from:?} -> {next:?}");
            self.outputs
                .push_event(TweenEvent::ModeChanged { from, to: next });
        }
        self.state.mode = next;
        &self.outputs
    }
}
