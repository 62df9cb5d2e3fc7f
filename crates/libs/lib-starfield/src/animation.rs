//! # Animation Scheduler
//!
//! Each star twinkles on its own loop: a one-off start delay, then
//! brighten to full opacity, dim to the layer's floor, and repeat forever.
//! Per-star durations and delays come from the star's descriptor, so
//! neighbouring stars never pulse in lockstep.
//!
//! ```text
//!  mount ──► Delayed ──(delay_ms)──► Brightening ──(bright_ms)──► Dimming
//!                                        ▲                          │
//!                                        └────────(dim_ms)──────────┘
//! ```
//!
//! The state machine is driven by the host's frame clock through
//! [`AnimationHandle::tick`]. Phase boundaries are computed from the phase
//! start time rather than from when ticks happen to arrive, so irregular frame
//! pacing never drifts the rhythm. A handle owns all of its star's running
//! state; once cancelled there is nothing left for a late tick to act on.

use std::f32::consts::PI;

use crate::star::StarDescriptor;

/// Shortest allowed phase duration.
pub const MIN_DURATION_MS: u64 = 1;

/// Sinusoidal ease-in-out on `[0, 1]`, exact at both ends.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (PI * t).cos()
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Durations of one star's loop, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinkleTiming {
    bright_ms: u64,
    dim_ms: u64,
    delay_ms: u64,
}

impl TwinkleTiming {
    /// Non-positive durations clamp to [`MIN_DURATION_MS`]; a negative delay clamps to zero.
    pub fn new(bright_ms: i64, dim_ms: i64, delay_ms: i64) -> Self {
        let duration = |ms: i64| (ms.max(0) as u64).max(MIN_DURATION_MS);
        Self {
            bright_ms: duration(bright_ms),
            dim_ms: duration(dim_ms),
            delay_ms: delay_ms.max(0) as u64,
        }
    }

    pub fn bright_ms(&self) -> u64 {
        self.bright_ms
    }

    pub fn dim_ms(&self) -> u64 {
        self.dim_ms
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// One full bright-then-dim loop.
    pub fn cycle_ms(&self) -> u64 {
        self.bright_ms + self.dim_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Delayed,
    Brightening,
    Dimming,
}

/// Live state of a running loop.
#[derive(Debug, Clone, Copy)]
struct Twinkle {
    phase: Phase,
    phase_start: u64,
    from: f32,
    opacity: f32,
}

impl Twinkle {
    fn enter(&mut self, phase: Phase, start: u64, from: f32) {
        self.phase = phase;
        self.phase_start = start;
        self.from = from;
        self.opacity = from;
    }

    fn advance(&mut self, now: u64, timing: &TwinkleTiming, floor: f32) {
        loop {
            let elapsed = now.saturating_sub(self.phase_start);
            match self.phase {
                Phase::Delayed => {
                    if now < self.phase_start {
                        return;
                    }
                    self.enter(Phase::Brightening, self.phase_start, self.opacity);
                }
                Phase::Brightening => {
                    if elapsed < timing.bright_ms {
                        let t = elapsed as f32 / timing.bright_ms as f32;
                        self.opacity = lerp(self.from, 1.0, ease_in_out(t));
                        return;
                    }
                    self.enter(Phase::Dimming, self.phase_start + timing.bright_ms, 1.0);
                }
                Phase::Dimming => {
                    if elapsed < timing.dim_ms {
                        let t = elapsed as f32 / timing.dim_ms as f32;
                        self.opacity = lerp(1.0, floor, ease_in_out(t));
                        return;
                    }
                    let next = self.phase_start + timing.dim_ms;
                    // Every loop after the first starts from the floor, so whole
                    // cycles behind `now` can be skipped without stepping them.
                    let cycle = timing.cycle_ms();
                    let skipped = now.saturating_sub(next) / cycle * cycle;
                    self.enter(Phase::Brightening, next + skipped, floor);
                }
            }
        }
    }
}

/// Cancellable twinkle loop owned by exactly one star.
#[derive(Debug)]
pub struct AnimationHandle {
    star: usize,
    timing: TwinkleTiming,
    dim_floor: f32,
    initial_opacity: f32,
    run: Option<Twinkle>,
}

impl AnimationHandle {
    pub fn new(star: usize, timing: TwinkleTiming, dim_floor: f32, initial_opacity: f32) -> Self {
        let dim_floor = dim_floor.clamp(0.0, 1.0);
        Self {
            star,
            timing,
            dim_floor,
            initial_opacity: initial_opacity.clamp(dim_floor, 1.0),
            run: None,
        }
    }

    pub fn for_star(star: &StarDescriptor) -> Self {
        Self::new(star.global_index(), star.timing(), star.dim_floor(), star.initial_opacity())
    }

    pub fn star(&self) -> usize {
        self.star
    }

    pub fn timing(&self) -> TwinkleTiming {
        self.timing
    }

    pub fn dim_floor(&self) -> f32 {
        self.dim_floor
    }

    /// Start (or restart) the loop at `now_ms`. A restart begins fresh from
    /// the initial opacity and waits out the start delay again.
    pub fn start(&mut self, now_ms: u64) {
        self.run = Some(Twinkle {
            phase: Phase::Delayed,
            phase_start: now_ms + self.timing.delay_ms,
            from: self.initial_opacity,
            opacity: self.initial_opacity,
        });
    }

    /// Stop the loop, dropping the pending delay and any in-flight easing.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            tracing::trace!(star = self.star, "Twinkle cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.run.map(|run| run.phase)
    }

    /// Current opacity; the resting value when not running.
    pub fn opacity(&self) -> f32 {
        self.run.map_or(self.initial_opacity, |run| run.opacity)
    }

    /// Advance to `now_ms`. Returns the new opacity when it changed and
    /// `None` when unchanged or not running.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let run = self.run.as_mut()?;
        let before = run.opacity;
        run.advance(now_ms, &self.timing, self.dim_floor);
        run.opacity = run.opacity.clamp(self.dim_floor, 1.0);
        (run.opacity.to_bits() != before.to_bits()).then_some(run.opacity)
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
