// File: crates/scatter-core/src/animate.rs
// Summary: Per-mark opacity transitions as explicit repeating tasks on a
// millisecond clock; tasks reschedule forever until their mark is removed.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::scene::{ChartView, MarkId};

/// Duration of the initial fade-in to the resting opacity.
pub const FADE_IN_MS: u64 = 600;
/// Uniform range targets are drawn from once the loop begins.
pub const OPACITY_RANGE: (f32, f32) = (0.2, 1.0);
/// Uniform range loop durations are drawn from, in milliseconds.
pub const DURATION_RANGE_MS: (u64, u64) = (400, 2600);

fn lerp(a: f32, b: f32, t: f64) -> f32 {
    (a as f64 + (b as f64 - a as f64) * t) as f32
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
}

impl Transition {
    fn value_at(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        let t = (elapsed / self.duration_ms.max(1) as f64).clamp(0.0, 1.0);
        lerp(self.from, self.to, t)
    }

    fn done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}

/// Owns one opacity transition task per mark. Ticking advances every task
/// against the caller's clock; a finished task immediately schedules its
/// successor with a fresh random target and duration. The loop has no
/// terminal state: it stops only when `remove_mark` cancels the task.
pub struct Animator {
    rng: SmallRng,
    tasks: HashMap<MarkId, Transition>,
    completions: u64,
}

impl Animator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            tasks: HashMap::new(),
            completions: 0,
        }
    }

    /// Schedule the initial fade-in for every mark in the view.
    /// Marks start fully transparent and transition to their resting opacity.
    pub fn begin(&mut self, view: &mut ChartView, now_ms: u64) {
        for m in &mut view.marks {
            self.tasks.insert(
                m.id,
                Transition {
                    from: 0.0,
                    to: m.opacity,
                    start_ms: now_ms,
                    duration_ms: FADE_IN_MS,
                },
            );
            m.opacity = 0.0;
        }
    }

    /// Advance all tasks to `now_ms`, writing opacities back into the view.
    /// Iterates marks in view order so random draws are deterministic for a
    /// fixed seed and tick sequence.
    pub fn tick(&mut self, view: &mut ChartView, now_ms: u64) {
        for m in &mut view.marks {
            let Some(task) = self.tasks.get_mut(&m.id) else { continue };
            m.opacity = task.value_at(now_ms);
            if task.done(now_ms) {
                self.completions += 1;
                *task = Transition {
                    from: m.opacity,
                    to: self.rng.random_range(OPACITY_RANGE.0..=OPACITY_RANGE.1),
                    start_ms: now_ms,
                    duration_ms: self.rng.random_range(DURATION_RANGE_MS.0..=DURATION_RANGE_MS.1),
                };
            }
        }
    }

    /// Cancel the task bound to a removed mark so no handle leaks.
    pub fn remove_mark(&mut self, id: MarkId) {
        self.tasks.remove(&id);
    }

    pub fn is_scheduled(&self, id: MarkId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Number of finished transitions so far (each one scheduled a successor).
    pub fn completions(&self) -> u64 {
        self.completions
    }
}
