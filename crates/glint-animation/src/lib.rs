//! Animation timelines for Glint's fire-and-forget effects.
//!
//! Effects sample a [`Timeline`] with the current time each frame and derive
//! their geometry from the returned progress; nothing here schedules frames
//! or blocks. Time comes from [`web_time::Instant`] so the same code runs on
//! native and wasm hosts.

use web_time::{Duration, Instant};

/// Interpolation curve applied to timeline progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in: slow start, full-speed finish.
    EaseIn,
}

impl Easing {
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
        }
    }
}

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A delay-then-run animation clock.
///
/// The delay elapses once; a repeating timeline then loops its duration
/// forever (progress sawtooths 0→1), while a one-shot timeline clamps at 1.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    start: Instant,
    delay: Duration,
    duration: Duration,
    repeats: bool,
    easing: Easing,
}

impl Timeline {
    /// Repeat-forever timeline; `delay` applies before the first cycle only.
    pub fn repeating(duration: Duration, delay: Duration, easing: Easing) -> Self {
        Self {
            start: Instant::now(),
            delay,
            duration,
            repeats: true,
            easing,
        }
    }

    /// Runs once after `delay` and holds at full progress.
    pub fn one_shot(duration: Duration, delay: Duration, easing: Easing) -> Self {
        Self {
            start: Instant::now(),
            delay,
            duration,
            repeats: false,
            easing,
        }
    }

    /// Time elapsed since the timeline was created.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Eased progress at wall-clock time `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        self.progress_at(self.elapsed(now))
    }

    /// Eased progress after `elapsed` time since the timeline started.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return self.easing.transform(1.0);
        }

        let running = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        let phase = if self.repeats {
            running.fract()
        } else {
            running.min(1.0)
        };
        self.easing.transform(phase)
    }

    /// Whether a one-shot timeline has run to completion. Repeating
    /// timelines never finish.
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        !self.repeats && elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f32) -> Duration {
        Duration::from_secs_f32(value)
    }

    #[test]
    fn holds_at_zero_through_the_delay() {
        let timeline = Timeline::repeating(secs(1.0), secs(2.5), Easing::Linear);
        assert_eq!(timeline.progress_at(secs(0.0)), 0.0);
        assert_eq!(timeline.progress_at(secs(2.4)), 0.0);
        assert!(timeline.progress_at(secs(3.0)) > 0.4);
    }

    #[test]
    fn repeating_timeline_wraps() {
        let timeline = Timeline::repeating(secs(1.5), secs(0.0), Easing::Linear);
        let first = timeline.progress_at(secs(0.3));
        let wrapped = timeline.progress_at(secs(1.8));
        assert!((first - wrapped).abs() < 1e-4);
    }

    #[test]
    fn one_shot_clamps_and_finishes() {
        let timeline = Timeline::one_shot(secs(0.2), secs(0.1), Easing::Linear);
        assert_eq!(timeline.progress_at(secs(10.0)), 1.0);
        assert!(timeline.is_finished_at(secs(0.3)));
        assert!(!timeline.is_finished_at(secs(0.25)));
    }

    #[test]
    fn ease_in_lags_linear_mid_curve() {
        assert!(Easing::EaseIn.transform(0.5) < Easing::Linear.transform(0.5));
        assert_eq!(Easing::EaseIn.transform(1.0), 1.0);
        assert_eq!(Easing::EaseIn.transform(0.0), 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-1.4, 1.4, 0.0), -1.4);
        assert_eq!(lerp(-1.4, 1.4, 1.0), 1.4);
        assert_eq!(lerp(-1.4, 1.4, 0.5), 0.0);
    }
}
