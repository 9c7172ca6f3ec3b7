//! Filled circle with an animated X glyph.
//!
//! The X is two capsule strokes rotated ±45°. On appearance each stroke
//! slides in from opposite sides with an ease-in, the second stroke starting
//! half an animation length after the first.

use glint_animation::{lerp, Easing, Timeline};
use glint_ui_graphics::Color;
use web_time::{Duration, Instant};

const LINE_WIDTH_RATIO: f32 = 0.6;
const LINE_THICKNESS_RATIO: f32 = 0.095;
const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Per-frame stroke geometry, relative to the circle's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeGeometry {
    pub length: f32,
    pub thickness: f32,
    /// Horizontal offsets of the two capsules (rotated +45° and -45°).
    pub left_offset: f32,
    pub right_offset: f32,
}

/// Animated X-in-a-circle glyph controller.
#[derive(Clone, Debug)]
pub struct XCircleFill {
    circle_fill: Color,
    x_color: Color,
    animated: bool,
    left: Timeline,
    right: Timeline,
}

impl XCircleFill {
    pub fn new() -> Self {
        Self::with_style(Color::INDIGO, Color::WHITE, true, Duration::ZERO)
    }

    pub fn with_style(
        circle_fill: Color,
        x_color: Color,
        animated: bool,
        animation_delay: Duration,
    ) -> Self {
        Self {
            circle_fill,
            x_color,
            animated,
            left: Timeline::one_shot(ANIMATION_DURATION, animation_delay, Easing::EaseIn),
            right: Timeline::one_shot(
                ANIMATION_DURATION,
                animation_delay + ANIMATION_DURATION / 2,
                Easing::EaseIn,
            ),
        }
    }

    pub fn circle_fill(&self) -> Color {
        self.circle_fill
    }

    pub fn x_color(&self) -> Color {
        self.x_color
    }

    /// Stroke geometry for a circle of `diameter` after `elapsed` time.
    pub fn strokes_at(&self, diameter: f32, elapsed: Duration) -> StrokeGeometry {
        let reach = diameter * LINE_WIDTH_RATIO;
        let (left_offset, right_offset) = if self.animated {
            (
                lerp(-reach, 0.0, self.left.progress_at(elapsed)),
                lerp(reach, 0.0, self.right.progress_at(elapsed)),
            )
        } else {
            (0.0, 0.0)
        };

        StrokeGeometry {
            length: reach,
            thickness: diameter * LINE_THICKNESS_RATIO,
            left_offset,
            right_offset,
        }
    }

    /// [`strokes_at`](Self::strokes_at) against the wall clock.
    pub fn strokes(&self, diameter: f32, now: Instant) -> StrokeGeometry {
        self.strokes_at(diameter, self.left.elapsed(now))
    }

    /// Whether the entrance animation has settled.
    pub fn is_settled_at(&self, elapsed: Duration) -> bool {
        !self.animated || self.right.is_finished_at(elapsed)
    }
}

impl Default for XCircleFill {
    fn default() -> Self {
        Self::new()
    }
}
