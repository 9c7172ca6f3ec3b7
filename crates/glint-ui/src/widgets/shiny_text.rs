//! Text with a periodic diagonal shine.
//!
//! Two text layers: the base layer in the foreground color, and a highlight
//! layer masked by a soft diagonal gradient whose offset sweeps across the
//! text. The sweep direction and the gradient diagonal both flip under
//! right-to-left layout.

use glint_animation::{lerp, Easing, Timeline};
use glint_ui_graphics::{Brush, Color, GradientStop, LayoutDirection, Point};
use web_time::{Duration, Instant};

const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1000);
const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

/// Everything the host needs to draw the highlight layer for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ShinyFrame {
    /// Horizontal offset of the mask gradient, in pixels.
    pub offset_x: f32,
    /// Mask brush in the unit space of the text bounds.
    pub mask: Brush,
}

/// Animated shiny text controller.
#[derive(Clone, Debug)]
pub struct ShinyText {
    text: String,
    foreground: Color,
    shimmer: Color,
    timeline: Timeline,
}

impl ShinyText {
    pub fn new(text: impl Into<String>, foreground: Color) -> Self {
        Self::with_timing(
            text,
            foreground,
            Color::WHITE.with_alpha(0.9),
            DEFAULT_ANIMATION_DURATION,
            DEFAULT_DELAY,
        )
    }

    pub fn with_timing(
        text: impl Into<String>,
        foreground: Color,
        shimmer: Color,
        animation_duration: Duration,
        delay: Duration,
    ) -> Self {
        Self {
            text: text.into(),
            foreground,
            shimmer,
            timeline: Timeline::repeating(animation_duration, delay, Easing::Linear),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Highlight mask for text of `text_width` after `elapsed` time.
    pub fn frame_at(
        &self,
        text_width: f32,
        direction: LayoutDirection,
        elapsed: Duration,
    ) -> ShinyFrame {
        let travel = text_width * direction.factor();
        let progress = self.timeline.progress_at(elapsed);

        let stops = vec![
            GradientStop::new(self.shimmer.cleared(), 0.25),
            GradientStop::new(self.shimmer, 0.5),
            GradientStop::new(self.shimmer.cleared(), 0.75),
        ];
        // LTR shines along the up-right diagonal; RTL mirrors it.
        let (start, end) = match direction {
            LayoutDirection::LeftToRight => (Point::new(0.0, 1.0), Point::new(1.0, 0.0)),
            LayoutDirection::RightToLeft => (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        };

        ShinyFrame {
            offset_x: lerp(-travel, travel, progress),
            mask: Brush::linear_gradient_stops(stops, start, end),
        }
    }

    /// [`frame_at`](Self::frame_at) against the wall clock.
    pub fn frame(&self, text_width: f32, direction: LayoutDirection, now: Instant) -> ShinyFrame {
        self.frame_at(text_width, direction, self.timeline.elapsed(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shiny() -> ShinyText {
        ShinyText::new("Created by Glint", Color::WHITE)
    }

    #[test]
    fn rests_off_screen_during_the_delay() {
        let frame = shiny().frame_at(200.0, LayoutDirection::LeftToRight, Duration::ZERO);
        assert_eq!(frame.offset_x, -200.0);
    }

    #[test]
    fn sweeps_forward_after_the_delay() {
        let half_way = DEFAULT_DELAY + DEFAULT_ANIMATION_DURATION / 2;
        let frame = shiny().frame_at(200.0, LayoutDirection::LeftToRight, half_way);
        assert!(frame.offset_x.abs() < 1.0);
    }

    #[test]
    fn direction_factor_flips_under_rtl() {
        let frame = shiny().frame_at(200.0, LayoutDirection::RightToLeft, Duration::ZERO);
        assert_eq!(frame.offset_x, 200.0);

        let Brush::LinearGradient { start, end, .. } = frame.mask else {
            panic!("expected gradient mask");
        };
        assert_eq!(start, Point::new(0.0, 0.0));
        assert_eq!(end, Point::new(1.0, 1.0));
    }

    #[test]
    fn mask_highlight_is_centered() {
        let frame = shiny().frame_at(100.0, LayoutDirection::LeftToRight, Duration::ZERO);
        let Brush::LinearGradient { stops, .. } = frame.mask else {
            panic!("expected gradient mask");
        };
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[1].location, 0.5);
        assert_eq!(stops[0].color.alpha(), 0.0);
        assert_eq!(stops[2].color.alpha(), 0.0);
    }
}
