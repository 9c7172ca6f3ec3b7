//! Shimmering loading placeholder.
//!
//! A dim rounded surface with a translucent highlight band sweeping across
//! it. The band is 0.7x the surface width and travels from 1.4 widths left
//! of the surface to 1.4 widths right of it, so each cycle starts and ends
//! fully off-screen.

use glint_animation::{lerp, Easing, Timeline};
use glint_ui_graphics::{Brush, Color, DrawPrimitive, Point, Rect, Size};
use web_time::{Duration, Instant};

const SWEEP_DURATION: Duration = Duration::from_millis(1500);
const START_DELAY: Duration = Duration::from_millis(100);
const BAND_WIDTH_RATIO: f32 = 0.7;
const TRAVEL_RATIO: f32 = 1.4;

/// Placeholder surface with a sweeping highlight.
#[derive(Clone, Debug)]
pub struct Shimmer {
    corner_radius: f32,
    foreground: Color,
    shimmer: Color,
    timeline: Timeline,
}

impl Shimmer {
    /// Placeholder with the default dim surface and white highlight.
    pub fn new(corner_radius: f32) -> Self {
        Self::with_colors(
            corner_radius,
            Color::SECONDARY.with_alpha(0.2),
            Color::WHITE.with_alpha(0.5),
        )
    }

    pub fn with_colors(corner_radius: f32, foreground: Color, shimmer: Color) -> Self {
        Self {
            corner_radius,
            foreground,
            shimmer,
            timeline: Timeline::repeating(SWEEP_DURATION, START_DELAY, Easing::Linear),
        }
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Horizontal offset applied to the centered highlight band for a
    /// surface of `width`, after `elapsed` time. Sweeps from
    /// `-1.4 * width` to `1.4 * width` over one cycle.
    pub fn band_offset_at(&self, width: f32, elapsed: Duration) -> f32 {
        let progress = self.timeline.progress_at(elapsed);
        width * lerp(-TRAVEL_RATIO, TRAVEL_RATIO, progress)
    }

    /// Draw primitives for a surface of `size` after `elapsed` time: the
    /// base shape, then the highlight band. The host clips both to the
    /// placeholder shape.
    pub fn frame_at(&self, size: Size, elapsed: Duration) -> Vec<DrawPrimitive> {
        let bounds = Rect::from_size(size);
        let base = DrawPrimitive::RoundRect {
            rect: bounds,
            brush: Brush::Solid(self.foreground),
            radii: self.corner_radius,
        };

        // The band rests centered in the surface and the sweep offset moves
        // it; at the cycle edges it sits fully outside the shape.
        let band_width = size.width * BAND_WIDTH_RATIO;
        let band_x = (size.width - band_width) / 2.0 + self.band_offset_at(size.width, elapsed);
        let band = DrawPrimitive::Rect {
            rect: Rect::new(band_x, 0.0, band_width, size.height),
            brush: Brush::linear_gradient(
                &[
                    self.shimmer.cleared(),
                    self.shimmer,
                    self.shimmer.cleared(),
                ],
                Point::new(0.0, 0.5),
                Point::new(1.0, 0.5),
            ),
        };

        vec![base, band]
    }

    /// [`frame_at`](Self::frame_at) against the wall clock.
    pub fn frame(&self, size: Size, now: Instant) -> Vec<DrawPrimitive> {
        self.frame_at(size, self.timeline.elapsed(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_starts_off_screen_left() {
        let shimmer = Shimmer::new(4.0);
        // Still inside the start delay.
        let offset = shimmer.band_offset_at(150.0, Duration::ZERO);
        assert!((offset + 150.0 * TRAVEL_RATIO).abs() < 1e-3);
    }

    #[test]
    fn band_crosses_to_off_screen_right() {
        let shimmer = Shimmer::new(4.0);
        let nearly_done = START_DELAY + Duration::from_millis(1499);
        let offset = shimmer.band_offset_at(150.0, nearly_done);
        assert!(offset > 150.0 * TRAVEL_RATIO * 0.99);
    }

    #[test]
    fn frame_emits_surface_then_band() {
        let shimmer = Shimmer::new(4.0);
        let primitives = shimmer.frame_at(Size::new(150.0, 20.0), Duration::ZERO);
        assert_eq!(primitives.len(), 2);

        let DrawPrimitive::RoundRect { rect, radii, .. } = &primitives[0] else {
            panic!("expected the surface first");
        };
        assert_eq!(*rect, Rect::new(0.0, 0.0, 150.0, 20.0));
        assert_eq!(*radii, 4.0);

        assert_eq!(primitives[1].rect().width, 150.0 * BAND_WIDTH_RATIO);
    }
}
