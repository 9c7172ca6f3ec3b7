use crate::{Color, Point, Rect};

/// A color stop along a gradient, with `location` in unit space (`0.0..=1.0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub location: f32,
}

impl GradientStop {
    pub fn new(color: Color, location: f32) -> Self {
        Self { color, location }
    }
}

/// Paint description for a primitive.
///
/// Gradient geometry is expressed in the unit space of the painted rect:
/// `start`/`end` of `(0, 0)`–`(1, 0)` is a left-to-right ramp regardless of
/// the rect's actual size.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient {
        stops: Vec<GradientStop>,
        start: Point,
        end: Point,
    },
}

impl Brush {
    /// Evenly spaced linear gradient through `colors`.
    pub fn linear_gradient(colors: &[Color], start: Point, end: Point) -> Brush {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| GradientStop::new(color, index as f32 / last))
            .collect();
        Brush::LinearGradient { stops, start, end }
    }

    /// Linear gradient with explicit stop locations.
    pub fn linear_gradient_stops(stops: Vec<GradientStop>, start: Point, end: Point) -> Brush {
        Brush::LinearGradient { stops, start, end }
    }
}

/// A paint operation handed to the hosting renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        brush: Brush,
    },
    RoundRect {
        rect: Rect,
        brush: Brush,
        radii: f32,
    },
}

impl DrawPrimitive {
    pub fn rect(&self) -> Rect {
        match self {
            DrawPrimitive::Rect { rect, .. } => *rect,
            DrawPrimitive::RoundRect { rect, .. } => *rect,
        }
    }

    pub fn brush(&self) -> &Brush {
        match self {
            DrawPrimitive::Rect { brush, .. } => brush,
            DrawPrimitive::RoundRect { brush, .. } => brush,
        }
    }

    /// Returns the primitive shifted by `(dx, dy)`.
    pub fn translate(self, dx: f32, dy: f32) -> DrawPrimitive {
        match self {
            DrawPrimitive::Rect { rect, brush } => DrawPrimitive::Rect {
                rect: rect.translate(dx, dy),
                brush,
            },
            DrawPrimitive::RoundRect { rect, brush, radii } => DrawPrimitive::RoundRect {
                rect: rect.translate(dx, dy),
                brush,
                radii,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_gradient_spacing() {
        let brush = Brush::linear_gradient(
            &[Color::TRANSPARENT, Color::WHITE, Color::TRANSPARENT],
            Point::ZERO,
            Point::new(1.0, 0.0),
        );
        let Brush::LinearGradient { stops, .. } = brush else {
            panic!("expected a gradient");
        };
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].location, 0.0);
        assert_eq!(stops[1].location, 0.5);
        assert_eq!(stops[2].location, 1.0);
    }

    #[test]
    fn translate_preserves_brush() {
        let primitive = DrawPrimitive::RoundRect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            brush: Brush::Solid(Color::WHITE),
            radii: 4.0,
        };
        let moved = primitive.translate(5.0, 5.0);
        assert_eq!(moved.rect(), Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(moved.brush(), &Brush::Solid(Color::WHITE));
    }
}
