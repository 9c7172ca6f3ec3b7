//! Value-based presentation modifiers.
//!
//! A [`Modifier`] is an ordered chain of presentation ops. Hosts resolve the
//! chain against their own metrics: [`Modifier::resolve_size`] folds the
//! sizing ops over a natural size, and [`Modifier::overlay_primitives`]
//! materialises the gradient overlays for the final content bounds.

use glint_ui_graphics::{Brush, Color, DrawPrimitive, GradientStop, Point, Rect, Size};
use smallvec::SmallVec;

/// Dynamic-type scale factor supplied by the host platform. `1.0` is the
/// reference (100%) content size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeScale(pub f32);

impl Default for TypeScale {
    fn default() -> Self {
        TypeScale(1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ModOp {
    BottomFadeOut { color: Color, height: f32 },
    TopAndBottomFadeOut { color: Color, height: f32 },
    ScaledWidth { width: f32, max_width: f32 },
    ScaledHeight { height: f32, max_height: f32 },
}

/// An ordered chain of presentation ops; later ops win where they overlap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    ops: SmallVec<[ModOp; 2]>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    fn with_op(op: ModOp) -> Self {
        let mut ops = SmallVec::new();
        ops.push(op);
        Self { ops }
    }

    /// Concatenates `next` after this chain.
    pub fn then(mut self, next: Modifier) -> Self {
        self.ops.extend(next.ops);
        self
    }

    /// Appends the modifier built by `build` only when `condition` holds.
    pub fn then_if(self, condition: bool, build: impl FnOnce() -> Modifier) -> Self {
        if condition {
            self.then(build())
        } else {
            self
        }
    }

    /// Appends the modifier `build` chooses to produce, if any.
    pub fn then_with(self, build: impl FnOnce() -> Option<Modifier>) -> Self {
        match build() {
            Some(next) => self.then(next),
            None => self,
        }
    }

    /// Fades the bottom `height` of the content into `color`.
    pub fn bottom_fade_out(color: Color, height: f32) -> Self {
        Self::with_op(ModOp::BottomFadeOut { color, height })
    }

    /// Fades both the top and bottom `height` of the content into `color`.
    pub fn top_and_bottom_fade_out(color: Color, height: f32) -> Self {
        Self::with_op(ModOp::TopAndBottomFadeOut { color, height })
    }

    /// Width of `width` at 100% dynamic type, scaling up to `max_width`.
    pub fn scaled_metric_width(width: f32, max_width: f32) -> Self {
        Self::with_op(ModOp::ScaledWidth { width, max_width })
    }

    /// Height of `height` at 100% dynamic type, scaling up to `max_height`.
    pub fn scaled_metric_height(height: f32, max_height: f32) -> Self {
        Self::with_op(ModOp::ScaledHeight { height, max_height })
    }

    /// Scaled width and height in one chain.
    pub fn scaled_metric_frame(width: f32, max_width: f32, height: f32, max_height: f32) -> Self {
        Self::scaled_metric_width(width, max_width)
            .then(Self::scaled_metric_height(height, max_height))
    }

    /// Folds the sizing ops over `natural` under the host's `scale`.
    pub fn resolve_size(&self, natural: Size, scale: TypeScale) -> Size {
        let mut size = natural;
        for op in &self.ops {
            match *op {
                ModOp::ScaledWidth { width, max_width } => {
                    size.width = (width * scale.0).min(max_width);
                }
                ModOp::ScaledHeight { height, max_height } => {
                    size.height = (height * scale.0).min(max_height);
                }
                ModOp::BottomFadeOut { .. } | ModOp::TopAndBottomFadeOut { .. } => {}
            }
        }
        size
    }

    /// Gradient overlays for content occupying `bounds`, in paint order.
    pub fn overlay_primitives(&self, bounds: Rect) -> Vec<DrawPrimitive> {
        let mut primitives = Vec::new();
        for op in &self.ops {
            match *op {
                ModOp::BottomFadeOut { color, height } => {
                    primitives.push(bottom_fade(bounds, color, height));
                }
                ModOp::TopAndBottomFadeOut { color, height } => {
                    // Fading toward the transparent variant of the color
                    // itself avoids the dark mid-ramp of transparent black.
                    primitives.push(top_fade(bounds, color, height));
                    primitives.push(bottom_fade(bounds, color, height));
                }
                ModOp::ScaledWidth { .. } | ModOp::ScaledHeight { .. } => {}
            }
        }
        primitives
    }
}

fn vertical_gradient(rect: Rect, from: Color, to: Color) -> DrawPrimitive {
    DrawPrimitive::Rect {
        rect,
        brush: Brush::linear_gradient_stops(
            vec![GradientStop::new(from, 0.0), GradientStop::new(to, 1.0)],
            Point::new(0.5, 0.0),
            Point::new(0.5, 1.0),
        ),
    }
}

fn top_fade(bounds: Rect, color: Color, height: f32) -> DrawPrimitive {
    let rect = Rect::new(bounds.x, bounds.y, bounds.width, height.min(bounds.height));
    vertical_gradient(rect, color, color.cleared())
}

fn bottom_fade(bounds: Rect, color: Color, height: f32) -> DrawPrimitive {
    let height = height.min(bounds.height);
    let rect = Rect::new(bounds.x, bounds.max_y() - height, bounds.width, height);
    vertical_gradient(rect, color.cleared(), color)
}
