//! Graphics primitives shared by the Glint presentation crates.
//!
//! This crate is a leaf: it only defines the value types (colors, geometry,
//! gradient brushes, draw primitives) that the layout and widget crates
//! exchange with the hosting renderer.

mod brush;
mod color;
mod geometry;

pub use brush::{Brush, DrawPrimitive, GradientStop};
pub use color::Color;
pub use geometry::{Point, Rect, Size};

/// Horizontal reading direction of the surrounding layout.
///
/// Effects that sweep horizontally (shiny text) mirror their motion under
/// [`LayoutDirection::RightToLeft`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// Multiplier applied to horizontal travel: `1.0` for LTR, `-1.0` for RTL.
    pub fn factor(self) -> f32 {
        match self {
            LayoutDirection::LeftToRight => 1.0,
            LayoutDirection::RightToLeft => -1.0,
        }
    }
}
