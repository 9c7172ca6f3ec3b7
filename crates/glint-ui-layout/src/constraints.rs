use glint_ui_graphics::Size;

/// Measurement constraints handed from a parent to a child.
///
/// `f32::INFINITY` in a max field means the axis is unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Fully unbounded constraints; children resolve to their natural size.
    pub const UNBOUNDED: Constraints = Constraints {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    /// Constraints that force an exact size.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Loose constraints bounded only from above.
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Whether the horizontal axis has a finite upper bound.
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Clamps `size` into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
