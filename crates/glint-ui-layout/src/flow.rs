//! Wrapping line layout.
//!
//! Items are taken in presentation order and packed into lines, like inline
//! text wrapping: a line grows until the next item would overflow the
//! available width, then the overflowing item seeds a new line. A line's
//! height is the tallest item in it.
//!
//! Measurement and placement are separate passes over the same item sizes.
//! Both consult [`wraps_to_new_line`] for every item, so they cannot make
//! different wrapping decisions for the same input; placement additionally
//! tracks the line width relative to the line start, which keeps the
//! decision independent of the container origin.

use glint_ui_graphics::{Point, Size};

use crate::{Constraints, MeasurePolicy, MeasureResult, Measurable, Placement};

/// The wrap decision shared by the measure and placement passes.
///
/// `line_width` is the width already consumed on the current line. An item
/// that does not fit starts a new line; an item wider than `max_width` on an
/// empty line still returns `true`, which makes it the sole occupant of its
/// own line (it is never split or truncated).
pub fn wraps_to_new_line(line_width: f32, item_width: f32, max_width: f32) -> bool {
    line_width + item_width > max_width
}

/// Measure pass: total bounding size of `sizes` wrapped at `max_width`.
pub fn measure_flow(sizes: &[Size], max_width: f32) -> Size {
    let mut total_width = 0.0f32;
    let mut total_height = 0.0f32;
    let mut line_width = 0.0f32;
    let mut line_height = 0.0f32;

    for size in sizes {
        if wraps_to_new_line(line_width, size.width, max_width) {
            // Commit the current line; the overflowing item seeds the next.
            total_height += line_height;
            line_width = size.width;
            line_height = size.height;
        } else {
            line_width += size.width;
            line_height = line_height.max(size.height);
        }

        total_width = total_width.max(line_width);
    }

    total_height += line_height;

    Size::new(total_width, total_height)
}

/// Placement pass: top-left position for each of `sizes`, wrapped at
/// `max_width`, starting at `origin`.
///
/// Each item occupies its natural box at the line cursor; centering within
/// that box resolves to the cursor itself, so the returned positions are the
/// box origins.
pub fn place_flow(sizes: &[Size], origin: Point, max_width: f32) -> Vec<Point> {
    let mut positions = Vec::with_capacity(sizes.len());
    let mut line_width = 0.0f32;
    let mut line_y = origin.y;
    let mut line_height = 0.0f32;

    for size in sizes {
        if wraps_to_new_line(line_width, size.width, max_width) {
            line_y += line_height;
            line_height = 0.0;
            line_width = 0.0;
        }

        positions.push(Point::new(origin.x + line_width, line_y));

        line_height = line_height.max(size.height);
        line_width += size.width;
    }

    positions
}

/// [`MeasurePolicy`] that wraps children into lines.
///
/// Children are measured unconstrained so they resolve to their natural
/// sizes, then wrapped at the incoming max width. With an unbounded width
/// every child lands on one line.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowMeasurePolicy;

impl FlowMeasurePolicy {
    fn natural_sizes(measurables: &[Box<dyn Measurable>]) -> Vec<Size> {
        measurables
            .iter()
            .map(|measurable| measurable.measure(Constraints::UNBOUNDED).size())
            .collect()
    }
}

impl MeasurePolicy for FlowMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let sizes = Self::natural_sizes(measurables);
        let size = measure_flow(&sizes, constraints.max_width);
        let placements = place_flow(&sizes, Point::ZERO, constraints.max_width)
            .into_iter()
            .enumerate()
            .map(|(index, position)| Placement::new(index, position.x, position.y))
            .collect();

        MeasureResult::new(constraints.constrain(size), placements)
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        // The narrowest useful width: every line holds exactly one item.
        measurables
            .iter()
            .map(|measurable| measurable.min_intrinsic_width(f32::INFINITY))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], _height: f32) -> f32 {
        // Everything on a single line.
        measurables
            .iter()
            .map(|measurable| measurable.max_intrinsic_width(f32::INFINITY))
            .sum()
    }

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        let sizes = Self::natural_sizes(measurables);
        measure_flow(&sizes, width).height
    }

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        self.min_intrinsic_height(measurables, width)
    }
}
