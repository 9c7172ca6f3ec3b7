//! Layout contracts and policies for Glint.
//!
//! The contracts ([`Constraints`], [`Measurable`], [`Placeable`],
//! [`MeasurePolicy`]) mirror the measure/place split used by Compose-style
//! frameworks: a parent measures each child under constraints, receives a
//! [`Placeable`] with the resolved size, and returns a [`MeasureResult`]
//! pairing its own size with child [`Placement`]s.
//!
//! [`flow`] provides the wrapping line layout used for word-level content.

mod constraints;
mod measurable;

pub mod flow;

pub use constraints::Constraints;
pub use flow::FlowMeasurePolicy;
pub use measurable::{
    MeasurePolicy, MeasureResult, Measurable, Placeable, Placement, SizedMeasurable,
};
