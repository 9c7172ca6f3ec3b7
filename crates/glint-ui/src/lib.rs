//! UI presentation helpers for Glint.
//!
//! Widgets here are retained controllers: the host owns them, feeds them
//! input events and the current time, and receives draw primitives, layout
//! rects, or styled runs back. Nothing draws or schedules by itself.

pub mod barcode;
pub mod modifier;
pub mod widgets;

pub use modifier::{Modifier, TypeScale};
pub use widgets::currency_field::CurrencyTextField;
pub use widgets::flashlight::{FlashlightToggle, FlashlightVisuals, Torch, TorchError};
pub use widgets::shimmer::Shimmer;
pub use widgets::shimmerable_text::{
    shimmer_text, ShimmerableText, TextMeasurer, Word, SHIMMER_PATTERN_CHARACTER,
};
pub use widgets::shiny_text::{ShinyFrame, ShinyText};
pub use widgets::x_circle::XCircleFill;
