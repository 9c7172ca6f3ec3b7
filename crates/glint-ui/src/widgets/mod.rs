//! Retained widget controllers.

pub mod currency_field;
pub mod flashlight;
pub mod shimmer;
pub mod shimmerable_text;
pub mod shiny_text;
pub mod x_circle;
