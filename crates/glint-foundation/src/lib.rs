//! Foundation elements for Glint: text input state and shared control helpers.

pub mod text;

mod first_appear;

pub use first_appear::FirstAppearGate;

pub mod prelude {
    pub use crate::text::{
        CurrencyFieldState, CurrencyFormat, FieldStyle, LocaleCurrencyFormatter, NumberLocale,
        RunRole, StyledAmount, StyledRun, AMOUNT_CEILING,
    };
    pub use crate::FirstAppearGate;
}
