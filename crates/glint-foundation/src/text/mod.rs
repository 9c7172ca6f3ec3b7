//! Text input module for the currency field.
//!
//! The field keeps a raw keystroke buffer and derives a role-tagged display
//! string from it on every accepted edit.
//!
//! # Core Types
//!
//! - [`NumberLocale`] - Decimal/grouping separators and currency symbol
//! - [`StyledAmount`] - Role-tagged run sequence for display
//! - [`CurrencyFormat`] / [`LocaleCurrencyFormatter`] - Amount formatting
//! - [`CurrencyFieldState`] - Per-control edit state machine
//!
//! # Example
//!
//! ```text
//! let mut state = CurrencyFieldState::default();
//! state.set_text("1");
//! state.set_text("12");
//! state.set_text("12.");
//! assert_eq!(state.styled().text(), "$12.");
//! ```

mod field;
mod format;
mod locale;
mod style;

pub use field::{CurrencyFieldState, AMOUNT_CEILING};
pub use format::{CurrencyFormat, LocaleCurrencyFormatter};
pub use locale::NumberLocale;
pub use style::{FieldStyle, RunRole, StyledAmount, StyledRun};
