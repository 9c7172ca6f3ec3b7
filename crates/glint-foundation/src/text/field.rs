//! Keystroke-driven state machine for the currency field.
//!
//! The host feeds the full post-edit text through [`CurrencyFieldState::set_text`]
//! after every keystroke. Edits are classified as insertions or deletions by
//! length, validated, and either accepted (amount, buffer, and styled output
//! all move together) or silently reverted to the previous accepted buffer.
//! Rejection is "no change", never an error.

use std::rc::Rc;

use crate::text::{
    CurrencyFormat, LocaleCurrencyFormatter, NumberLocale, RunRole, StyledAmount,
};

/// Exclusive upper bound on the accepted amount.
pub const AMOUNT_CEILING: f64 = 1_000_000_000.0;

/// Maximum number of fraction digits in the buffer.
const MAX_FRACTION_DIGITS: usize = 2;

/// Edit state owned by a single currency input control.
///
/// Holds the last accepted raw buffer, the numeric amount parsed from it,
/// and the role-tagged display runs derived from the amount. One instance
/// per control; instances never share state.
#[derive(Clone)]
pub struct CurrencyFieldState {
    locale: NumberLocale,
    formatter: Rc<dyn CurrencyFormat>,
    amount: f64,
    buffer: String,
    styled: StyledAmount,
}

impl Default for CurrencyFieldState {
    fn default() -> Self {
        Self::new(NumberLocale::default())
    }
}

impl CurrencyFieldState {
    /// State seeded at "0", the post-appear resting state of the control.
    pub fn new(locale: NumberLocale) -> Self {
        let formatter = Rc::new(LocaleCurrencyFormatter::new(locale.clone()));
        Self::with_formatter(locale, formatter)
    }

    /// State seeded at "0" with a custom formatting backend.
    pub fn with_formatter(locale: NumberLocale, formatter: Rc<dyn CurrencyFormat>) -> Self {
        let mut state = Self {
            locale,
            formatter,
            amount: 0.0,
            buffer: String::new(),
            styled: StyledAmount::new(),
        };
        state.clear();
        state
    }

    /// Pre-edit state with an empty buffer and no display runs; the host
    /// shows its placeholder until the first keystroke arrives.
    pub fn empty(locale: NumberLocale) -> Self {
        let mut state = Self::new(locale);
        state.buffer.clear();
        state.styled = StyledAmount::new();
        state
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn styled(&self) -> &StyledAmount {
        &self.styled
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Resets to the zero state: amount 0, buffer "0", formatted zero runs.
    pub fn clear(&mut self) {
        self.amount = 0.0;
        self.buffer = "0".to_string();
        self.styled = self
            .formatter
            .format(0.0)
            .unwrap_or_else(|| StyledAmount::plain("0"));
    }

    /// Applies the post-edit text of a single keystroke.
    pub fn set_text(&mut self, new_value: &str) {
        let old_value = self.buffer.clone();

        // Runaway leading zeros collapse to a single "0" before any other
        // classification.
        if is_all_zeros(new_value) && is_all_zeros(&old_value) {
            self.buffer = "0".to_string();
            return;
        }

        if new_value.chars().count() > old_value.chars().count() {
            self.on_insert(&old_value, new_value);
        } else {
            self.on_delete(&old_value, new_value);
        }
    }

    fn on_insert(&mut self, old_value: &str, new_value: &str) {
        let separator = self.locale.decimal_separator;

        let Some(new_character) = new_value.chars().last() else {
            self.clear();
            return;
        };

        // A separator on an empty buffer seeds an implicit integer part.
        if old_value.is_empty() && new_character == separator {
            let seeded = format!("0{separator}");
            self.accept(&seeded);
            return;
        }

        // "0" then "0" again stays at "0".
        if old_value == "0" && new_character == '0' {
            self.buffer = "0".to_string();
            return;
        }

        if new_value.chars().filter(|&c| c == separator).count() > 1 {
            return;
        }

        if let Some(fraction) = fraction_part(new_value, separator) {
            if fraction.chars().count() > MAX_FRACTION_DIGITS {
                return;
            }
        }

        self.accept(new_value);
    }

    fn on_delete(&mut self, _old_value: &str, new_value: &str) {
        if new_value.is_empty() {
            self.clear();
            return;
        }

        self.accept(new_value);
    }

    /// Parses and commits `new_value`, or reverts silently.
    fn accept(&mut self, new_value: &str) {
        let separator = self.locale.decimal_separator;

        let normalized: String = new_value
            .chars()
            .map(|c| if c == separator { '.' } else { c })
            .collect();
        let Ok(value) = normalized.parse::<f64>() else {
            log::trace!("currency edit rejected, not a number: {new_value:?}");
            return;
        };
        if value >= AMOUNT_CEILING {
            log::trace!("currency edit rejected, at or over ceiling: {new_value:?}");
            return;
        }

        self.amount = value;
        self.buffer = strip_leading_zeros(new_value, separator);
        self.styled = match self.formatter.format(value) {
            Some(mut styled) => {
                self.patch_trailing(&mut styled);
                styled
            }
            // Formatting backend unavailable: fail closed with the raw text.
            None => StyledAmount::plain(self.buffer.clone()),
        };
    }

    /// Re-appends the trailing separator / fraction zeros the user just
    /// typed, which the formatter's trimming dropped. Derived from this
    /// formatter's actual output: a bare trailing separator vanishes, and
    /// fractions "0", "00", and "x0" lose their final zeros.
    fn patch_trailing(&self, styled: &mut StyledAmount) {
        let separator = self.locale.decimal_separator;

        match fraction_part(&self.buffer, separator) {
            Some("") => {
                styled.push(RunRole::Separator, separator.to_string());
            }
            Some("0") => {
                styled.push(RunRole::Separator, separator.to_string());
                styled.push(RunRole::Fraction, "0");
            }
            Some("00") => {
                styled.push(RunRole::Separator, separator.to_string());
                styled.push(RunRole::Fraction, "00");
            }
            Some(fraction) if fraction.ends_with('0') => {
                styled.push(RunRole::Fraction, "0");
            }
            _ => {}
        }
    }
}

/// Whether `value` is made up entirely of zero digits. The empty string
/// counts, matching the guard's use on freshly emptied buffers.
fn is_all_zeros(value: &str) -> bool {
    value.chars().all(|c| c == '0')
}

/// Everything after the decimal separator, or `None` when there is no
/// separator. A trailing separator yields `Some("")`.
fn fraction_part(value: &str, separator: char) -> Option<&str> {
    value
        .char_indices()
        .find(|&(_, c)| c == separator)
        .map(|(index, _)| &value[index + separator.len_utf8()..])
}

/// Drops redundant leading zeros: "05" becomes "5", while "0" and "0.5"
/// stay as they are.
fn strip_leading_zeros(value: &str, separator: char) -> String {
    let mut result = value;
    loop {
        let mut chars = result.chars();
        match (chars.next(), chars.next()) {
            (Some('0'), Some(second)) if second != separator => {
                result = &result[1..];
            }
            _ => break,
        }
    }
    result.to_string()
}

#[cfg(test)]
#[path = "tests/field_tests.rs"]
mod tests;
