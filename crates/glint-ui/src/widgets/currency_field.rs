//! Cursor-free currency input control.
//!
//! The host forwards the raw text of the hidden input after every keystroke
//! and renders the styled runs this controller hands back; the caret never
//! appears because the display text is regenerated whole on each edit. All
//! validation and formatting lives in
//! [`CurrencyFieldState`](glint_foundation::text::CurrencyFieldState); this
//! controller adds the display style, the placeholder, and the external
//! clear signal.

use glint_foundation::text::{CurrencyFieldState, FieldStyle, NumberLocale, StyledAmount};

const DEFAULT_PLACEHOLDER: &str = "Amount";

/// Currency input controller, one per on-screen field.
#[derive(Clone)]
pub struct CurrencyTextField {
    state: CurrencyFieldState,
    style: FieldStyle,
    placeholder: String,
}

impl CurrencyTextField {
    pub fn new(locale: NumberLocale, style: FieldStyle) -> Self {
        Self {
            state: CurrencyFieldState::new(locale),
            style,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn amount(&self) -> f64 {
        self.state.amount()
    }

    pub fn buffer(&self) -> &str {
        self.state.buffer()
    }

    pub fn styled(&self) -> &StyledAmount {
        self.state.styled()
    }

    pub fn style(&self) -> FieldStyle {
        self.style
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Applies the post-edit text of a keystroke; invalid edits revert
    /// silently inside the state machine.
    pub fn on_text_changed(&mut self, new_value: &str) {
        self.state.set_text(new_value);
    }

    /// Resets to the zero state immediately.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Consumes the host's external clear signal: when `flag` is set, the
    /// field resets and the flag is lowered. One-shot; the host must not
    /// raise the flag again without a new user action.
    pub fn sync_clear_flag(&mut self, flag: &mut bool) {
        if *flag {
            self.state.clear();
            *flag = false;
        }
    }

    /// Display runs paired with the font size the style assigns their role.
    pub fn display_runs(&self) -> Vec<(String, f32)> {
        self.state
            .styled()
            .runs()
            .iter()
            .map(|run| (run.text.clone(), self.style.font_for(run.role)))
            .collect()
    }
}
