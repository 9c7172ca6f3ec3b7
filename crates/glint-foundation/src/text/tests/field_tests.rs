use std::rc::Rc;

use crate::text::{
    CurrencyFieldState, CurrencyFormat, NumberLocale, RunRole, StyledAmount, AMOUNT_CEILING,
};

/// Feeds `keys` one keystroke at a time, appending at the end of the buffer
/// the way the cursor-free control does.
fn type_keys(state: &mut CurrencyFieldState, keys: &str) {
    for key in keys.chars() {
        let mut next = state.buffer().to_string();
        next.push(key);
        state.set_text(&next);
    }
}

/// Deletes the last character of the buffer.
fn backspace(state: &mut CurrencyFieldState) {
    let mut next = state.buffer().to_string();
    next.pop();
    state.set_text(&next);
}

#[test]
fn starts_at_formatted_zero() {
    let state = CurrencyFieldState::default();
    assert_eq!(state.buffer(), "0");
    assert_eq!(state.amount(), 0.0);
    assert_eq!(state.styled().text(), "$0");
}

#[test]
fn typing_zero_twice_stays_at_zero() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "00");
    assert_eq!(state.buffer(), "0");
    assert_eq!(state.amount(), 0.0);
}

#[test]
fn separator_on_empty_buffer_seeds_zero() {
    let mut state = CurrencyFieldState::empty(NumberLocale::default());
    state.set_text(".");
    assert_eq!(state.buffer(), "0.");
    assert_eq!(state.amount(), 0.0);
    assert_eq!(state.styled().text(), "$0.");
}

#[test]
fn separator_after_zero_keeps_the_zero() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, ".");
    assert_eq!(state.buffer(), "0.");
    assert_eq!(state.styled().text(), "$0.");
}

#[test]
fn digits_accumulate_and_group() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "1234567");
    assert_eq!(state.buffer(), "1234567");
    assert_eq!(state.amount(), 1234567.0);
    assert_eq!(state.styled().text(), "$1,234,567");
}

#[test]
fn leading_zero_is_normalized_away() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "5");
    assert_eq!(state.buffer(), "5");
    assert_eq!(state.amount(), 5.0);
}

#[test]
fn at_most_one_separator() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "1.2.");
    assert_eq!(state.buffer(), "1.2");
    assert_eq!(state.amount(), 1.2);
}

#[test]
fn at_most_two_fraction_digits() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "1.234");
    assert_eq!(state.buffer(), "1.23");
    assert_eq!(state.amount(), 1.23);
    assert_eq!(state.styled().text(), "$1.23");
}

#[test]
fn rejection_preserves_prior_styled_output() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "1.23");
    let before = state.styled().clone();
    type_keys(&mut state, "4");
    assert_eq!(state.styled(), &before);
}

#[test]
fn deleting_everything_resets_to_zero() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "12");
    backspace(&mut state);
    assert_eq!(state.buffer(), "1");
    backspace(&mut state);
    assert_eq!(state.buffer(), "0");
    assert_eq!(state.amount(), 0.0);
    assert_eq!(state.styled().text(), "$0");
}

#[test]
fn amount_stays_below_the_ceiling() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "999999999");
    assert_eq!(state.amount(), 999_999_999.0);

    type_keys(&mut state, "9");
    assert_eq!(state.buffer(), "999999999");
    assert_eq!(state.amount(), 999_999_999.0);
    assert!(state.amount() < AMOUNT_CEILING);
}

#[test]
fn trailing_separator_survives_formatting() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "12.");
    assert_eq!(state.styled().text(), "$12.");

    // The patched separator carries its role.
    let last = state.styled().runs().last().unwrap();
    assert_eq!(last.role, RunRole::Separator);
}

#[test]
fn trailing_fraction_zeros_survive_formatting() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "5.0");
    assert_eq!(state.styled().text(), "$5.0");

    type_keys(&mut state, "0");
    assert_eq!(state.buffer(), "5.00");
    assert_eq!(state.styled().text(), "$5.00");
}

#[test]
fn mid_fraction_zero_needs_no_patch() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "12.05");
    assert_eq!(state.styled().text(), "$12.05");
}

#[test]
fn fraction_ending_in_zero_is_patched() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "12.50");
    assert_eq!(state.buffer(), "12.50");
    assert_eq!(state.amount(), 12.5);
    assert_eq!(state.styled().text(), "$12.50");
}

#[test]
fn deleting_into_a_trailing_separator_repatches() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "12.5");
    backspace(&mut state);
    assert_eq!(state.buffer(), "12.");
    assert_eq!(state.styled().text(), "$12.");
}

#[test]
fn clear_resets_amount_buffer_and_runs() {
    let mut state = CurrencyFieldState::default();
    type_keys(&mut state, "42.5");
    state.clear();
    assert_eq!(state.buffer(), "0");
    assert_eq!(state.amount(), 0.0);
    assert_eq!(state.styled().text(), "$0");
}

#[test]
fn accepted_buffers_respect_the_invariants() {
    // Property sweep over a mixed keystroke soup.
    let mut state = CurrencyFieldState::default();
    let separator = state.locale().decimal_separator;
    for key in "0.1.2.034.00.9".chars() {
        let mut next = state.buffer().to_string();
        next.push(key);
        state.set_text(&next);

        let buffer = state.buffer().to_string();
        let separators = buffer.chars().filter(|&c| c == separator).count();
        assert!(separators <= 1, "buffer {buffer:?} has {separators} separators");

        if let Some(position) = buffer.find(separator) {
            assert!(buffer[position + 1..].len() <= 2, "buffer {buffer:?}");
        }

        assert!(state.amount() < AMOUNT_CEILING);
        if buffer.len() > 1 {
            let mut chars = buffer.chars();
            if chars.next() == Some('0') {
                assert_eq!(chars.next(), Some(separator), "leading zero in {buffer:?}");
            }
        }
    }
}

struct UnavailableFormatter;

impl CurrencyFormat for UnavailableFormatter {
    fn format(&self, _amount: f64) -> Option<StyledAmount> {
        None
    }
}

#[test]
fn unavailable_backend_falls_back_to_plain_text() {
    let mut state =
        CurrencyFieldState::with_formatter(NumberLocale::default(), Rc::new(UnavailableFormatter));
    type_keys(&mut state, "12.5");
    assert_eq!(state.styled().text(), "12.5");
    assert_eq!(state.styled().runs().len(), 1);
    assert_eq!(state.amount(), 12.5);
}
