use crate::text::{NumberLocale, RunRole, StyledAmount};

/// Formats a numeric amount into a role-tagged run sequence.
///
/// This is the field's external collaborator seam: a backend that cannot
/// produce a result returns `None`, and the field falls back to the plain
/// numeric string.
pub trait CurrencyFormat {
    fn format(&self, amount: f64) -> Option<StyledAmount>;
}

/// Currency formatter driven by a [`NumberLocale`].
///
/// Integer digits are grouped in threes; the fraction is rendered with up to
/// two digits and trailing fraction zeros trimmed, so `12.5` and `12.50`
/// both come out as `$12.5`. The field re-appends zeros the user actually
/// typed on top of this output.
#[derive(Clone, Debug, Default)]
pub struct LocaleCurrencyFormatter {
    locale: NumberLocale,
}

impl LocaleCurrencyFormatter {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    fn grouped_integer(&self, mut value: i64) -> String {
        let mut groups: Vec<String> = Vec::new();
        loop {
            let group = value % 1000;
            value /= 1000;
            if value == 0 {
                groups.push(group.to_string());
                break;
            }
            groups.push(format!("{group:03}"));
        }
        groups.reverse();
        groups.join(&self.locale.grouping_separator.to_string())
    }
}

impl CurrencyFormat for LocaleCurrencyFormatter {
    fn format(&self, amount: f64) -> Option<StyledAmount> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }

        // Amounts are capped below 1e9 upstream, so cents fit i64 comfortably.
        let cents = (amount * 100.0).round() as i64;
        let integer = cents / 100;
        let fraction = cents % 100;

        let mut styled = StyledAmount::new();
        if self.locale.symbol_leading {
            styled.push(RunRole::Currency, self.locale.currency_symbol.clone());
        }

        styled.push(RunRole::Integer, self.grouped_integer(integer));

        if fraction != 0 {
            styled.push(RunRole::Separator, self.locale.decimal_separator.to_string());
            let digits = if fraction % 10 == 0 {
                (fraction / 10).to_string()
            } else {
                format!("{fraction:02}")
            };
            styled.push(RunRole::Fraction, digits);
        }

        if !self.locale.symbol_leading {
            styled.push(RunRole::Currency, self.locale.currency_symbol.clone());
        }

        Some(styled)
    }
}
