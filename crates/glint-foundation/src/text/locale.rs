/// Locale-provided symbols for numeric and currency display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub currency_symbol: String,
    /// Whether the symbol precedes the number ("$12") or follows it.
    pub symbol_leading: bool,
}

impl NumberLocale {
    pub fn new(
        decimal_separator: char,
        grouping_separator: char,
        currency_symbol: impl Into<String>,
        symbol_leading: bool,
    ) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            currency_symbol: currency_symbol.into(),
            symbol_leading,
        }
    }

    pub fn en_us() -> Self {
        Self::new('.', ',', "$", true)
    }

    /// Hebrew/Israel with the narrow shekel symbol.
    pub fn he_il() -> Self {
        Self::new('.', ',', "\u{20aa}", true)
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}
