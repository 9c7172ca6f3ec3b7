use smallvec::SmallVec;

/// Presentation role of a formatted text segment.
///
/// The role says what a segment *is*; the hosting presentation layer (or
/// [`FieldStyle`]) decides what it looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunRole {
    /// The currency symbol.
    Currency,
    /// Integer digits, including grouping separators.
    Integer,
    /// The decimal separator.
    Separator,
    /// Fraction digits.
    Fraction,
}

/// A contiguous text segment tagged with its presentation role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub role: RunRole,
}

/// A formatted amount as an ordered run sequence.
///
/// A typical amount is at most four runs (symbol, integer, separator,
/// fraction); pushes with the role of the preceding run extend that run
/// instead of starting a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledAmount {
    runs: SmallVec<[StyledRun; 4]>,
}

impl StyledAmount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-run fallback for when no formatter output is available.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut amount = Self::new();
        amount.push(RunRole::Integer, text);
        amount
    }

    pub fn push(&mut self, role: RunRole, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.role == role => last.text.push_str(&text),
            _ => self.runs.push(StyledRun { text, role }),
        }
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The display string with styling stripped.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Display variant of the currency field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStyle {
    #[default]
    Default,
    /// Oversized integer digits, regular symbol and fraction.
    LargeIntegerPart,
}

impl FieldStyle {
    /// Font size for the symbol, separator, and fraction runs.
    pub fn font(&self) -> f32 {
        18.0
    }

    /// Font size for the integer-digit runs.
    pub fn integer_part_font(&self) -> f32 {
        match self {
            FieldStyle::Default => 18.0,
            FieldStyle::LargeIntegerPart => 54.0,
        }
    }

    /// Resolves the font size for a run role.
    pub fn font_for(&self, role: RunRole) -> f32 {
        match role {
            RunRole::Integer => self.integer_part_font(),
            RunRole::Currency | RunRole::Separator | RunRole::Fraction => self.font(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_coalesces_adjacent_roles() {
        let mut amount = StyledAmount::new();
        amount.push(RunRole::Fraction, "5");
        amount.push(RunRole::Fraction, "0");
        amount.push(RunRole::Separator, ".");
        assert_eq!(amount.runs().len(), 2);
        assert_eq!(amount.runs()[0].text, "50");
        assert_eq!(amount.text(), "50.");
    }

    #[test]
    fn empty_pushes_are_ignored() {
        let mut amount = StyledAmount::new();
        amount.push(RunRole::Integer, "");
        assert!(amount.is_empty());
    }

    #[test]
    fn large_style_only_enlarges_integer_runs() {
        let style = FieldStyle::LargeIntegerPart;
        assert_eq!(style.font_for(RunRole::Integer), 54.0);
        assert_eq!(style.font_for(RunRole::Currency), 18.0);
        assert_eq!(style.font_for(RunRole::Separator), 18.0);
        assert_eq!(style.font_for(RunRole::Fraction), 18.0);

        let style = FieldStyle::Default;
        assert_eq!(style.font_for(RunRole::Integer), 18.0);
    }
}
