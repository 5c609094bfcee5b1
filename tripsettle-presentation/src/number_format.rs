use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

const DEFAULT_SYMBOL: &str = "₹";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigitGrouping {
    /// `12,34,567.89`: the last three digits, then pairs.
    #[default]
    Indian,
    /// `1,234,567.89`
    Western,
}

/// Renders money with two fixed decimals behind a currency symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountFormatter {
    symbol: String,
    grouping: DigitGrouping,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, DigitGrouping::default())
    }
}

impl AmountFormatter {
    pub fn new(symbol: impl Into<String>, grouping: DigitGrouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn amount(&self, value: f64) -> String {
        format!("{}{}", self.symbol, self.number(value))
    }

    /// Grouped number without the symbol. Non-finite input renders as `0.00`.
    pub fn number(&self, value: f64) -> String {
        let Some(decimal) = Decimal::from_f64(value) else {
            return "0.00".to_owned();
        };
        let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.grouping));
        out.push('.');
        out.push_str(fraction);
        out
    }
}

fn group_digits(integer: &str, grouping: DigitGrouping) -> String {
    if integer.len() <= 3 {
        return integer.to_owned();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let group = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / group + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, "0.00")]
    #[case::small(7.5, "7.50")]
    #[case::thousand(1000.0, "1,000.00")]
    #[case::lakh(123456.78, "1,23,456.78")]
    #[case::crore(12345678.9, "1,23,45,678.90")]
    #[case::negative(-46.66, "-46.66")]
    #[case::negative_grouped(-2500.0, "-2,500.00")]
    #[case::midpoint(0.125, "0.13")]
    #[case::negative_midpoint(-0.125, "-0.13")]
    #[case::rounds_to_zero(-0.001, "0.00")]
    fn indian_grouping(#[case] value: f64, #[case] expected: &str) {
        let formatter = AmountFormatter::default();

        assert_eq!(formatter.number(value), expected);
    }

    #[rstest]
    #[case::lakh(123456.78, "123,456.78")]
    #[case::million(1234567.0, "1,234,567.00")]
    #[case::below_thousand(999.99, "999.99")]
    fn western_grouping(#[case] value: f64, #[case] expected: &str) {
        let formatter = AmountFormatter::new("$", DigitGrouping::Western);

        assert_eq!(formatter.number(value), expected);
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinity(f64::INFINITY)]
    #[case::negative_infinity(f64::NEG_INFINITY)]
    fn non_finite_renders_as_zero(#[case] value: f64) {
        assert_eq!(AmountFormatter::default().amount(value), "₹0.00");
    }

    #[test]
    fn symbol_precedes_sign() {
        assert_eq!(AmountFormatter::default().amount(-10.59), "₹-10.59");
        assert_eq!(
            AmountFormatter::new("€", DigitGrouping::Western).amount(1500.0),
            "€1,500.00"
        );
    }
}
