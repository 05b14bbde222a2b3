use crate::core::transaction::Amount;

/// Currency rendering for receipts and balance summaries: symbol, two
/// decimal places, thousands grouped with commas. The symbol comes
/// from configuration; grouping style is fixed rather than
/// locale-driven.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CurrencyFormat {
    symbol: String
}

impl CurrencyFormat {
    pub fn new(symbol: &str) -> CurrencyFormat {
        CurrencyFormat { symbol: symbol.to_owned() }
    }

    /// Formats an amount as e.g. `$1,234.56`. Rounds to the nearest
    /// cent.
    pub fn format(&self, amount: Amount) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let cents = (amount.abs() * 100.0).round() as u64;
        return format!("{}{}{}.{:02}", sign, self.symbol,
            group_thousands(cents / 100), cents % 100);
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::new("$")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    return grouped;
}


#[cfg(test)]
mod tests {
    use super::CurrencyFormat;

    use rstest::rstest;

    #[rstest]
    #[case(0.0, "$0.00")]
    #[case(0.5, "$0.50")]
    #[case(42.0, "$42.00")]
    #[case(999.99, "$999.99")]
    #[case(1234.5, "$1,234.50")]
    #[case(1000000.0, "$1,000,000.00")]
    #[case(-5.25, "-$5.25")]
    fn formats_amounts(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(CurrencyFormat::default().format(amount), expected);
    }

    #[test]
    fn configurable_symbol() {
        let pounds = CurrencyFormat::new("£");
        assert_eq!(pounds.format(1234.56), "£1,234.56");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        let currency = CurrencyFormat::default();
        assert_eq!(currency.format(0.005), "$0.01");
        assert_eq!(currency.format(10.004), "$10.00");
    }
}
