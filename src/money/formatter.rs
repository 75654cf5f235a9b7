//! Renders `Money` with a locale's separators and symbol placement

use super::{Locale, Money, MoneyError, SymbolPosition};

#[derive(Debug, Clone, Copy)]
pub struct MoneyFormatter {
    locale: &'static Locale,
}

impl MoneyFormatter {
    pub fn new(locale: &'static Locale) -> Self {
        Self { locale }
    }

    pub fn for_locale(name: &str) -> Result<Self, MoneyError> {
        Ok(Self::new(Locale::find(name)?))
    }

    pub fn format(&self, money: &Money) -> String {
        let currency = money.currency();
        let symbol = self.locale.symbol_for(currency);
        let number = self.format_number(money.amount().unsigned_abs(), currency.minor_units);
        let sign = if money.is_negative() { "-" } else { "" };

        match self.locale.symbol_position {
            SymbolPosition::Prefix if currency.is_alphabetic_symbol() => {
                format!("{}{} {}", sign, symbol, number)
            }
            SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, number),
            SymbolPosition::PrefixSpaced => format!("{}{} {}", sign, symbol, number),
            SymbolPosition::Suffix => format!("{}{} {}", sign, number, symbol),
        }
    }

    fn format_number(&self, minor: u64, minor_units: u32) -> String {
        let factor = 10u64.pow(minor_units);
        let integer = (minor / factor).to_string();
        let mut out = self.group_digits(&integer);

        if minor_units > 0 {
            out.push(self.locale.decimal_separator);
            out.push_str(&format!(
                "{:0width$}",
                minor % factor,
                width = minor_units as usize
            ));
        }

        out
    }

    fn group_digits(&self, digits: &str) -> String {
        if digits.len() < self.locale.min_grouping_digits {
            return digits.to_string();
        }

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.locale.grouping_separator);
            }
            out.push(c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn format(locale: &str, amount: i64, code: &str) -> String {
        let money = Money::new(amount, Currency::find(code).unwrap());
        MoneyFormatter::for_locale(locale).unwrap().format(&money)
    }

    #[test]
    fn test_en_us() {
        assert_eq!(format("en_US", 150, "USD"), "$1.50");
        assert_eq!(format("en_US", 1250, "USD"), "$12.50");
        assert_eq!(format("en_US", 0, "USD"), "$0.00");
        assert_eq!(format("en_US", 5, "USD"), "$0.05");
        assert_eq!(format("en_US", 123456789, "USD"), "$1,234,567.89");
        assert_eq!(format("en_US", 150, "EUR"), "€1.50");
        assert_eq!(format("en_US", 1500, "JPY"), "¥1,500");
        assert_eq!(format("en_US", 1234, "KWD"), "KWD 1.234");
        assert_eq!(format("en_US", 150, "CHF"), "CHF 1.50");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(format("en_US", -150, "USD"), "-$1.50");
        assert_eq!(format("de_DE", -150, "EUR"), "-1,50 €");
    }

    #[test]
    fn test_other_locales() {
        assert_eq!(format("de_DE", 123456, "EUR"), "1.234,56 €");
        assert_eq!(format("fr_FR", 123456, "EUR"), "1 234,56 €");
        assert_eq!(format("pt_BR", 123456, "BRL"), "R$ 1.234,56");
        assert_eq!(format("en_GB", 150, "USD"), "US$1.50");
        assert_eq!(format("es_ES", 123456, "EUR"), "1234,56 €");
        assert_eq!(format("es_ES", 1234567, "EUR"), "12.345,67 €");
    }

    #[test]
    fn test_unknown_locale() {
        assert!(MoneyFormatter::for_locale("tlh_QO").is_err());
    }
}
