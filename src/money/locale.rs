//! Number and currency conventions per locale

use super::{Currency, MoneyError};

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.50`
    Prefix,
    /// `R$ 1,50`
    PrefixSpaced,
    /// `1,50 €`
    Suffix,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    pub name: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Integer digits required before grouping kicks in (es_ES writes `1234`).
    pub min_grouping_digits: usize,
    pub symbol_position: SymbolPosition,
    symbol_overrides: &'static [(&'static str, &'static str)],
}

impl Locale {
    /// Accepts `en_US`, `en-US` and `en_US.UTF-8` spellings.
    pub fn find(name: &str) -> Result<&'static Locale, MoneyError> {
        let normalized = name
            .trim()
            .split('.')
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        LOCALES
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| MoneyError::UnknownLocale(name.to_string()))
    }

    pub fn symbol_for(&self, currency: &Currency) -> &'static str {
        self.symbol_overrides
            .iter()
            .find(|(code, _)| *code == currency.code)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(currency.symbol)
    }
}

static LOCALES: &[Locale] = &[
    Locale {
        name: "en_US",
        decimal_separator: '.',
        grouping_separator: ',',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Prefix,
        symbol_overrides: &[],
    },
    Locale {
        name: "en_GB",
        decimal_separator: '.',
        grouping_separator: ',',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Prefix,
        symbol_overrides: &[("USD", "US$")],
    },
    Locale {
        name: "en_CA",
        decimal_separator: '.',
        grouping_separator: ',',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Prefix,
        symbol_overrides: &[("CAD", "$"), ("USD", "US$")],
    },
    Locale {
        name: "en_AU",
        decimal_separator: '.',
        grouping_separator: ',',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Prefix,
        symbol_overrides: &[("AUD", "$"), ("USD", "US$")],
    },
    Locale {
        name: "de_DE",
        decimal_separator: ',',
        grouping_separator: '.',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Suffix,
        symbol_overrides: &[],
    },
    Locale {
        name: "es_ES",
        decimal_separator: ',',
        grouping_separator: '.',
        min_grouping_digits: 5,
        symbol_position: SymbolPosition::Suffix,
        symbol_overrides: &[("USD", "US$")],
    },
    Locale {
        name: "fr_FR",
        decimal_separator: ',',
        grouping_separator: ' ',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Suffix,
        symbol_overrides: &[("USD", "$US")],
    },
    Locale {
        name: "pt_BR",
        decimal_separator: ',',
        grouping_separator: '.',
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::PrefixSpaced,
        symbol_overrides: &[("USD", "US$")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_spellings() {
        assert_eq!(Locale::find("en_US").unwrap().name, "en_US");
        assert_eq!(Locale::find("en-us").unwrap().name, "en_US");
        assert_eq!(Locale::find("de_DE.UTF-8").unwrap().name, "de_DE");
    }

    #[test]
    fn test_unknown_locale() {
        assert_eq!(
            Locale::find("xx_YY"),
            Err(MoneyError::UnknownLocale("xx_YY".to_string()))
        );
    }

    #[test]
    fn test_symbol_overrides() {
        let usd = Currency::find("USD").unwrap();
        let cad = Currency::find("CAD").unwrap();

        assert_eq!(Locale::find("en_US").unwrap().symbol_for(usd), "$");
        assert_eq!(Locale::find("en_US").unwrap().symbol_for(cad), "CA$");
        assert_eq!(Locale::find("en_CA").unwrap().symbol_for(cad), "$");
        assert_eq!(Locale::find("en_CA").unwrap().symbol_for(usd), "US$");
    }

    #[test]
    fn test_every_locale_name_resolves_to_itself() {
        for locale in LOCALES {
            assert_eq!(Locale::find(locale.name).unwrap().name, locale.name);
        }
    }
}
