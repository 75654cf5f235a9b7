//! Monetary values and locale-aware currency formatting
//!
//! Amounts are held as integer minor units (cents for USD) tied to an
//! ISO-4217 currency, and rendered through a `MoneyFormatter` bound to a
//! `Locale`.
//!
//! ```rust,ignore
//! let usd = Currency::find("USD")?;
//! let money = Money::new(150, usd);
//! let formatter = MoneyFormatter::new(Locale::find("en_US")?);
//! assert_eq!(formatter.format(&money), "$1.50");
//! ```

mod currency;
mod formatter;
mod locale;

pub use currency::Currency;
pub use formatter::MoneyFormatter;
pub use locale::{Locale, SymbolPosition};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Unknown currency code: {0:?}")]
    UnknownCurrency(String),

    #[error("Unsupported locale: {0:?}")]
    UnknownLocale(String),

    #[error("Amount out of range: {0}")]
    Overflow(Decimal),
}

/// An amount of money in minor units of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    amount: i64,
    currency: &'static Currency,
}

impl Money {
    pub fn new(amount: i64, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    /// Converts an amount in major units (dollars) to minor units (cents),
    /// rounding half away from zero.
    pub fn from_major(amount: Decimal, currency: &'static Currency) -> Result<Self, MoneyError> {
        let minor = amount
            .checked_mul(Decimal::from(currency.subunit_factor()))
            .ok_or(MoneyError::Overflow(amount))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(MoneyError::Overflow(amount))?;

        Ok(Self::new(minor, currency))
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub fn abs(&self) -> Self {
        Self::new(self.amount.saturating_abs(), self.currency)
    }
}
