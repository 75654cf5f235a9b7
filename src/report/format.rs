//! Per-call formatting: timestamps, status and price

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use crate::error::ReporterError;
use crate::models::{CallRecord, DisplayRow};
use crate::money::{Currency, Money, MoneyError, MoneyFormatter};

pub const DEFAULT_PRICE_LOCALE: &str = "en_US";

/// Timestamp layout used in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `31/08/2010 20:36`
    Short,
    /// `Tue, 31 Aug 2010 20:36:28 +0000`
    Full,
}

impl DateFormat {
    pub fn from_short_flag(short_date: bool) -> Self {
        if short_date {
            DateFormat::Short
        } else {
            DateFormat::Full
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Short => "%d/%m/%Y %H:%M",
            DateFormat::Full => "%a, %d %b %Y %H:%M:%S %z",
        }
    }

    pub fn format(&self, timestamp: &DateTime<FixedOffset>) -> String {
        timestamp.format(self.pattern()).to_string()
    }

    /// Missing timestamps (calls not started or not ended) render empty.
    pub fn format_opt(&self, timestamp: Option<&DateTime<FixedOffset>>) -> String {
        timestamp.map(|ts| self.format(ts)).unwrap_or_default()
    }
}

/// Uppercases the first character only; the rest is left untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(value.len());
    out.push(head);
    out.push_str(chars.as_str());
    out
}

/// Formats the call charge for display with the given locale.
pub fn format_call_price(call: &CallRecord, locale: &str) -> Result<String, MoneyError> {
    let formatter = MoneyFormatter::for_locale(locale)?;
    format_call_price_with(call, &formatter)
}

/// Charges come back negative; the sign is dropped and a missing price
/// counts as zero.
pub fn format_call_price_with(
    call: &CallRecord,
    formatter: &MoneyFormatter,
) -> Result<String, MoneyError> {
    let currency = Currency::find(&call.price_unit)?;
    let money = Money::from_major(call.price.unwrap_or(Decimal::ZERO), currency)?;

    Ok(formatter.format(&money.abs()))
}

pub fn to_display_row(
    call: &CallRecord,
    date_format: DateFormat,
    formatter: &MoneyFormatter,
) -> Result<DisplayRow, ReporterError> {
    let price = format_call_price_with(call, formatter).map_err(|source| ReporterError::Price {
        call_sid: call.sid.clone(),
        source,
    })?;

    Ok(DisplayRow {
        call_sid: call.sid.clone(),
        created_on: date_format.format(&call.date_created),
        recipient: call.to.clone(),
        status: capitalize_first(&call.status),
        started_at: date_format.format_opt(call.start_time.as_ref()),
        ended_at: date_format.format_opt(call.end_time.as_ref()),
        price,
        price_unit: call.price_unit.clone(),
    })
}
