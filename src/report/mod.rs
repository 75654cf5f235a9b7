//! Call list report: fetch, format, render
//!
//! `CallListReporter` reads the account's calls from a `CallSource`, turns
//! each one into a `DisplayRow` and prints them as a table followed by a
//! count.

mod format;
mod table;

pub use format::{
    capitalize_first, format_call_price, format_call_price_with, to_display_row, DateFormat,
    DEFAULT_PRICE_LOCALE,
};
pub use table::Table;

use std::fmt;
use std::io::Write;
use std::process::ExitCode;

use tracing::{debug, info, instrument};

use crate::console::Console;
use crate::error::ReporterError;
use crate::models::DisplayRow;
use crate::money::MoneyFormatter;
use crate::traits::CallSource;

pub const CREDENTIAL_ERROR_MESSAGE: &str = "Unable to retrieve calls from your account";
pub const NO_CALLS_MESSAGE: &str = "No calls are available on your account";
pub const TABLE_BANNER: &str = "The current list of calls available on your account:";

/// Process outcome of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    CredentialFailure,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::CredentialFailure => -1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        // -1 wraps to 255, as the shell reports it
        ExitCode::from(status.code() as u8)
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub short_date: bool,
    pub locale: String,
    pub limit: Option<usize>,
}

impl ReportOptions {
    pub fn new(short_date: bool) -> Self {
        Self {
            short_date,
            locale: DEFAULT_PRICE_LOCALE.to_string(),
            limit: None,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Prints the single credential error line; the reason only goes to the log.
pub fn report_credential_failure<O: Write, E: Write>(
    console: &mut Console<O, E>,
    reason: &dyn fmt::Display,
) -> Result<ExitStatus, ReporterError> {
    info!("Call fetch failed: {}", reason);
    console.error(CREDENTIAL_ERROR_MESSAGE)?;
    Ok(ExitStatus::CredentialFailure)
}

pub struct CallListReporter<S: CallSource> {
    source: S,
}

impl<S: CallSource> CallListReporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs the report. Credential and environment failures are reported
    /// on the console and mapped to `ExitStatus::CredentialFailure`; any
    /// other failure is returned to the caller.
    #[instrument(skip_all, fields(short_date = options.short_date, locale = %options.locale))]
    pub async fn run<O: Write, E: Write>(
        &self,
        options: &ReportOptions,
        console: &mut Console<O, E>,
    ) -> Result<ExitStatus, ReporterError> {
        let formatter = MoneyFormatter::for_locale(&options.locale).map_err(ReporterError::Locale)?;

        let calls = match self.source.fetch_calls(options.limit).await {
            Ok(calls) => calls,
            Err(e) if e.is_credential_failure() => return report_credential_failure(console, &e),
            Err(e) => return Err(e.into()),
        };

        if calls.is_empty() {
            console.info(NO_CALLS_MESSAGE)?;
        }

        let date_format = DateFormat::from_short_flag(options.short_date);
        debug!("Formatting {} calls with {:?}", calls.len(), date_format);

        let rows = calls
            .iter()
            .map(|call| to_display_row(call, date_format, &formatter))
            .collect::<Result<Vec<DisplayRow>, _>>()?;

        let table = Table::for_calls(&rows);
        console.info(TABLE_BANNER)?;
        console.write_block(&table)?;
        console.info(&format!("Total calls: {}", table.row_count()))?;

        Ok(ExitStatus::Success)
    }
}
