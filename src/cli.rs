// src/cli.rs
use std::io::Write;

use crate::config::Config;
use crate::console::Console;
use crate::error::{ConfigError, ReporterError};
use crate::report::{report_credential_failure, CallListReporter, ExitStatus, ReportOptions};
use crate::twilio::TwilioClient;

#[derive(Debug, clap::Parser)]
/// Twilio account tools
#[command(name = "twilio", version, about, long_about = None)]
pub struct CliParser {
    /// Log debug information to standard error.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// List calls on your Twilio account
    ListCalls(ListCallsArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct ListCallsArgs {
    /// Display all dates in the short form
    #[arg(long)]
    pub short_date: bool,
    /// Locale used to format call prices (defaults to TWILIO_LOCALE, then en_US)
    #[arg(long)]
    pub locale: Option<String>,
    /// Stop after reading this many calls
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
}

impl ListCallsArgs {
    pub fn report_options(&self, config: &Config) -> ReportOptions {
        ReportOptions {
            short_date: self.short_date,
            locale: self.locale.clone().unwrap_or_else(|| config.locale.clone()),
            limit: self.limit.map(|limit| limit as usize),
        }
    }

    pub async fn execute<O: Write, E: Write>(
        &self,
        config: Result<Config, ConfigError>,
        console: &mut Console<O, E>,
    ) -> Result<ExitStatus, ReporterError> {
        let config = match config {
            Ok(config) => config,
            Err(e) => return report_credential_failure(console, &e),
        };

        let client = match TwilioClient::from_config(&config) {
            Ok(client) => client,
            Err(e) if e.is_credential_failure() => return report_credential_failure(console, &e),
            Err(e) => return Err(e.into()),
        };

        CallListReporter::new(client)
            .run(&self.report_options(&config), console)
            .await
    }
}
