// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use twilio_call_reporter::cli::{CliParser, Command};
use twilio_call_reporter::config::Config;
use twilio_call_reporter::console::Console;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let cli = CliParser::parse();
    init_tracing(cli.verbose);
    debug!("Processing {:?}", cli);

    let mut console = Console::stdio();
    let status = match &cli.cmd {
        Command::ListCalls(args) => args.execute(Config::from_env(), &mut console).await?,
    };

    Ok(status.into())
}
