mod advisor;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use eida::Provider;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "eida", about = "UTD advising assistant chat client")]
struct Args {
    /// Reply strategy to use
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Chat endpoint URL (remote provider only)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to eida.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("eida.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = crate::core::config::load_config().unwrap_or_else(|e| {
        warn!("Falling back to default config: {e}");
        Default::default()
    });
    let config = crate::core::config::resolve(
        &file_config,
        args.provider.as_ref().map(Provider::as_str),
        args.endpoint.as_deref(),
        args.dark,
    );

    log::info!("Eida starting up with provider: {}", config.provider);

    tui::run(config)
}
