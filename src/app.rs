use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use std::io::{self, Write};
use tweet_file::cli::{normalize_args, Cli};
use tweet_file::client::TwitterClient;
use tweet_file::config::Config;

pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let config = Config::from(cli);
    log::debug!("running with {config:?}");

    let message = tweet_file::prepare(&config)?;

    if config.dry_run {
        log::info!("Dry run, not posting ({} bytes)", message.len());
        let mut stdout = io::stdout();
        stdout.write_all(message.as_str().as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let client = TwitterClient::new(&config.credentials, &config.api_url)
        .context("Failed to set up the Twitter client")?;
    let posted = tweet_file::publish(&client, &message)?;

    log::debug!("Created status {}", posted.id);
    log::info!("Status updated with: {}", message.as_str());
    Ok(())
}
