//! flarewatch entry point.
//!
//! Exits 0 on any completed cycle, including skipped (feed down) and
//! undelivered (DAPNET down) ones; those retry on the next scheduled
//! run. Non-zero exits are reserved for unusable configuration.

use anyhow::{Context, Result};
use clap::Parser;

use flarewatch::alert::{AlertMonitor, CycleOutcome};
use flarewatch::bulletin;
use flarewatch::config::{Cli, Command, Config};
use flarewatch::notify::{DapnetSink, NotificationSink};
use flarewatch::source::HamQslSource;
use flarewatch::store::FileStateStore;
use flarewatch::tracing::prelude::*;
use flarewatch::types::XrayReading;

#[tokio::main]
async fn main() -> Result<()> {
    flarewatch::tracing::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or_default() {
        Command::Watch => watch(&cli.config).await,
        Command::Bulletin => send_bulletin(&cli.config).await,
    }
}

fn sink(config: &Config) -> Result<DapnetSink> {
    DapnetSink::new(
        config.dapnet_url.as_str(),
        config.user.as_str(),
        config.password.as_str(),
        config.callsign.clone(),
        config.transmitter_group.as_str(),
    )
    .context("building DAPNET client")
}

/// One alert cycle: fetch, compare against the threshold, page on a
/// phase edge, and commit the new phase once delivery is confirmed.
async fn watch(config: &Config) -> Result<()> {
    let threshold: XrayReading = config
        .threshold
        .parse()
        .with_context(|| format!("invalid threshold {:?}", config.threshold))?;

    let source = HamQslSource::new(config.feed_url.as_str()).context("building feed client")?;
    let store = FileStateStore::new(&config.state_file);
    let mut monitor = AlertMonitor::new(store, sink(config)?, threshold);

    match monitor.poll(&source).await {
        Ok(CycleOutcome::Raised) => info!("start alert delivered, phase is now active"),
        Ok(CycleOutcome::Cleared { .. }) => info!("end alert delivered, phase is back to normal"),
        Ok(CycleOutcome::Unchanged(phase)) => debug!("phase unchanged: {phase:?}"),
        Ok(CycleOutcome::Skipped) => debug!("cycle skipped"),
        Ok(CycleOutcome::DeliveryFailed(phase)) => {
            warn!("delivery failed, phase stays {phase:?} until the next run")
        }
        // A send succeeded but the commit did not; the next run will
        // page again. Worth a loud log, not a failing exit.
        Err(err) => error!("cycle did not commit: {err}"),
    }

    Ok(())
}

/// One solar-conditions bulletin, no state machine involved.
async fn send_bulletin(config: &Config) -> Result<()> {
    let source = HamQslSource::new(config.feed_url.as_str()).context("building feed client")?;

    let data = match source.fetch_solar_data().await {
        Ok(data) => data,
        Err(err) => {
            warn!("could not fetch solar feed: {err}");
            return Ok(());
        }
    };

    let message = bulletin::build_message(&data, bulletin::MAX_POCSAG_LEN);
    if message.is_empty() {
        warn!("feed produced an empty bulletin; nothing to send");
        return Ok(());
    }

    info!("bulletin: {message:?}");
    if let Err(err) = sink(config)?.send(&message, false).await {
        error!("bulletin not delivered: {err}");
    }

    Ok(())
}
