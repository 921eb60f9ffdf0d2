use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::scrape::{self, Metric};
use crate::telemetry;
use crate::telemetry::ops::stats::Phase;

/// Scrape-only view: fetch the three metrics and report them without
/// touching the README.
#[derive(Args, Debug)]
pub struct StatsCmd {}

pub async fn run(cfg: &Config, _args: StatsCmd) -> Result<()> {
    let log = telemetry::stats();
    let _g = log.root_span().entered();

    let client = scrape::fetch::build_client()?;
    let bundle = {
        let _s = log.span(&Phase::Scrape).entered();
        scrape::collect(&client, &cfg.profiles).await
    };

    for metric in [Metric::Citations, Metric::Followers, Metric::Downloads] {
        match bundle.get(metric) {
            Some(value) => log.info(format!("{} = {}", metric.name(), value)),
            None => log.info(format!("{} = (absent)", metric.name())),
        }
    }
    log.info(format!("obtained {}/3 metrics", bundle.obtained()));

    if telemetry::config::json_mode() {
        log.result(&bundle)?;
    }
    Ok(())
}
