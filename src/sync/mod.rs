use anyhow::{Context, Result};
use clap::Args;
use tokio::fs;

use crate::badge::patch::{self, PatchOutcome};
use crate::config::Config;
use crate::scrape::{self, Metric, StatBundle};
use crate::telemetry;
use crate::telemetry::ops::sync::Phase;

mod types;

use types::{FieldReport, SyncReport};

#[derive(Args)]
pub struct SyncCmd {
    /// Scrape and patch, but leave the README untouched
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

pub async fn run(cfg: &Config, args: SyncCmd) -> Result<()> {
    let log = telemetry::sync();
    let _g = log
        .root_span_kv([
            ("readme", cfg.readme.display().to_string()),
            ("dry_run", args.dry_run.to_string()),
        ])
        .entered();

    // An unreadable README is the one fatal case; everything upstream degrades.
    let doc = {
        let _s = log.span(&Phase::ReadDoc).entered();
        fs::read_to_string(&cfg.readme)
            .await
            .with_context(|| format!("reading {}", cfg.readme.display()))?
    };

    let client = scrape::fetch::build_client()?;
    let bundle = {
        let _s = log.span(&Phase::Scrape).entered();
        scrape::collect(&client, &cfg.profiles).await
    };
    log.info(format!(
        "results: citations={:?} followers={:?} downloads={:?} ({}/3 obtained)",
        bundle.citations,
        bundle.followers,
        bundle.downloads,
        bundle.obtained()
    ));

    let outcome = {
        let _s = log.span(&Phase::Patch).entered();
        patch::apply(&doc, &bundle)
    };
    for f in &outcome.fields {
        if f.matched {
            log.info_kv(
                &format!("🔄 {} -> {}", f.metric.name(), f.value),
                [("metric", f.metric.name().to_string()), ("value", f.value.clone())],
            );
        } else {
            log.warn(format!("{}: badge pattern not found in README", f.metric.name()));
        }
    }

    let written = outcome.changed && !args.dry_run;
    if written {
        let _s = log.span_kv(&Phase::WriteDoc, [("path", cfg.readme.display().to_string())]).entered();
        fs::write(&cfg.readme, &outcome.text)
            .await
            .with_context(|| format!("writing {}", cfg.readme.display()))?;
        log.info("✅ README updated");
    } else if outcome.changed {
        log.info("📝 dry-run — README left as is");
    } else {
        log.info("README already up to date");
    }

    if telemetry::config::json_mode() {
        let report = report(&bundle, &outcome, written);
        if args.dry_run { log.plan(&report)?; } else { log.result(&report)?; }
    }
    Ok(())
}

fn report(bundle: &StatBundle, outcome: &PatchOutcome, written: bool) -> SyncReport {
    let fields = [Metric::Citations, Metric::Followers, Metric::Downloads]
        .into_iter()
        .map(|m| FieldReport {
            metric: m.name(),
            value: bundle.get(m).map(String::from),
            applied: outcome.fields.iter().any(|f| f.metric == m && f.matched),
        })
        .collect();
    SyncReport { fields, changed: outcome.changed, written }
}
