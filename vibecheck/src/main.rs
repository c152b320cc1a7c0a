//! VibeCheck Client Entry Point
//!
//! Submits a daily mood vote (`vote <happy|meh|sad>`) or prints the
//! aggregated counts and geotagged points for the trailing 24 hours
//! (`results`, the default).

use chrono::Utc;
use dotenv::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vibecheck::{aggregate, Dependencies, VibeError};
use vibecheck_shared::{MoodKey, MOOD_OPTIONS};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vibecheck=info,vibecheck_repository=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), VibeError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let deps = match Dependencies::new() {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("vote") => {
            let mood_arg = args.next().ok_or_else(|| VibeError::config(usage()))?;
            let mood = MoodKey::parse(&mood_arg)
                .ok_or_else(|| VibeError::config(format!("unknown mood: {}", mood_arg)))?;
            run_vote(&deps, mood).await
        }
        Some("results") | None => run_results(&deps).await,
        Some(other) => Err(VibeError::config(format!(
            "unknown command: {}; {}",
            other,
            usage()
        ))),
    }
}

fn usage() -> String {
    let keys = MOOD_OPTIONS
        .iter()
        .map(|option| option.key.as_str())
        .collect::<Vec<_>>()
        .join("|");
    format!("usage: vibecheck [results | vote <{}>]", keys)
}

/// Submit one vote, respecting the daily lock.
async fn run_vote(deps: &Dependencies, mood: MoodKey) -> Result<(), VibeError> {
    if deps.lock.has_voted_today()? {
        let reset_ms = deps.lock.vote_reset_timestamp()?;
        warn!(reset_ms, "Already voted today");
        println!("Already voted today. Come back tomorrow.");
        return Ok(());
    }

    // Best-effort: a missing location is a normal outcome.
    let location = deps.locator.lookup().await;
    let document_id = deps.store.submit_vote(mood, location.as_ref()).await?;
    deps.lock.mark_voted_today()?;

    info!(
        document_id = %document_id,
        mood = mood.as_str(),
        located = location.is_some(),
        "Vote recorded"
    );
    println!("Voted {} {}", mood.emoji(), mood.label());
    Ok(())
}

/// Fetch all raw records and print the aggregated view.
async fn run_results(deps: &Dependencies) -> Result<(), VibeError> {
    let records = deps.store.fetch_all().await?;
    let data = aggregate(&records, Utc::now().timestamp_millis());

    info!(
        records = records.len(),
        counted = data.counts.total(),
        points = data.points.len(),
        "Aggregated recent votes"
    );
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
