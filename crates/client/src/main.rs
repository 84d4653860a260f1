//! Raid helper binary.
//!
//! Main entry point: loads content, replays a scenario through the runtime,
//! and prints the raid guide as the encounter unfolds.
//!
//! # Examples
//!
//! ```bash
//! # Bundled sample raid
//! cargo run -p raid-helper
//!
//! # Own recording, compact output, waiting for the timeout at the end
//! RAID_SCENARIO=./raid.ron RAID_COMPACT_MODE=true RAID_HOLD_OPEN=true cargo run -p raid-helper
//! ```

use anyhow::Result;
use raid_helper::{ClientConfig, ConsolePresenter, ScriptedUpdateSource, logging};
use raid_runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    // 3. Load content
    let factory = config.content_factory();
    let tables = config.load_tables(&factory)?;
    let session = config.load_session_config(&factory)?;
    let scenario = config.load_scenario(&factory)?;

    tracing::info!(
        scenario = %config.scenario,
        data_dir = %factory.data_dir().display(),
        max_attackers = session.attacker_cap(),
        listen_timeout_secs = session.listen_timeout_secs,
        "Starting raid helper"
    );

    // 4. Build runtime
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            session,
            ..RuntimeConfig::default()
        })
        .tables(tables)
        .presenter(ConsolePresenter::new(config.compact_mode))
        .build()?;

    // 5. Replay the encounter
    let source = ScriptedUpdateSource::new(scenario.updates, config.hold_open);
    let outcome = runtime.run_encounter(scenario.encounter, source).await?;

    tracing::info!(outcome = outcome.label(), "Raid helper finished");
    Ok(())
}
