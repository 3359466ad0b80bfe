//! timeplay: timeline playback control, driven from the terminal.
//!
//! Run with:  `RUST_LOG=info timeplay [update.json]`
//!
//! Type `play`, `pause`, `previous`, `next`, `select <position>` or `quit`.

use anyhow::{Context, Result};
use timeplay_config::{default_path, SettingsWatcher};
use timeplay_core::{Message, UpdateOptions};
use timeplay_host::{parse_command, Driver, TracingHost};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Data view used when no update file is given: five yearly periods.
const SAMPLE_UPDATE: &str = r#"{
    "dataViews": [{
        "categorical": { "categories": [{
            "source": { "queryName": "Calendar.Year", "displayName": "Year" },
            "values": [2019, 2020, 2021, 2022, 2023]
        }]}
    }]
}"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("timeplay v{} starting", env!("CARGO_PKG_VERSION"));

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE_UPDATE.to_string(),
    };
    let update: UpdateOptions = serde_json::from_str(&raw).context("parsing update options")?;

    let (tx, rx) = mpsc::channel(32);
    tx.send(Message::Update(update)).await?;

    let settings_path = default_path();
    let _watcher = SettingsWatcher::spawn(&settings_path, tx.clone())
        .map_err(|e| tracing::warn!("Settings changes won't be picked up: {e}"))
        .ok();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_command(&line) {
                Some(msg) => {
                    if tx.send(msg).await.is_err() {
                        break;
                    }
                }
                None => tracing::warn!("unknown command: {line:?}"),
            }
        }
        let _ = tx.send(Message::Shutdown).await;
    });

    Driver::new(TracingHost)
        .with_settings_file(settings_path)
        .run(rx)
        .await;
    Ok(())
}
