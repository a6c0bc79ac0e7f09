//! Dashboard-less replay: one JSON line per published snapshot

use anyhow::{bail, Result};
use pipeline_demo_sdk::TimelinePlayer;
use std::io::Write;
use tokio::sync::broadcast::error::RecvError;
use tracing::info;

/// Run the pipeline once and write every transition to `out`, stopping
/// after `complete`
///
/// Reads the player's transition channel rather than the latest-value
/// watch, so phases published in the same instant each get their own line.
/// Returns the number of snapshots written.
pub async fn replay<W: Write>(player: &TimelinePlayer, out: &mut W) -> Result<usize> {
    let mut transitions = player.transitions();
    player.start();

    let mut written = 0;
    loop {
        let snapshot = match transitions.recv().await {
            Ok(snapshot) => snapshot,
            Err(RecvError::Lagged(skipped)) => {
                bail!("headless output fell behind and lost {} transitions", skipped)
            }
            Err(RecvError::Closed) => break,
        };

        serde_json::to_writer(&mut *out, &snapshot)?;
        writeln!(out)?;
        out.flush()?;
        written += 1;

        if snapshot.phase.is_terminal() {
            break;
        }
    }

    info!(snapshots = written, "headless replay finished");
    Ok(written)
}
