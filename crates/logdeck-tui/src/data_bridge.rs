//! Data bridge — connects [`Dashboard`] watch channels to TUI actions.
//!
//! Runs as a background task: starts the dashboard scheduler, pushes
//! initial snapshots, then forwards every feed change as an [`Action`]
//! through the TUI's action channel.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use logdeck_core::Dashboard;

use crate::action::Action;

/// Bridge the dashboard's reactive feed state into the action loop.
///
/// Starts the scheduler (initial loads + interval refresh), sends one
/// snapshot per feed so panels have data immediately, then loops
/// forwarding every change. Stops the scheduler on cancellation.
pub async fn run_data_bridge(
    dashboard: Dashboard,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut summaries = dashboard.summaries();
    let mut alerts = dashboard.alerts();
    let mut transcript = dashboard.transcript();
    let mut badge = dashboard.critical_badge();

    dashboard.start();

    // Initial snapshots so panels render Loading states right away.
    let _ = action_tx.send(Action::SummariesUpdated(
        summaries.borrow_and_update().clone(),
    ));
    let _ = action_tx.send(Action::AlertsUpdated(alerts.borrow_and_update().clone()));
    let _ = action_tx.send(Action::TranscriptUpdated(
        transcript.borrow_and_update().clone(),
    ));

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = summaries.changed() => {
                let state = summaries.borrow_and_update().clone();
                let _ = action_tx.send(Action::SummariesUpdated(state));
            }
            Ok(()) = alerts.changed() => {
                let state = alerts.borrow_and_update().clone();
                let _ = action_tx.send(Action::AlertsUpdated(state));
            }
            Ok(()) = transcript.changed() => {
                let t = transcript.borrow_and_update().clone();
                let _ = action_tx.send(Action::TranscriptUpdated(t));
            }
            Ok(()) = badge.changed() => {
                let count = *badge.borrow_and_update();
                let _ = action_tx.send(Action::BadgeUpdated(count));
            }
        }
    }

    dashboard.stop();
    debug!("data bridge shut down");
}
