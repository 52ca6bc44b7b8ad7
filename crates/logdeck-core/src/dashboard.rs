// ── Dashboard client ──
//
// The stateful replacement for the original module-level globals:
// auto-refresh flag, one cancellable refresh task, and per-feed watch
// channels that consumers render from.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use logdeck_api::{Alert, ApiClient, LogSummary, TransportConfig};

use crate::chat::{ChatEntry, Transcript, SEND_FAILED};
use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::feed::{FeedError, FeedUpdate, PanelState};
use crate::view::{ALERTS_LOAD_FAILED, SUMMARIES_LOAD_FAILED};

const UPDATE_CHANNEL_SIZE: usize = 64;

/// The dashboard client.
///
/// Cheaply cloneable via `Arc` inner. Owns the polling scheduler and
/// all feed state; the TUI subscribes to the watch channels and never
/// fetches anything itself.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<DashboardInner>,
}

struct DashboardInner {
    api: ApiClient,
    config: DashboardConfig,
    auto_refresh: AtomicBool,
    summaries: watch::Sender<PanelState<LogSummary>>,
    alerts: watch::Sender<PanelState<Alert>>,
    transcript: watch::Sender<Transcript>,
    /// Set once at least one critical-open alert has been seen; a later
    /// count of zero leaves the previous value in place.
    critical_badge: watch::Sender<Option<usize>>,
    update_tx: broadcast::Sender<FeedUpdate>,
    cancel: Mutex<Option<CancellationToken>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Dashboard {
    /// Build a dashboard from configuration. Does not fetch anything --
    /// call [`start()`](Self::start) to trigger the initial loads and
    /// the refresh schedule.
    pub fn new(config: DashboardConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let api = ApiClient::new(config.backend.clone(), &transport)?;
        Ok(Self::with_client(api, config))
    }

    /// Build from an existing [`ApiClient`] (used by tests).
    pub fn with_client(api: ApiClient, config: DashboardConfig) -> Self {
        let (summaries, _) = watch::channel(PanelState::Loading);
        let (alerts, _) = watch::channel(PanelState::Loading);
        let (transcript, _) = watch::channel(Transcript::default());
        let (critical_badge, _) = watch::channel(None);
        let (update_tx, _) = broadcast::channel(UPDATE_CHANNEL_SIZE);
        let auto_refresh = AtomicBool::new(config.auto_refresh);

        Self {
            inner: Arc::new(DashboardInner {
                api,
                config,
                auto_refresh,
                summaries,
                alerts,
                transcript,
                critical_badge,
                update_tx,
                cancel: Mutex::new(None),
                task: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    // ── State observation ────────────────────────────────────────────

    pub fn summaries(&self) -> watch::Receiver<PanelState<LogSummary>> {
        self.inner.summaries.subscribe()
    }

    pub fn alerts(&self) -> watch::Receiver<PanelState<Alert>> {
        self.inner.alerts.subscribe()
    }

    pub fn transcript(&self) -> watch::Receiver<Transcript> {
        self.inner.transcript.subscribe()
    }

    pub fn critical_badge(&self) -> watch::Receiver<Option<usize>> {
        self.inner.critical_badge.subscribe()
    }

    /// Subscribe to change notifications across all feeds.
    pub fn updates(&self) -> broadcast::Receiver<FeedUpdate> {
        self.inner.update_tx.subscribe()
    }

    // ── Scheduler lifecycle ──────────────────────────────────────────

    pub fn auto_refresh(&self) -> bool {
        self.inner.auto_refresh.load(Ordering::Relaxed)
    }

    pub fn set_auto_refresh(&self, enabled: bool) {
        self.inner.auto_refresh.store(enabled, Ordering::Relaxed);
        debug!(enabled, "auto-refresh toggled");
    }

    /// Start the scheduler: trigger the three initial loads, then
    /// re-fetch summaries and alerts on every interval tick while the
    /// auto-refresh flag is set. Chat history is loaded once and never
    /// re-polled.
    ///
    /// Idempotent restart: any previously running scheduler is
    /// cancelled before the new one spawns. Must be called from within
    /// a tokio runtime.
    pub fn start(&self) {
        let cancel = CancellationToken::new();
        if let Some(prev) = self
            .inner
            .cancel
            .lock()
            .expect("cancel lock poisoned")
            .replace(cancel.clone())
        {
            prev.cancel();
        }

        let dash = self.clone();
        let handle = tokio::spawn(async move {
            // Initial loads. Independent feeds: one failing must not
            // stop the others, so they run concurrently and each maps
            // its own outcome.
            tokio::join!(
                dash.load_summaries(),
                dash.load_alerts(None),
                dash.load_chat_history(),
            );

            let mut interval = tokio::time::interval(dash.inner.config.refresh_interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            interval.tick().await; // consume the immediate first tick

            info!(
                interval_secs = dash.inner.config.refresh_interval.as_secs(),
                "refresh scheduler started"
            );

            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = interval.tick() => {
                        if dash.auto_refresh() {
                            tokio::join!(dash.load_summaries(), dash.load_alerts(None));
                        }
                    }
                }
            }
        });

        if let Some(prev) = self
            .inner
            .task
            .lock()
            .expect("task lock poisoned")
            .replace(handle)
        {
            // Cancelled above; dropping the handle detaches the old task
            // while it winds down.
            drop(prev);
        }
    }

    /// Stop the scheduler. In-flight fetches complete and publish
    /// normally (last write wins); no further ticks fire.
    pub fn stop(&self) {
        if let Some(cancel) = self
            .inner
            .cancel
            .lock()
            .expect("cancel lock poisoned")
            .take()
        {
            cancel.cancel();
        }
        debug!("refresh scheduler stopped");
    }

    // ── Feed operations ──────────────────────────────────────────────

    /// Fetch the most recent summaries and replace the panel state.
    pub async fn load_summaries(&self) {
        let state = match self
            .inner
            .api
            .list_summaries(self.inner.config.summaries_limit)
            .await
        {
            Ok(items) => PanelState::from_items(items),
            Err(e) => {
                warn!(error = %e, "failed to load summaries");
                PanelState::Failed(FeedError::classify(&e, SUMMARIES_LOAD_FAILED))
            }
        };
        let _ = self.inner.summaries.send_replace(state);
        let _ = self.inner.update_tx.send(FeedUpdate::Summaries);
    }

    /// Fetch the most recent alerts, optionally severity-filtered, and
    /// replace the panel state. Recomputes the critical badge: a
    /// positive critical-open count overwrites the badge; zero leaves
    /// it untouched.
    pub async fn load_alerts(&self, severity: Option<&str>) {
        let state = match self
            .inner
            .api
            .list_alerts(self.inner.config.alerts_limit, severity)
            .await
        {
            Ok(page) => {
                let critical = crate::view::critical_open_count(&page.alerts);
                if critical > 0 {
                    let _ = self.inner.critical_badge.send_replace(Some(critical));
                    let _ = self.inner.update_tx.send(FeedUpdate::CriticalBadge);
                }
                PanelState::from_items(page.alerts)
            }
            Err(e) => {
                warn!(error = %e, "failed to load alerts");
                PanelState::Failed(FeedError::classify(&e, ALERTS_LOAD_FAILED))
            }
        };
        let _ = self.inner.alerts.send_replace(state);
        let _ = self.inner.update_tx.send(FeedUpdate::Alerts);
    }

    /// One filtered alerts fetch (e.g. `severity = "critical"`). The
    /// scheduler's own refreshes stay unfiltered.
    pub async fn filter_alerts(&self, severity: &str) {
        self.load_alerts(Some(severity)).await;
    }

    /// Manual refresh of both polled feeds.
    pub async fn refresh(&self) {
        tokio::join!(self.load_summaries(), self.load_alerts(None));
    }

    /// Ask the backend to summarize the last hour. On success the
    /// summaries feed is re-fetched; failures are logged only -- there
    /// is deliberately no panel feedback.
    pub async fn generate_summary(&self) {
        match self.inner.api.generate_summary(1).await {
            Ok(()) => self.load_summaries().await,
            Err(e) => warn!(error = %e, "failed to generate summary"),
        }
    }

    // ── Chat ─────────────────────────────────────────────────────────

    /// Send a chat message.
    ///
    /// Whitespace-only input is a complete no-op: no transcript change,
    /// no request. Otherwise the trimmed user entry is appended and
    /// published before the POST; on success the bot response follows,
    /// on failure a synthetic error entry does. The user entry is never
    /// rolled back.
    pub async fn send_message(&self, raw: &str) {
        let message = raw.trim();
        if message.is_empty() {
            return;
        }

        self.push_entry(ChatEntry::user(message));

        match self.inner.api.send_chat(message).await {
            Ok(reply) => self.push_entry(ChatEntry::bot(reply.bot_response)),
            Err(e) => {
                warn!(error = %e, "failed to send chat message");
                self.push_entry(ChatEntry::bot(SEND_FAILED));
            }
        }
    }

    /// Load the stored chat history, replacing the transcript.
    /// Failures are logged and leave the transcript untouched.
    pub async fn load_chat_history(&self) {
        match self
            .inner
            .api
            .chat_history(self.inner.config.chat_history_limit)
            .await
        {
            Ok(history) => {
                let transcript = Transcript::from_history(&history.messages);
                let _ = self.inner.transcript.send_replace(transcript);
                let _ = self.inner.update_tx.send(FeedUpdate::Chat);
            }
            Err(e) => warn!(error = %e, "failed to load chat history"),
        }
    }

    fn push_entry(&self, entry: ChatEntry) {
        self.inner.transcript.send_modify(|t| t.push(entry));
        let _ = self.inner.update_tx.send(FeedUpdate::Chat);
    }
}
