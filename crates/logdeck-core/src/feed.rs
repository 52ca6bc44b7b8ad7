//! Typed per-feed fetch outcomes.
//!
//! The original design swallowed every failure at the fetch site; here
//! each fetch produces a [`PanelState`] the presentation layer can
//! render, and the error kind stays available for logging or display.

/// What went wrong with a feed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    /// Connection-level failure (refused, DNS, timeout).
    Transport,
    /// The backend answered with a non-2xx status.
    Server,
    /// A 2xx body that did not decode.
    Decode,
}

/// A feed fetch failure plus the placeholder text the panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    pub kind: FeedErrorKind,
    /// User-visible placeholder (e.g. "Failed to load alerts").
    pub message: String,
}

impl FeedError {
    /// Classify an API error under the given panel placeholder.
    pub fn classify(err: &logdeck_api::Error, message: &str) -> Self {
        let kind = match err {
            logdeck_api::Error::Transport(_) | logdeck_api::Error::InvalidUrl(_) => {
                FeedErrorKind::Transport
            }
            logdeck_api::Error::Status { .. } => FeedErrorKind::Server,
            logdeck_api::Error::Decode { .. } => FeedErrorKind::Decode,
        };
        Self {
            kind,
            message: message.to_owned(),
        }
    }
}

/// Renderable state of one feed panel.
///
/// Every fetch fully replaces the previous value -- whichever response
/// is processed last wins, with no ordering token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState<T> {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// The backend returned an empty result.
    Empty,
    /// Fetched items, in backend order.
    Loaded(Vec<T>),
    /// Fetch failed; stale content may still be on screen elsewhere.
    Failed(FeedError),
}

impl<T> PanelState<T> {
    /// Map a fetched vec to `Empty` or `Loaded`.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(items)
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Notification that a feed's watch value changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedUpdate {
    Summaries,
    Alerts,
    Chat,
    CriticalBadge,
}
