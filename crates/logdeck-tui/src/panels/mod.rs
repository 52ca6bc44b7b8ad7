//! The three dashboard panels plus focus bookkeeping.

pub mod alerts;
pub mod chat;
pub mod summaries;

pub use alerts::AlertsPanel;
pub use chat::ChatPanel;
pub use summaries::SummariesPanel;

/// Identifies one of the fixed panels on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Summaries,
    Alerts,
    Chat,
}

impl PanelId {
    pub const ALL: [Self; 3] = [Self::Summaries, Self::Alerts, Self::Chat];

    /// Tab order: Summaries → Alerts → Chat → Summaries.
    pub fn next(self) -> Self {
        match self {
            Self::Summaries => Self::Alerts,
            Self::Alerts => Self::Chat,
            Self::Chat => Self::Summaries,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Summaries => Self::Chat,
            Self::Alerts => Self::Summaries,
            Self::Chat => Self::Alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_cycles_through_all_panels() {
        let mut id = PanelId::Summaries;
        for _ in 0..PanelId::ALL.len() {
            id = id.next();
        }
        assert_eq!(id, PanelId::Summaries);
        assert_eq!(PanelId::Summaries.prev(), PanelId::Chat);
    }
}
