//! Application core — event loop, panel focus, action dispatch.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use logdeck_core::Dashboard;

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge::run_data_bridge;
use crate::event::{Event, EventReader};
use crate::panels::{AlertsPanel, ChatPanel, PanelId, SummariesPanel};
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    dashboard: Dashboard,
    focus: PanelId,
    summaries: SummariesPanel,
    alerts: AlertsPanel,
    chat: ChatPanel,
    /// Critical-open alert count; sticky once set.
    badge: Option<usize>,
    running: bool,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            dashboard,
            focus: PanelId::Summaries,
            summaries: SummariesPanel::new(),
            alerts: AlertsPanel::new(),
            chat: ChatPanel::new(),
            badge: None,
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
        }
    }

    fn panel_mut(&mut self, id: PanelId) -> &mut dyn Component {
        match id {
            PanelId::Summaries => &mut self.summaries,
            PanelId::Alerts => &mut self.alerts,
            PanelId::Chat => &mut self.chat,
        }
    }

    fn set_focus(&mut self, target: PanelId) {
        if target != self.focus {
            let current = self.focus;
            self.panel_mut(current).set_focused(false);
            self.focus = target;
        }
        self.panel_mut(target).set_focused(true);
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.set_focus(self.focus);

        // Background bridge: scheduler + feed changes → actions.
        let bridge_cancel = CancellationToken::new();
        let bridge = tokio::spawn(run_data_bridge(
            self.dashboard.clone(),
            self.action_tx.clone(),
            bridge_cancel.clone(),
        ));

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                // ratatui picks up the new size on the next draw
                Event::Resize(_, _) => {
                    self.action_tx.send(Action::Render)?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        bridge_cancel.cancel();
        let _ = bridge.await;
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here; when
    /// the chat panel is focused, printable keys belong to its input.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Keys that work everywhere, including inside the chat input
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }
        match key.code {
            KeyCode::Tab => return Ok(Some(Action::FocusNext)),
            KeyCode::BackTab => return Ok(Some(Action::FocusPrev)),
            _ => {}
        }

        if self.focus == PanelId::Chat {
            return self.chat.handle_key_event(key);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char('r')) => return Ok(Some(Action::Refresh)),
            (KeyModifiers::NONE, KeyCode::Char('g')) => return Ok(Some(Action::GenerateSummary)),
            (KeyModifiers::NONE, KeyCode::Char('a')) => {
                return Ok(Some(Action::ToggleAutoRefresh));
            }
            (KeyModifiers::NONE, KeyCode::Char('f')) => {
                return Ok(Some(Action::CycleSeverityFilter));
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                return Ok(Some(Action::ScrollDown));
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                return Ok(Some(Action::ScrollUp));
            }
            _ => {}
        }

        let focus = self.focus;
        self.panel_mut(focus).handle_key_event(key)
    }

    /// Process a single action — update app state and propagate to panels.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::FocusNext => {
                self.set_focus(self.focus.next());
            }

            Action::FocusPrev => {
                self.set_focus(self.focus.prev());
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::Refresh => {
                let dash = self.dashboard.clone();
                tokio::spawn(async move { dash.refresh().await });
            }

            Action::GenerateSummary => {
                let dash = self.dashboard.clone();
                tokio::spawn(async move { dash.generate_summary().await });
            }

            Action::ToggleAutoRefresh => {
                self.dashboard.set_auto_refresh(!self.dashboard.auto_refresh());
            }

            Action::FetchAlerts(severity) => {
                let dash = self.dashboard.clone();
                let severity = *severity;
                tokio::spawn(async move {
                    match severity {
                        Some(sev) => dash.filter_alerts(sev).await,
                        None => dash.load_alerts(None).await,
                    }
                });
            }

            Action::SendMessage(message) => {
                let dash = self.dashboard.clone();
                let message = message.clone();
                tokio::spawn(async move { dash.send_message(&message).await });
            }

            Action::BadgeUpdated(count) => {
                self.badge = *count;
            }

            // Scroll stays with the focused panel only
            Action::ScrollUp | Action::ScrollDown => {
                let focus = self.focus;
                if let Some(follow_up) = self.panel_mut(focus).update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }

            // Render is handled in the main loop, not here
            Action::Render | Action::Tick => {}

            // Data updates and the filter cycle fan out to every panel
            other => {
                for id in PanelId::ALL {
                    if let Some(follow_up) = self.panel_mut(id).update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [summaries | alerts] over [chat] over [status bar]
        let rows = Layout::vertical([
            Constraint::Percentage(55),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

        self.summaries.render(frame, columns[0]);
        self.alerts.render(frame, columns[1]);
        self.chat.render(frame, rows[1]);
        self.render_status_bar(frame, rows[2]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Bottom status bar: auto-refresh state, critical badge, key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let auto = if self.dashboard.auto_refresh() {
            Span::styled("● auto-refresh on", Style::default().fg(theme::GREEN))
        } else {
            Span::styled("○ auto-refresh off", Style::default().fg(theme::BORDER_GRAY))
        };

        let mut spans = vec![Span::raw(" "), auto];

        // Sticky: rendered from the moment it is first set, never removed.
        if let Some(count) = self.badge {
            spans.push(Span::styled(
                format!("  🔴 {count} critical"),
                theme::badge(),
            ));
        }

        spans.push(Span::styled(
            " │ Tab focus  r refresh  g generate  a auto  f filter  ? help  q quit",
            theme::key_hint(),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 16u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let hint = |k: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {k:<10}"), theme::key_hint_key()),
                Span::styled(desc, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            hint("Tab", "Cycle panel focus"),
            hint("j/k ↑/↓", "Scroll focused panel"),
            Line::from(""),
            hint("r", "Refresh summaries and alerts"),
            hint("g", "Generate a summary of the last hour"),
            hint("a", "Toggle auto-refresh"),
            hint("f", "Cycle the alerts severity filter"),
            Line::from(""),
            hint("Enter", "Send chat message (chat focused)"),
            hint("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "                     Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use logdeck_api::ApiClient;
    use logdeck_core::DashboardConfig;

    fn app() -> App {
        let api = ApiClient::from_reqwest("http://127.0.0.1:1", reqwest::Client::new())
            .expect("valid test URL");
        App::new(Dashboard::with_client(api, DashboardConfig::default()))
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        app.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    #[test]
    fn command_keys_map_to_dashboard_actions() {
        let mut app = app();
        assert!(matches!(press(&mut app, KeyCode::Char('r')), Some(Action::Refresh)));
        assert!(matches!(
            press(&mut app, KeyCode::Char('g')),
            Some(Action::GenerateSummary)
        ));
        assert!(matches!(
            press(&mut app, KeyCode::Char('a')),
            Some(Action::ToggleAutoRefresh)
        ));
        assert!(matches!(
            press(&mut app, KeyCode::Char('f')),
            Some(Action::CycleSeverityFilter)
        ));
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit)));
    }

    #[test]
    fn chat_focus_captures_printable_keys() {
        let mut app = app();
        app.set_focus(PanelId::Chat);

        // 'q' types into the input instead of quitting.
        assert!(press(&mut app, KeyCode::Char('q')).is_none());
        // Tab still cycles focus.
        assert!(matches!(press(&mut app, KeyCode::Tab), Some(Action::FocusNext)));
        // Ctrl+C still quits.
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            app.handle_key_event(ctrl_c).unwrap(),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn badge_is_sticky_once_set() {
        let mut app = app();
        app.process_action(&Action::BadgeUpdated(Some(3))).unwrap();
        assert_eq!(app.badge, Some(3));
    }
}
