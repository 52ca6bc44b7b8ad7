//! Alerts panel — severity-tagged rows with a cycling severity filter.

use chrono::Local;
use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use logdeck_core::view::{ALERTS_EMPTY, alert_rows};
use logdeck_core::{Alert, PanelState};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

/// Filter cycle: unfiltered first, then severities high-to-low.
const SEVERITY_CYCLE: [Option<&str>; 5] = [
    None,
    Some("critical"),
    Some("high"),
    Some("medium"),
    Some("low"),
];

pub struct AlertsPanel {
    focused: bool,
    state: PanelState<Alert>,
    scroll: u16,
    filter_idx: usize,
}

impl AlertsPanel {
    pub fn new() -> Self {
        Self {
            focused: false,
            state: PanelState::Loading,
            scroll: 0,
            filter_idx: 0,
        }
    }

    fn filter(&self) -> Option<&'static str> {
        SEVERITY_CYCLE[self.filter_idx]
    }

    fn title(&self) -> String {
        match self.filter() {
            Some(sev) => format!(" Alerts ({sev}) "),
            None => " Alerts ".to_owned(),
        }
    }

    fn body_lines(&self) -> Vec<Line<'_>> {
        match &self.state {
            PanelState::Loading => vec![Line::styled("Loading...", theme::placeholder())],
            PanelState::Empty => vec![Line::styled(ALERTS_EMPTY, theme::placeholder())],
            PanelState::Failed(err) => vec![Line::styled(err.message.clone(), theme::error_text())],
            PanelState::Loaded(alerts) => {
                let today = Local::now().date_naive();
                let mut lines = Vec::new();
                for row in alert_rows(alerts, today) {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("[{}] ", row.severity.as_str().to_uppercase()),
                            theme::severity(&row.severity),
                        ),
                        Span::styled(row.title, theme::body()),
                    ]));
                    let mut detail = vec![
                        Span::styled(format!("  {}", row.timestamp), theme::key_hint()),
                        Span::raw("  "),
                        Span::styled(row.category, theme::key_hint()),
                        Span::raw("  "),
                        Span::styled(format!("priority {}", row.priority), theme::body()),
                        Span::raw("  "),
                        Span::styled(row.status.to_string(), theme::status(&row.status)),
                    ];
                    if let Some(desc) = row.description {
                        detail.push(Span::raw("  "));
                        detail.push(Span::styled(desc, theme::key_hint()));
                    }
                    lines.push(Line::from(detail));
                }
                lines
            }
        }
    }
}

impl Component for AlertsPanel {
    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::AlertsUpdated(state) => {
                self.state = state.clone();
            }
            Action::CycleSeverityFilter => {
                self.filter_idx = (self.filter_idx + 1) % SEVERITY_CYCLE.len();
                return Ok(Some(Action::FetchAlerts(self.filter())));
            }
            Action::ScrollDown if self.focused => {
                self.scroll = self.scroll.saturating_add(1);
            }
            Action::ScrollUp if self.focused => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .title(self.title())
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
