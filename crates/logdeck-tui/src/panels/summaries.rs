//! Log summaries panel — newest-first summary blocks with anomaly notices.

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use logdeck_core::view::{SUMMARIES_EMPTY, summary_blocks};
use logdeck_core::{LogSummary, PanelState};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct SummariesPanel {
    focused: bool,
    state: PanelState<LogSummary>,
    scroll: u16,
}

impl SummariesPanel {
    pub fn new() -> Self {
        Self {
            focused: false,
            state: PanelState::Loading,
            scroll: 0,
        }
    }

    fn body_lines(&self) -> Vec<Line<'_>> {
        match &self.state {
            PanelState::Loading => vec![Line::styled("Loading...", theme::placeholder())],
            PanelState::Empty => vec![Line::styled(SUMMARIES_EMPTY, theme::placeholder())],
            PanelState::Failed(err) => vec![Line::styled(err.message.clone(), theme::error_text())],
            PanelState::Loaded(summaries) => {
                let mut lines = Vec::new();
                for block in summary_blocks(summaries) {
                    lines.push(Line::styled(block.window, theme::title_style()));
                    lines.push(Line::from(vec![
                        Span::styled(format!("{} logs", block.total_logs), theme::body()),
                        Span::raw("  "),
                        Span::styled(format!("{} errors", block.error_count), theme::error_text()),
                        Span::raw("  "),
                        Span::styled(format!("{} warnings", block.warning_count), theme::anomaly()),
                    ]));
                    if !block.summary_text.is_empty() {
                        lines.push(Line::styled(block.summary_text, theme::body()));
                    }
                    if let Some(notice) = block.anomaly_notice {
                        lines.push(Line::styled(notice, theme::anomaly()));
                    }
                    lines.push(Line::from(""));
                }
                lines
            }
        }
    }
}

impl Component for SummariesPanel {
    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SummariesUpdated(state) => {
                self.state = state.clone();
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
            .title(" Log Summaries ")
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
