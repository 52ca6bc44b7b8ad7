//! Chat panel — transcript view plus the message input line.

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use logdeck_core::{ChatRole, Transcript};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct ChatPanel {
    focused: bool,
    transcript: Transcript,
    input: Input,
    /// Lines scrolled up from the bottom of the transcript.
    scroll_from_bottom: u16,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            focused: false,
            transcript: Transcript::default(),
            input: Input::default(),
            scroll_from_bottom: 0,
        }
    }

    fn transcript_lines(&self) -> Vec<Line<'_>> {
        if self.transcript.is_empty() {
            return vec![Line::styled(
                "Ask about your logs (e.g. \"show recent errors\")",
                theme::placeholder(),
            )];
        }
        self.transcript
            .entries()
            .iter()
            .map(|entry| match entry.role {
                ChatRole::User => Line::from(vec![
                    Span::styled("You: ", theme::chat_user()),
                    Span::styled(entry.text.as_str(), theme::body()),
                ]),
                ChatRole::Bot => Line::from(vec![
                    Span::styled("Bot: ", theme::chat_bot()),
                    Span::styled(entry.text.as_str(), theme::body()),
                ]),
            })
            .collect()
    }
}

impl Component for ChatPanel {
    /// Enter submits the trimmed input; whitespace-only input is left in
    /// place untouched. Every other key edits the input line.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter => {
                let message = self.input.value().trim().to_owned();
                if message.is_empty() {
                    return Ok(None);
                }
                self.input.reset();
                self.scroll_from_bottom = 0;
                Ok(Some(Action::SendMessage(message)))
            }
            _ => {
                self.input.handle_event(&CrosstermEvent::Key(key));
                Ok(None)
            }
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::TranscriptUpdated(transcript) => {
                self.transcript = transcript.clone();
                // New content snaps the view back to the latest entry.
                self.scroll_from_bottom = 0;
            }
            Action::ScrollUp if self.focused => {
                self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(1);
            }
            Action::ScrollDown if self.focused => {
                self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(1);
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
            .title(" Chat ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let transcript_area = layout[0];
        let input_area = layout[1];

        // Anchor the transcript to the bottom, minus any manual scroll.
        let lines = self.transcript_lines();
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let offset = total
            .saturating_sub(transcript_area.height)
            .saturating_sub(self.scroll_from_bottom);
        let transcript = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0));
        frame.render_widget(transcript, transcript_area);

        let prompt = "> ";
        let input_line = Line::from(vec![
            Span::styled(prompt, theme::key_hint_key()),
            Span::styled(self.input.value(), theme::body()),
        ]);
        frame.render_widget(Paragraph::new(input_line), input_area);

        if self.focused {
            let cursor_x = input_area.x
                + u16::try_from(prompt.len() + self.input.visual_cursor()).unwrap_or(u16::MAX);
            frame.set_cursor_position(Position::new(
                cursor_x.min(input_area.right().saturating_sub(1)),
                input_area.y,
            ));
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;

    fn type_text(panel: &mut ChatPanel, text: &str) {
        for c in text.chars() {
            panel
                .handle_key_event(KeyEvent::from(KeyCode::Char(c)))
                .unwrap();
        }
    }

    #[test]
    fn enter_submits_the_trimmed_input_and_clears_it() {
        let mut panel = ChatPanel::new();
        type_text(&mut panel, "  show errors  ");

        let action = panel
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();

        match action {
            Some(Action::SendMessage(text)) => assert_eq!(text, "show errors"),
            other => panic!("expected SendMessage, got {other:?}"),
        }
        assert_eq!(panel.input.value(), "");
    }

    #[test]
    fn enter_on_whitespace_is_a_noop_and_keeps_the_input() {
        let mut panel = ChatPanel::new();
        type_text(&mut panel, "   ");

        let action = panel
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();

        assert!(action.is_none());
        assert_eq!(panel.input.value(), "   ");
    }

    #[test]
    fn transcript_update_resets_manual_scroll() {
        let mut panel = ChatPanel::new();
        panel.set_focused(true);
        panel.update(&Action::ScrollUp).unwrap();
        panel.update(&Action::ScrollUp).unwrap();
        assert_eq!(panel.scroll_from_bottom, 2);

        panel
            .update(&Action::TranscriptUpdated(Transcript::default()))
            .unwrap();
        assert_eq!(panel.scroll_from_bottom, 0);
    }
}
