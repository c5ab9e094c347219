//! Conversation pane: message history above a single-line input.

use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::props::Role;
use crate::kernel::services::ports::{ChatHandle, ChatProvider, ChatStatus};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const INPUT_PROMPT: &str = "> ";
const EMPTY_HINT: &str = "Describe the component you want to build.";
const GENERATING: &str = "generating…";

pub struct ChatPanel {
    chat: ChatHandle,
    theme: UiTheme,
    focused: bool,
    cursor: Option<(u16, u16)>,
}

impl ChatPanel {
    pub fn new(chat: ChatHandle, theme: UiTheme) -> Self {
        Self {
            chat,
            theme,
            focused: false,
            cursor: None,
        }
    }

    pub fn chat(&self) -> &ChatHandle {
        &self.chat
    }

    pub fn set_theme(&mut self, theme: UiTheme) {
        self.theme = theme;
    }

    fn history_lines(&self, width: usize) -> Vec<Line<'static>> {
        let chat = self.chat.borrow();
        let messages = chat.messages();
        if messages.is_empty() {
            return wrap(EMPTY_HINT, width)
                .into_iter()
                .map(|s| Line::from(Span::styled(s, Style::default().fg(self.theme.muted_fg))))
                .collect();
        }

        let mut lines = Vec::new();
        for (idx, message) in messages.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            let label_style = match message.role {
                Role::User => Style::default().fg(self.theme.user_fg),
                Role::Assistant => Style::default().fg(self.theme.assistant_fg),
                Role::System | Role::Other => Style::default().fg(self.theme.muted_fg),
            }
            .add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled(
                message.role.label().to_string(),
                label_style,
            )));
            for raw in message.content.lines() {
                lines.extend(wrap(raw, width).into_iter().map(Line::from));
            }
        }

        if chat.status() == ChatStatus::Submitted {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                GENERATING,
                Style::default().fg(self.theme.muted_fg),
            )));
        }
        lines
    }
}

/// Greedy wrap by display width, breaking inside words only when a word is wider
/// than the line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_word_bounds() {
        let w = word.width();
        if current_width + w > width && !current.is_empty() {
            out.push(std::mem::take(&mut current).trim_end().to_string());
            current_width = 0;
            if word.trim().is_empty() {
                continue;
            }
        }
        if w > width {
            for g in word.graphemes(true) {
                let gw = g.width();
                if current_width + gw > width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(g);
                current_width += gw;
            }
            continue;
        }
        current.push_str(word);
        current_width += w;
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current.trim_end().to_string());
    }
    out
}

impl View for ChatPanel {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        if let InputEvent::Paste(text) = event {
            let flattened = text.replace(['\r', '\n'], " ");
            self.chat.borrow_mut().insert_str(&flattened);
            return EventResult::Consumed;
        }

        let Some(key) = event.as_key_press() else {
            return EventResult::Ignored;
        };
        let mut chat = self.chat.borrow_mut();
        match key.code {
            KeyCode::Enter => {
                chat.submit();
                EventResult::Consumed
            }
            KeyCode::Backspace => {
                chat.backspace();
                EventResult::Consumed
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                chat.insert_char(ch);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor = None;
        let block = Block::bordered()
            .title(" Chat ")
            .border_style(Style::default().fg(self.theme.border(self.focused)));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let input_height = 1u16;
        let history_height = inner.height.saturating_sub(input_height + 1) as usize;

        if history_height > 0 {
            let lines = self.history_lines(width);
            let skip = lines.len().saturating_sub(history_height);
            let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
            let history_area = Rect::new(inner.x, inner.y, inner.width, history_height as u16);
            frame.render_widget(Paragraph::new(visible), history_area);

            let separator = "─".repeat(width);
            let sep_area = Rect::new(inner.x, inner.y + history_height as u16, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    separator,
                    Style::default().fg(self.theme.inactive_border),
                )),
                sep_area,
            );
        }

        let input_y = inner.y + inner.height - input_height;
        let input_area = Rect::new(inner.x, input_y, inner.width, input_height);
        let chat = self.chat.borrow();
        let input = chat.input();

        // Keep the tail of long input visible.
        let available = width.saturating_sub(INPUT_PROMPT.len()).max(1);
        let mut shown = input;
        while shown.width() > available.saturating_sub(1) && !shown.is_empty() {
            let mut graphemes = shown.grapheme_indices(true);
            graphemes.next();
            shown = graphemes.next().map(|(i, _)| &shown[i..]).unwrap_or("");
        }

        let line = Line::from(vec![
            Span::styled(INPUT_PROMPT, Style::default().fg(self.theme.accent_fg)),
            Span::raw(shown.to_string()),
        ]);
        frame.render_widget(Paragraph::new(line), input_area);

        if self.focused {
            let x = inner.x + (INPUT_PROMPT.len() + shown.width()) as u16;
            self.cursor = Some((x.min(inner.x + inner.width - 1), input_y));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.cursor = None;
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/chat.rs"]
mod tests;
