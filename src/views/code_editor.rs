//! Editor pane for the file currently selected in the virtual file system.
//!
//! Edits are written back on every keystroke so the preview and the chat payload
//! always see the buffer contents.

use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::ports::{FileSystemHandle, FileSystemProvider};
use crate::models::TextBuffer;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const TAB_WIDTH: usize = 2;

pub struct CodeEditorPanel {
    fs: FileSystemHandle,
    theme: UiTheme,
    focused: bool,
    path: Option<String>,
    buffer: TextBuffer,
    loaded_revision: Option<u64>,
    scroll_row: usize,
    text_area: Option<Rect>,
    cursor: Option<(u16, u16)>,
}

impl CodeEditorPanel {
    pub fn new(fs: FileSystemHandle, theme: UiTheme) -> Self {
        let mut panel = Self {
            fs,
            theme,
            focused: false,
            path: None,
            buffer: TextBuffer::new(),
            loaded_revision: None,
            scroll_row: 0,
            text_area: None,
            cursor: None,
        };
        panel.sync();
        panel
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Follows the file system's selection and picks up external writes.
    pub fn sync(&mut self) {
        let fs = self.fs.borrow();
        let selected = fs.selected_file().map(str::to_string);
        let revision = fs.revision();

        if selected != self.path {
            self.buffer = selected
                .as_deref()
                .and_then(|p| fs.read_file(p).ok())
                .map(TextBuffer::from_text)
                .unwrap_or_default();
            self.path = selected;
            self.scroll_row = 0;
            self.loaded_revision = Some(revision);
            return;
        }

        if self.loaded_revision == Some(revision) {
            return;
        }
        self.loaded_revision = Some(revision);
        let Some(path) = self.path.as_deref() else {
            return;
        };
        match fs.read_file(path) {
            Ok(content) => {
                if content != self.buffer.text() {
                    let (row, col) = self.buffer.cursor();
                    self.buffer = TextBuffer::from_text(content);
                    self.buffer.set_cursor(row, col);
                }
            }
            Err(_) => {
                self.buffer = TextBuffer::new();
            }
        }
    }

    fn write_back(&mut self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let mut fs = self.fs.borrow_mut();
        if let Err(err) = fs.write_file(path, &self.buffer.text()) {
            tracing::warn!(path = %path, error = %err, "failed to write buffer");
        }
        self.loaded_revision = Some(fs.revision());
    }

    fn edit(&mut self, key: &crossterm::event::KeyEvent) -> Option<bool> {
        let changed = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.buffer.insert_char(ch);
                true
            }
            KeyCode::Enter => {
                self.buffer.insert_char('\n');
                true
            }
            KeyCode::Tab => {
                self.buffer.insert_str(&" ".repeat(TAB_WIDTH));
                true
            }
            KeyCode::Backspace => self.buffer.delete_backward(),
            KeyCode::Delete => self.buffer.delete_forward(),
            KeyCode::Left => {
                self.buffer.move_left();
                false
            }
            KeyCode::Right => {
                self.buffer.move_right();
                false
            }
            KeyCode::Up => {
                self.buffer.move_up();
                false
            }
            KeyCode::Down => {
                self.buffer.move_down();
                false
            }
            KeyCode::Home => {
                self.buffer.move_line_start();
                false
            }
            KeyCode::End => {
                self.buffer.move_line_end();
                false
            }
            _ => return None,
        };
        Some(changed)
    }

    fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let row = self.buffer.cursor().0;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }
    }

    fn click_to_cursor(&mut self, x: u16, y: u16) -> bool {
        let Some(area) = self.text_area else {
            return false;
        };
        if !super::rect_contains(area, x, y) {
            return false;
        }
        let row = ((y - area.y) as usize + self.scroll_row).min(self.buffer.len_lines() - 1);
        let target = (x - area.x) as usize;
        let line = self.buffer.line(row).unwrap_or_default();
        let mut width = 0usize;
        let mut col = 0usize;
        for g in line.graphemes(true) {
            let w = g.width();
            if width + w > target {
                break;
            }
            width += w;
            col += 1;
        }
        self.buffer.set_cursor(row, col);
        true
    }
}

impl View for CodeEditorPanel {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        self.sync();
        if self.path.is_none() {
            return EventResult::Ignored;
        }

        if let Some(mouse) = event.as_mouse() {
            return match mouse.kind {
                MouseEventKind::Down(MouseButton::Left)
                    if self.click_to_cursor(mouse.column, mouse.row) =>
                {
                    EventResult::Consumed
                }
                MouseEventKind::ScrollDown => {
                    let max = self.buffer.len_lines().saturating_sub(1);
                    self.scroll_row = (self.scroll_row + 3).min(max);
                    EventResult::Consumed
                }
                MouseEventKind::ScrollUp => {
                    self.scroll_row = self.scroll_row.saturating_sub(3);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        if let InputEvent::Paste(text) = event {
            self.buffer.insert_str(&text.replace("\r\n", "\n"));
            self.write_back();
            return EventResult::Consumed;
        }

        let Some(key) = event.as_key_press() else {
            return EventResult::Ignored;
        };
        let Some(changed) = self.edit(key) else {
            return EventResult::Ignored;
        };
        if changed {
            self.write_back();
        }
        let height = self.text_area.map(|a| a.height as usize).unwrap_or(0);
        self.ensure_visible(height);
        EventResult::Consumed
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.sync();
        self.cursor = None;

        let title = match self.path.as_deref() {
            Some(path) => format!(" {} ", path),
            None => " Editor ".to_string(),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(self.theme.border(self.focused)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.path.is_none() {
            self.text_area = None;
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Select a file to edit",
                    Style::default().fg(self.theme.muted_fg),
                )),
                inner,
            );
            return;
        }

        let total = self.buffer.len_lines();
        let gutter_width = (total.to_string().len() + 1) as u16;
        if inner.width <= gutter_width || inner.height == 0 {
            self.text_area = None;
            return;
        }
        let gutter_area = Rect::new(inner.x, inner.y, gutter_width, inner.height);
        let text_area = Rect::new(
            inner.x + gutter_width,
            inner.y,
            inner.width - gutter_width,
            inner.height,
        );
        self.text_area = Some(text_area);

        let height = inner.height as usize;
        self.scroll_row = self.scroll_row.min(total.saturating_sub(1));
        let end = (self.scroll_row + height).min(total);

        let gutter_lines: Vec<Line> = (self.scroll_row..end)
            .map(|row| {
                Line::from(Span::styled(
                    format!("{:>width$} ", row + 1, width = gutter_width as usize - 1),
                    Style::default().fg(self.theme.muted_fg),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(gutter_lines), gutter_area);

        let text_lines: Vec<Line> = (self.scroll_row..end)
            .map(|row| Line::from(self.buffer.line(row).unwrap_or_default()))
            .collect();
        frame.render_widget(Paragraph::new(text_lines), text_area);

        let (row, col) = self.buffer.cursor();
        if self.focused && (self.scroll_row..end).contains(&row) {
            let line = self.buffer.line(row).unwrap_or_default();
            let x: usize = line.graphemes(true).take(col).map(|g| g.width()).sum();
            let x = (x as u16).min(text_area.width.saturating_sub(1));
            let y = (row - self.scroll_row) as u16;
            self.cursor = Some((text_area.x + x, text_area.y + y));
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
#[path = "../../tests/unit/views/code_editor.rs"]
mod tests;
