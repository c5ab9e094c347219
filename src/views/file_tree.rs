//! File tree pane over the shared virtual file system.

use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::ports::{FileSystemHandle, FileSystemProvider};
use crate::models::{flatten_tree, FileTreeRow};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use rustc_hash::FxHashSet;

pub struct FileTreePanel {
    fs: FileSystemHandle,
    theme: UiTheme,
    focused: bool,
    collapsed: FxHashSet<String>,
    rows: Vec<FileTreeRow>,
    rows_revision: Option<u64>,
    selected: usize,
    scroll: usize,
    list_area: Option<Rect>,
}

impl FileTreePanel {
    pub fn new(fs: FileSystemHandle, theme: UiTheme) -> Self {
        let mut panel = Self {
            fs,
            theme,
            focused: false,
            collapsed: FxHashSet::default(),
            rows: Vec::new(),
            rows_revision: None,
            selected: 0,
            scroll: 0,
            list_area: None,
        };
        panel.refresh();
        panel.select_fs_selection();
        panel
    }

    pub fn rows(&self) -> &[FileTreeRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&FileTreeRow> {
        self.rows.get(self.selected)
    }

    /// Re-flattens when the file system changed since the last refresh.
    pub fn refresh(&mut self) {
        let revision = self.fs.borrow().revision();
        if self.rows_revision == Some(revision) {
            return;
        }
        self.rebuild();
        self.rows_revision = Some(revision);
    }

    fn rebuild(&mut self) {
        let previous = self.selected_row().map(|r| r.path.clone());
        self.rows = flatten_tree(&*self.fs.borrow(), &self.collapsed);
        self.selected = previous
            .and_then(|p| self.rows.iter().position(|r| r.path == p))
            .unwrap_or_else(|| self.selected.min(self.rows.len().saturating_sub(1)));
    }

    fn select_fs_selection(&mut self) {
        let fs = self.fs.borrow();
        let Some(path) = fs.selected_file() else {
            return;
        };
        if let Some(idx) = self.rows.iter().position(|r| r.path == path) {
            self.selected = idx;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, last) as usize;
    }

    /// Directories toggle; files become the editor's selection.
    pub fn activate(&mut self, index: usize) {
        let Some(row) = self.rows.get(index).cloned() else {
            return;
        };
        self.selected = index;
        if row.is_dir() {
            self.set_expanded(&row.path, !row.expanded);
            return;
        }
        if let Err(err) = self.fs.borrow_mut().select_file(&row.path) {
            tracing::warn!(path = %row.path, error = %err, "failed to select file");
        }
    }

    fn set_expanded(&mut self, path: &str, expanded: bool) {
        let changed = if expanded {
            self.collapsed.remove(path)
        } else {
            self.collapsed.insert(path.to_string())
        };
        if changed {
            self.rebuild();
        }
    }

    fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
        self.scroll = self.scroll.min(self.rows.len().saturating_sub(height));
    }

    fn hit_test_row(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.list_area?;
        if !super::rect_contains(area, x, y) {
            return None;
        }
        let idx = (y - area.y) as usize + self.scroll;
        (idx < self.rows.len()).then_some(idx)
    }

    fn render_row(&self, row: &FileTreeRow, is_cursor: bool, is_open: bool) -> Line<'static> {
        let indent = "  ".repeat(row.depth);
        let icon = if row.is_dir() {
            if row.expanded {
                "▼ "
            } else {
                "▶ "
            }
        } else {
            "  "
        };
        let text = format!("{}{}{}", indent, icon, row.name);

        let mut style = if is_open {
            Style::default().fg(self.theme.accent_fg)
        } else if row.is_dir() {
            Style::default().fg(self.theme.header_fg)
        } else {
            Style::default()
        };
        if is_cursor && self.focused {
            style = style.bg(self.theme.selection_bg);
        }
        Line::from(Span::styled(text, style))
    }
}

impl View for FileTreePanel {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        self.refresh();

        if let Some(mouse) = event.as_mouse() {
            return match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    match self.hit_test_row(mouse.column, mouse.row) {
                        Some(idx) => {
                            self.activate(idx);
                            EventResult::Consumed
                        }
                        None => EventResult::Ignored,
                    }
                }
                MouseEventKind::ScrollDown => {
                    self.move_selection(3);
                    EventResult::Consumed
                }
                MouseEventKind::ScrollUp => {
                    self.move_selection(-3);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        let Some(key) = event.as_key_press() else {
            return EventResult::Ignored;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.rows.len().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.selected),
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(row) = self.selected_row().cloned() {
                    if row.is_dir() {
                        self.set_expanded(&row.path, true);
                    }
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(row) = self.selected_row().cloned() {
                    if row.is_dir() && row.expanded {
                        self.set_expanded(&row.path, false);
                    }
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.refresh();

        let block = Block::bordered()
            .title(" Files ")
            .border_style(Style::default().fg(self.theme.border(self.focused)));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.list_area = Some(inner);

        if self.rows.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No files yet",
                    Style::default().fg(self.theme.muted_fg),
                )),
                inner,
            );
            return;
        }

        let height = inner.height as usize;
        self.ensure_visible(height);
        let open = self.fs.borrow().selected_file().map(str::to_string);
        let end = (self.scroll + height).min(self.rows.len());
        let lines: Vec<Line> = self.rows[self.scroll..end]
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                let is_open = open.as_deref() == Some(row.path.as_str());
                self.render_row(row, self.scroll + offset == self.selected, is_open)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/file_tree.rs"]
mod tests;
