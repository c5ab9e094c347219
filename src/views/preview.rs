//! Preview pane.
//!
//! Components are not executed here; the pane shows what the runtime would mount:
//! the entry point, its local import tree, the libraries it pulls in and any import
//! that does not resolve.

use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::ports::{FileSystemHandle, FileSystemProvider};
use crate::models::ModuleGraph;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

pub const NO_PREVIEW_TITLE: &str = "No Preview Available";
pub const NO_PREVIEW_HINT: &str = "Start a conversation to generate React components";

pub struct PreviewPanel {
    fs: FileSystemHandle,
    theme: UiTheme,
    focused: bool,
    graph: ModuleGraph,
    graph_revision: Option<u64>,
    scroll: usize,
}

impl PreviewPanel {
    pub fn new(fs: FileSystemHandle, theme: UiTheme) -> Self {
        let mut panel = Self {
            fs,
            theme,
            focused: false,
            graph: ModuleGraph::default(),
            graph_revision: None,
            scroll: 0,
        };
        panel.refresh();
        panel
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn refresh(&mut self) {
        let fs = self.fs.borrow();
        let revision = fs.revision();
        if self.graph_revision == Some(revision) {
            return;
        }
        self.graph = ModuleGraph::build(&*fs);
        self.graph_revision = Some(revision);
        tracing::debug!(
            revision,
            entry = ?self.graph.entry,
            modules = self.graph.modules.len(),
            "preview graph rebuilt"
        );
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(entry) = self.graph.entry.as_deref() else {
            return vec![
                Line::default(),
                Line::from(Span::styled(
                    NO_PREVIEW_TITLE,
                    Style::default()
                        .fg(self.theme.header_fg)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    NO_PREVIEW_HINT,
                    Style::default().fg(self.theme.muted_fg),
                )),
            ];
        };

        let section = Style::default()
            .fg(self.theme.header_fg)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Entry ", section),
                Span::styled(entry.to_string(), Style::default().fg(self.theme.accent_fg)),
            ]),
            Line::default(),
            Line::from(Span::styled("Modules", section)),
        ];
        lines.extend(self.graph.modules.iter().map(|node| {
            Line::from(format!("{}{}", "  ".repeat(node.depth + 1), node.path))
        }));

        if !self.graph.libraries.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Libraries", section)));
            lines.extend(
                self.graph
                    .libraries
                    .iter()
                    .map(|lib| Line::from(format!("  {}", lib))),
            );
        }

        if !self.graph.unresolved.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Unresolved imports",
                Style::default()
                    .fg(self.theme.error_fg)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.extend(self.graph.unresolved.iter().map(|u| {
                Line::from(Span::styled(
                    format!("  {} in {}", u.specifier, u.importer),
                    Style::default().fg(self.theme.error_fg),
                ))
            }));
        }
        lines
    }
}

impl View for PreviewPanel {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        if let Some(mouse) = event.as_mouse() {
            return match mouse.kind {
                MouseEventKind::ScrollDown => {
                    self.scroll = self.scroll.saturating_add(3);
                    EventResult::Consumed
                }
                MouseEventKind::ScrollUp => {
                    self.scroll = self.scroll.saturating_sub(3);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        let Some(key) = event.as_key_press() else {
            return EventResult::Ignored;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Home => self.scroll = 0,
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.refresh();

        let block = Block::bordered()
            .title(" Preview ")
            .border_style(Style::default().fg(self.theme.border(self.focused)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = self.lines();
        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        self.scroll = self.scroll.min(max_scroll);
        let visible: Vec<Line> = lines.into_iter().skip(self.scroll).collect();
        frame.render_widget(Paragraph::new(visible), inner);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/preview.rs"]
mod tests;
