//! Two-tab switch between the preview and code panes.
//!
//! The toggle owns no mode of its own: it renders the mode it is given and reports
//! selections to whatever implements [`ModeSink`].

use crate::app::theme::UiTheme;
use crate::kernel::ViewMode;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const TAB_ROLE: &str = "tab";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    Active,
    Inactive,
}

impl TabState {
    pub fn as_str(self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Inactive => "inactive",
        }
    }

    pub fn is_active(self) -> bool {
        self == TabState::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTab {
    pub option: ViewMode,
    pub label: &'static str,
    pub role: &'static str,
    pub state: TabState,
}

/// Receiver of toggle selections.
pub trait ModeSink {
    fn set_mode(&mut self, next: ViewMode);
}

/// Both tabs, Preview first. Exactly one is active.
pub fn tabs(mode: ViewMode) -> [ToggleTab; 2] {
    ViewMode::ALL.map(|option| ToggleTab {
        option,
        label: option.label(),
        role: TAB_ROLE,
        state: if option == mode {
            TabState::Active
        } else {
            TabState::Inactive
        },
    })
}

/// Looks a tab up by accessible name, case-insensitively.
pub fn find_tab(mode: ViewMode, name: &str) -> Option<ToggleTab> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    tabs(mode)
        .into_iter()
        .find(|tab| tab.label.to_lowercase().contains(&needle))
}

/// Forwards the chosen option. Selecting the active tab is harmless because
/// `set_mode` is idempotent.
pub fn select<S: ModeSink + ?Sized>(target: &mut S, option: ViewMode) {
    target.set_mode(option);
}

#[derive(Debug, Default)]
pub struct ViewToggle {
    tab_areas: [Option<Rect>; 2],
}

impl ViewToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, mode: ViewMode, theme: &UiTheme) {
        self.tab_areas = [None, None];
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        let mut x = area.x;
        let right = area.x.saturating_add(area.width);
        for (idx, tab) in tabs(mode).iter().enumerate() {
            let text = format!(" {} ", tab.label);
            let width = text.len() as u16;
            if x.saturating_add(width) > right {
                break;
            }
            self.tab_areas[idx] = Some(Rect::new(x, area.y, width, 1));

            let style = match tab.state {
                TabState::Active => Style::default()
                    .bg(theme.tab_active_bg)
                    .fg(theme.tab_active_fg)
                    .add_modifier(Modifier::BOLD),
                TabState::Inactive => Style::default().fg(theme.tab_inactive_fg),
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
            x = x.saturating_add(width + 1);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Tab under the given cell, from the last render.
    pub fn option_at(&self, x: u16, y: u16) -> Option<ViewMode> {
        self.tab_areas
            .iter()
            .zip(ViewMode::ALL)
            .find_map(|(area, option)| {
                area.filter(|a| super::rect_contains(*a, x, y))
                    .map(|_| option)
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/view_toggle.rs"]
mod tests;
