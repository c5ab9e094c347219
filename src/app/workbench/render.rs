use super::{RightPane, Workbench};
use crate::core::view::View;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let chat_percent = workbench.chat_width_percent;
    let [chat_area, right_area] = Layout::horizontal([
        Constraint::Percentage(chat_percent),
        Constraint::Percentage(100 - chat_percent),
    ])
    .areas(area);
    let [header_area, pane_area] =
        Layout::vertical([Constraint::Length(super::TOGGLE_HEIGHT), Constraint::Min(0)])
            .areas(right_area);

    workbench.last_chat_area = Some(chat_area);
    workbench.chat_panel.render(frame, chat_area);

    let mode = workbench.mode();
    workbench
        .toggle
        .render(frame, header_area, mode, &workbench.theme);
    render_project_name(workbench, frame, header_area);

    workbench.last_preview_area = None;
    workbench.last_tree_area = None;
    workbench.last_editor_area = None;
    match &mut workbench.right {
        RightPane::Preview(preview) => {
            workbench.last_preview_area = Some(pane_area);
            preview.render(frame, pane_area);
        }
        RightPane::Code { tree, editor } => {
            let [tree_area, editor_area] = Layout::horizontal([
                Constraint::Percentage(super::FILE_TREE_WIDTH_PERCENT),
                Constraint::Percentage(100 - super::FILE_TREE_WIDTH_PERCENT),
            ])
            .areas(pane_area);
            workbench.last_tree_area = Some(tree_area);
            workbench.last_editor_area = Some(editor_area);
            tree.render(frame, tree_area);
            editor.render(frame, editor_area);
        }
    }

    if let Some((x, y)) = workbench.cursor_position() {
        frame.set_cursor_position((x, y));
    }
}

/// Right-aligned in the toggle row when there is room after the tabs.
fn render_project_name(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let Some(project) = workbench.props.project.as_ref() else {
        return;
    };
    let name = project.name.as_str();
    let Ok(width) = u16::try_from(name.width()) else {
        return;
    };
    // Leave room for both tabs (" Preview " + " " + " Code " + gap).
    if width == 0 || area.width < width.saturating_add(20) {
        return;
    }
    let name_area = Rect::new(area.x + area.width - width, area.y, width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            name.to_string(),
            Style::default().fg(workbench.theme.muted_fg),
        )),
        name_area,
    );
}
