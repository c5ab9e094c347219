use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::core::view::{EventResult, View};
use crate::kernel::{Action, PanelKind};
use crate::views::rect_contains;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(_) => {
            let Some(key_event) = event.as_key_press() else {
                return EventResult::Ignored;
            };
            let key = Key::from(*key_event);
            if let Some(command) = workbench.keybindings.resolve(&key).cloned() {
                return workbench.run_command(&command);
            }
            forward_to_focus(workbench, event)
        }
        InputEvent::Mouse(mouse_event) => handle_mouse(workbench, mouse_event, event),
        InputEvent::Paste(_) => forward_to_focus(workbench, event),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

fn forward_to_focus(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let focus = workbench.focus();
    match workbench.view_mut(focus) {
        Some(view) => view.handle_input(event),
        None => EventResult::Ignored,
    }
}

fn panel_at(workbench: &Workbench, x: u16, y: u16) -> Option<PanelKind> {
    [
        (workbench.last_chat_area, PanelKind::Chat),
        (workbench.last_preview_area, PanelKind::Preview),
        (workbench.last_tree_area, PanelKind::FileTree),
        (workbench.last_editor_area, PanelKind::CodeEditor),
    ]
    .into_iter()
    .find_map(|(area, panel)| area.filter(|a| rect_contains(*a, x, y)).map(|_| panel))
    .filter(|panel| workbench.mounted_panels().contains(panel))
}

fn handle_mouse(workbench: &mut Workbench, mouse: &MouseEvent, event: &InputEvent) -> EventResult {
    let is_click = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

    if is_click {
        if let Some(option) = workbench.toggle.option_at(mouse.column, mouse.row) {
            crate::views::select(workbench, option);
            return EventResult::Consumed;
        }
    }

    let Some(panel) = panel_at(workbench, mouse.column, mouse.row) else {
        return EventResult::Ignored;
    };
    let refocused = is_click && workbench.dispatch_kernel(Action::SetFocus(panel));
    let result = match workbench.view_mut(panel) {
        Some(view) => view.handle_input(event),
        None => EventResult::Ignored,
    };
    if refocused && result.is_ignored() {
        return EventResult::Consumed;
    }
    result
}
