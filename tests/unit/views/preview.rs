use super::*;
use crate::kernel::services::adapters::VirtualFileSystem;
use crate::kernel::services::ports::FileSystemProvider;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

fn render_text(panel: &mut PreviewPanel, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| panel.render(frame, frame.area()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn empty_project_shows_placeholder() {
    let handle: FileSystemHandle = Rc::new(RefCell::new(VirtualFileSystem::new()));
    let mut panel = PreviewPanel::new(handle, UiTheme::default());

    assert!(!panel.graph().has_entry());
    let text = render_text(&mut panel, 60, 8);
    assert!(text.contains(NO_PREVIEW_TITLE));
}

#[test]
fn renders_entry_modules_libraries_and_problems() {
    let mut vfs = VirtualFileSystem::new();
    vfs.create_file(
        "/App.jsx",
        "import React from 'react';\nimport Card from './components/Card';\nimport X from '@/missing';",
    )
    .unwrap();
    vfs.create_file("/components/Card.jsx", "export default () => null;")
        .unwrap();
    let handle: FileSystemHandle = Rc::new(RefCell::new(vfs));
    let mut panel = PreviewPanel::new(handle, UiTheme::default());

    let text = render_text(&mut panel, 60, 16);
    assert!(text.contains("Entry /App.jsx"));
    assert!(text.contains("/components/Card.jsx"));
    assert!(text.contains("react"));
    assert!(text.contains("@/missing in /App.jsx"));
}

#[test]
fn graph_is_rebuilt_after_file_system_changes() {
    let fs = Rc::new(RefCell::new(VirtualFileSystem::new()));
    let handle: FileSystemHandle = fs.clone();
    let mut panel = PreviewPanel::new(handle, UiTheme::default());
    assert!(!panel.graph().has_entry());

    fs.borrow_mut()
        .create_file("/App.jsx", "export default function App() {}")
        .unwrap();
    panel.refresh();

    assert_eq!(panel.graph().entry.as_deref(), Some("/App.jsx"));
    assert_eq!(panel.graph().modules.len(), 1);
}

#[test]
fn scrolling_is_clamped_on_render() {
    let handle: FileSystemHandle = Rc::new(RefCell::new(VirtualFileSystem::new()));
    let mut panel = PreviewPanel::new(handle, UiTheme::default());
    for _ in 0..5 {
        panel.handle_input(&InputEvent::Key(crossterm::event::KeyEvent::new(
            KeyCode::Down,
            crossterm::event::KeyModifiers::NONE,
        )));
    }
    let text = render_text(&mut panel, 60, 8);
    assert!(text.contains(NO_PREVIEW_TITLE));
}
