use super::*;
use crate::kernel::services::adapters::VirtualFileSystem;
use crate::kernel::services::ports::FileSystemProvider;
use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

fn setup() -> (FileTreePanel, Rc<RefCell<VirtualFileSystem>>) {
    let mut vfs = VirtualFileSystem::new();
    vfs.create_file("/App.jsx", "export default function App() {}")
        .unwrap();
    vfs.create_file("/components/Button.jsx", "").unwrap();
    vfs.create_file("/components/Card.jsx", "").unwrap();
    let fs = Rc::new(RefCell::new(vfs));
    let handle: FileSystemHandle = fs.clone();
    (FileTreePanel::new(handle, UiTheme::default()), fs)
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn names(panel: &FileTreePanel) -> Vec<&str> {
    panel.rows().iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn rows_list_directories_first() {
    let (panel, _fs) = setup();
    assert_eq!(names(&panel), vec!["components", "Button.jsx", "Card.jsx", "App.jsx"]);
    assert_eq!(panel.rows()[1].depth, 1);
}

#[test]
fn enter_on_file_selects_it_in_the_file_system() {
    let (mut panel, fs) = setup();
    panel.handle_input(&key(KeyCode::End));
    assert_eq!(panel.selected_index(), 3);

    assert!(panel.handle_input(&key(KeyCode::Enter)).is_consumed());
    assert_eq!(fs.borrow().selected_file(), Some("/App.jsx"));
}

#[test]
fn enter_on_directory_toggles_it() {
    let (mut panel, _fs) = setup();
    panel.handle_input(&key(KeyCode::Enter));
    assert_eq!(names(&panel), vec!["components", "App.jsx"]);
    assert!(!panel.rows()[0].expanded);

    panel.handle_input(&key(KeyCode::Right));
    assert_eq!(panel.rows().len(), 4);

    panel.handle_input(&key(KeyCode::Left));
    assert_eq!(panel.rows().len(), 2);
}

#[test]
fn selection_is_clamped() {
    let (mut panel, _fs) = setup();
    panel.handle_input(&key(KeyCode::Up));
    assert_eq!(panel.selected_index(), 0);
    for _ in 0..10 {
        panel.handle_input(&key(KeyCode::Down));
    }
    assert_eq!(panel.selected_index(), 3);
}

#[test]
fn rows_follow_file_system_changes() {
    let (mut panel, fs) = setup();
    panel.handle_input(&key(KeyCode::End));

    fs.borrow_mut().create_file("/index.css", "").unwrap();
    panel.refresh();

    assert_eq!(panel.rows().len(), 5);
    assert_eq!(panel.selected_row().map(|r| r.name.as_str()), Some("App.jsx"));
}

#[test]
fn initial_selection_follows_open_file() {
    let mut vfs = VirtualFileSystem::new();
    vfs.create_file("/a.js", "").unwrap();
    vfs.create_file("/b.js", "").unwrap();
    vfs.select_file("/b.js").unwrap();
    let handle: FileSystemHandle = Rc::new(RefCell::new(vfs));

    let panel = FileTreePanel::new(handle, UiTheme::default());
    assert_eq!(panel.selected_index(), 1);
}

#[test]
fn click_activates_the_row_under_the_pointer() {
    let (mut panel, fs) = setup();
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|frame| panel.render(frame, frame.area()))
        .unwrap();

    // Border at row 0; App.jsx is the fourth row.
    let click = InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 4,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert!(panel.handle_input(&click).is_consumed());
    assert_eq!(fs.borrow().selected_file(), Some("/App.jsx"));

    let outside = InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 4,
        row: 6,
        modifiers: KeyModifiers::NONE,
    });
    assert!(panel.handle_input(&outside).is_ignored());
}

#[test]
fn empty_file_system_renders_placeholder() {
    let handle: FileSystemHandle = Rc::new(RefCell::new(VirtualFileSystem::new()));
    let mut panel = FileTreePanel::new(handle, UiTheme::default());
    let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
    terminal
        .draw(|frame| panel.render(frame, frame.area()))
        .unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect();
    assert!(text.contains("No files yet"));
}
