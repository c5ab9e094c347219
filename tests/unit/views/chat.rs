use super::*;
use crate::kernel::props::Message;
use crate::kernel::services::adapters::{ChatSession, VirtualFileSystem};
use crate::kernel::services::ports::{ChatProvider, FileSystemHandle};
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

fn panel_with(messages: Vec<Message>) -> (ChatPanel, Rc<RefCell<ChatSession>>) {
    let fs: FileSystemHandle = Rc::new(RefCell::new(VirtualFileSystem::new()));
    let session = Rc::new(RefCell::new(ChatSession::new(None, messages, fs)));
    let handle: ChatHandle = session.clone();
    (ChatPanel::new(handle, UiTheme::default()), session)
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn typing_and_enter_submits_through_the_provider() {
    let (mut panel, session) = panel_with(Vec::new());

    for ch in "hi".chars() {
        assert!(panel.handle_input(&key(KeyCode::Char(ch))).is_consumed());
    }
    assert_eq!(session.borrow().input(), "hi");

    panel.handle_input(&key(KeyCode::Backspace));
    panel.handle_input(&key(KeyCode::Char('!')));
    panel.handle_input(&key(KeyCode::Enter));

    let session = session.borrow();
    assert_eq!(session.input(), "");
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content, "h!");
    assert_eq!(session.status(), ChatStatus::Submitted);
}

#[test]
fn control_chords_and_releases_are_not_typed() {
    let (mut panel, session) = panel_with(Vec::new());

    let ctrl_t = InputEvent::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
    assert!(panel.handle_input(&ctrl_t).is_ignored());

    let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert!(panel.handle_input(&InputEvent::Key(release)).is_ignored());

    assert_eq!(session.borrow().input(), "");
}

#[test]
fn paste_is_flattened_to_one_line() {
    let (mut panel, session) = panel_with(Vec::new());
    panel.handle_input(&InputEvent::Paste("a\nb\r\nc".to_string()));
    assert_eq!(session.borrow().input(), "a b  c");
}

#[test]
fn render_shows_history_and_places_cursor_after_input() {
    let (mut panel, session) = panel_with(vec![Message::new(
        "m1",
        Role::Assistant,
        "Here is your button.",
    )]);
    session.borrow_mut().insert_str("more");
    panel.on_focus();

    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|frame| panel.render(frame, frame.area()))
        .unwrap();

    let text = screen(&terminal);
    assert!(text.contains("Chat"));
    assert!(text.contains("assistant"));
    assert!(text.contains("Here is your button."));
    assert!(text.contains("> more"));
    assert_eq!(panel.cursor_position(), Some((7, 6)));

    panel.on_blur();
    assert_eq!(panel.cursor_position(), None);
}

#[test]
fn empty_history_shows_hint() {
    let (mut panel, _session) = panel_with(Vec::new());
    let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
    terminal
        .draw(|frame| panel.render(frame, frame.area()))
        .unwrap();
    assert!(screen(&terminal).contains(EMPTY_HINT));
}

#[test]
fn wrap_breaks_on_words_and_long_runs() {
    assert_eq!(wrap("hello big world", 9), vec!["hello big", "world"]);
    assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap("", 10), vec![""]);
    assert!(wrap("anything", 0).is_empty());
}
