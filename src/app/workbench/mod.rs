//! 工作台模块：持有视图模式，始终挂载对话面板，按模式挂载右侧面板
//!
//! 职责：
//! - 通过 Store 管理 ViewMode 与焦点
//! - Preview 模式挂载 PreviewPanel，Code 模式挂载 FileTreePanel + CodeEditorPanel
//! - 分发键盘/鼠标事件，处理全局快捷键

use super::theme::UiTheme;
use crate::core::view::View;
use crate::core::Command;
use crate::kernel::services::adapters::{ChatSession, KeybindingService, VirtualFileSystem};
use crate::kernel::services::ports::{
    ChatHandle, ChatProvider, FileSystemHandle, FileSystemProvider, GenerationRequest, Settings,
};
use crate::kernel::{Action, Effect, PanelKind, Store, ViewMode, WorkspaceProps};
use crate::models::module_graph::find_entry;
use crate::views::{
    ChatPanel, CodeEditorPanel, FileTreePanel, ModeSink, PreviewPanel, ToggleTab, ViewToggle,
};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

mod input;
mod render;

const TOGGLE_HEIGHT: u16 = 1;
const FILE_TREE_WIDTH_PERCENT: u16 = 30;

/// Collaborators the workbench renders against. Injected instead of looked up so
/// callers and tests can supply their own implementations.
#[derive(Clone)]
pub struct WorkspaceServices {
    pub file_system: FileSystemHandle,
    pub chat: ChatHandle,
}

impl WorkspaceServices {
    pub fn new(file_system: FileSystemHandle, chat: ChatHandle) -> Self {
        Self { file_system, chat }
    }

    /// Seeds the file system from `project.data` and the chat from `project.messages`.
    pub fn from_props(props: &WorkspaceProps) -> Self {
        let fs = match props.project.as_ref() {
            Some(project) => VirtualFileSystem::from_project_data(&project.data),
            None => VirtualFileSystem::new(),
        };
        Self::with_file_system(props, fs)
    }

    pub fn with_file_system(props: &WorkspaceProps, mut fs: VirtualFileSystem) -> Self {
        if fs.selected_file().is_none() {
            if let Some(entry) = find_entry(&fs) {
                let _ = fs.select_file(entry);
            }
        }

        let file_system: FileSystemHandle = Rc::new(RefCell::new(fs));
        let (project_id, messages) = match props.project.as_ref() {
            Some(project) => (Some(project.id.clone()), project.messages.clone()),
            None => (None, Vec::new()),
        };
        let chat: ChatHandle = Rc::new(RefCell::new(ChatSession::new(
            project_id,
            messages,
            file_system.clone(),
        )));
        Self { file_system, chat }
    }
}

/// The region right of the chat. Exactly one variant exists at a time, so the preview
/// and the code panels can never be mounted together.
pub enum RightPane {
    Preview(PreviewPanel),
    Code {
        tree: FileTreePanel,
        editor: CodeEditorPanel,
    },
}

impl RightPane {
    fn mount(mode: ViewMode, fs: &FileSystemHandle, theme: &UiTheme) -> Self {
        match mode {
            ViewMode::Preview => RightPane::Preview(PreviewPanel::new(fs.clone(), theme.clone())),
            ViewMode::Code => RightPane::Code {
                tree: FileTreePanel::new(fs.clone(), theme.clone()),
                editor: CodeEditorPanel::new(fs.clone(), theme.clone()),
            },
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            RightPane::Preview(_) => ViewMode::Preview,
            RightPane::Code { .. } => ViewMode::Code,
        }
    }

    pub fn panels(&self) -> &'static [PanelKind] {
        self.mode().panels()
    }

    fn view(&self, panel: PanelKind) -> Option<&dyn View> {
        match (self, panel) {
            (RightPane::Preview(preview), PanelKind::Preview) => Some(preview),
            (RightPane::Code { tree, .. }, PanelKind::FileTree) => Some(tree),
            (RightPane::Code { editor, .. }, PanelKind::CodeEditor) => Some(editor),
            _ => None,
        }
    }

    fn view_mut(&mut self, panel: PanelKind) -> Option<&mut dyn View> {
        match (self, panel) {
            (RightPane::Preview(preview), PanelKind::Preview) => Some(preview),
            (RightPane::Code { tree, .. }, PanelKind::FileTree) => Some(tree),
            (RightPane::Code { editor, .. }, PanelKind::CodeEditor) => Some(editor),
            _ => None,
        }
    }
}

pub struct Workbench {
    store: Store,
    props: WorkspaceProps,
    services: WorkspaceServices,
    chat_panel: ChatPanel,
    right: RightPane,
    toggle: ViewToggle,
    keybindings: KeybindingService,
    theme: UiTheme,
    chat_width_percent: u16,
    last_chat_area: Option<Rect>,
    last_preview_area: Option<Rect>,
    last_tree_area: Option<Rect>,
    last_editor_area: Option<Rect>,
}

impl Workbench {
    /// Starts in preview mode with the chat focused.
    pub fn new(props: WorkspaceProps, services: WorkspaceServices) -> Self {
        Self::with_settings(props, services, &Settings::default())
    }

    pub fn with_settings(
        props: WorkspaceProps,
        services: WorkspaceServices,
        settings: &Settings,
    ) -> Self {
        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);

        let mut keybindings = KeybindingService::with_defaults();
        keybindings.apply_rules(&settings.keybindings);

        let store = Store::default();
        let mut chat_panel = ChatPanel::new(services.chat.clone(), theme.clone());
        chat_panel.on_focus();
        let right = RightPane::mount(store.state().mode, &services.file_system, &theme);

        tracing::info!(
            project = props.project.as_ref().map(|p| p.id.as_str()).unwrap_or("-"),
            mode = %store.state().mode,
            "workbench initialized"
        );

        Self {
            store,
            props,
            services,
            chat_panel,
            right,
            toggle: ViewToggle::new(),
            keybindings,
            theme,
            chat_width_percent: settings.layout.chat_width_percent(),
            last_chat_area: None,
            last_preview_area: None,
            last_tree_area: None,
            last_editor_area: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.store.state().mode
    }

    pub fn focus(&self) -> PanelKind {
        self.store.state().focus
    }

    pub fn props(&self) -> &WorkspaceProps {
        &self.props
    }

    pub fn services(&self) -> &WorkspaceServices {
        &self.services
    }

    pub fn right_pane(&self) -> &RightPane {
        &self.right
    }

    /// What is actually mounted right now: the chat, then the right pane's panels.
    pub fn mounted_panels(&self) -> Vec<PanelKind> {
        let mut panels = vec![PanelKind::Chat];
        panels.extend_from_slice(self.right.panels());
        panels
    }

    pub fn toggle_tabs(&self) -> [ToggleTab; 2] {
        crate::views::tabs(self.mode())
    }

    pub fn keybindings(&self) -> &KeybindingService {
        &self.keybindings
    }

    pub fn file_tree(&self) -> Option<&FileTreePanel> {
        match &self.right {
            RightPane::Code { tree, .. } => Some(tree),
            RightPane::Preview(_) => None,
        }
    }

    pub fn code_editor(&self) -> Option<&CodeEditorPanel> {
        match &self.right {
            RightPane::Code { editor, .. } => Some(editor),
            RightPane::Preview(_) => None,
        }
    }

    pub fn preview(&self) -> Option<&PreviewPanel> {
        match &self.right {
            RightPane::Preview(preview) => Some(preview),
            RightPane::Code { .. } => None,
        }
    }

    /// Requests queued by the chat since the last call.
    pub fn drain_generation_requests(&mut self) -> Vec<GenerationRequest> {
        self.services.chat.borrow_mut().take_pending()
    }

    pub fn push_assistant_reply(&mut self, content: &str) {
        self.services.chat.borrow_mut().push_assistant(content);
    }

    pub(crate) fn dispatch_kernel(&mut self, action: Action) -> bool {
        let prev_focus = self.focus();
        let result = self.store.dispatch(action);
        for effect in result.effects {
            match effect {
                Effect::MountPane(mode) => {
                    tracing::debug!(mode = %mode, "mounting right pane");
                    self.right = RightPane::mount(mode, &self.services.file_system, &self.theme);
                }
            }
        }
        self.sync_focus(prev_focus);
        result.state_changed
    }

    fn sync_focus(&mut self, prev: PanelKind) {
        let next = self.focus();
        if prev != next {
            tracing::debug!(from = %prev, to = %next, "focus moved");
            if let Some(view) = self.view_mut(prev) {
                view.on_blur();
            }
        }
        // Freshly mounted panels start blurred, so refresh the focused one every time.
        if let Some(view) = self.view_mut(next) {
            view.on_focus();
        }
    }

    fn view(&self, panel: PanelKind) -> Option<&dyn View> {
        match panel {
            PanelKind::Chat => Some(&self.chat_panel),
            other => self.right.view(other),
        }
    }

    fn view_mut(&mut self, panel: PanelKind) -> Option<&mut dyn View> {
        match panel {
            PanelKind::Chat => Some(&mut self.chat_panel),
            other => self.right.view_mut(other),
        }
    }

    pub(crate) fn run_command(&mut self, command: &Command) -> crate::core::view::EventResult {
        use crate::core::view::EventResult;

        match command {
            Command::Quit => return EventResult::Quit,
            Command::ShowPreview => crate::views::select(self, ViewMode::Preview),
            Command::ShowCode => crate::views::select(self, ViewMode::Code),
            Command::ToggleView => {
                let next = self.mode().other();
                crate::views::select(self, next);
            }
            Command::FocusNext => {
                self.dispatch_kernel(Action::FocusNext);
            }
            Command::FocusPrev => {
                self.dispatch_kernel(Action::FocusPrev);
            }
            Command::FocusChat => {
                self.dispatch_kernel(Action::SetFocus(PanelKind::Chat));
            }
            Command::Custom(name) => {
                tracing::debug!(command = %name, "no handler for command");
                return EventResult::Ignored;
            }
        }
        EventResult::Consumed
    }
}

impl ModeSink for Workbench {
    /// Idempotent: selecting the current mode leaves every panel in place.
    fn set_mode(&mut self, next: ViewMode) {
        self.dispatch_kernel(Action::SetMode(next));
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &crate::core::event::InputEvent) -> crate::core::view::EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.view(self.focus())?.cursor_position()
    }
}
