use crate::kernel::props::Message;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatStatus {
    #[default]
    Ready,
    /// A request is queued for the generation service and no reply has arrived yet.
    Submitted,
}

/// Payload handed to the external code-generation service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub project_id: Option<String>,
    pub system_prompt: String,
    pub messages: Vec<Message>,
    pub files: serde_json::Value,
}

/// Conversation state shared with the chat panel.
pub trait ChatProvider {
    fn messages(&self) -> &[Message];

    fn input(&self) -> &str;

    fn insert_char(&mut self, ch: char);

    fn insert_str(&mut self, text: &str);

    /// Removes the last grapheme of the input.
    fn backspace(&mut self) -> bool;

    /// Moves the current input into the conversation and queues a generation request.
    /// Returns `false` when nothing was sent.
    fn submit(&mut self) -> bool;

    fn take_pending(&mut self) -> Vec<GenerationRequest>;

    fn push_assistant(&mut self, content: &str);

    fn status(&self) -> ChatStatus;
}

pub type ChatHandle = Rc<RefCell<dyn ChatProvider>>;
