//! In-memory conversation state.
//!
//! Submitted turns are queued as [`GenerationRequest`]s; whoever talks to the
//! generation service drains them with `take_pending` and answers through
//! `push_assistant`.

use crate::kernel::prompts::GENERATION_PROMPT;
use crate::kernel::props::{Message, Role};
use crate::kernel::services::ports::{
    ChatProvider, ChatStatus, FileSystemHandle, FileSystemProvider, GenerationRequest,
};
use std::collections::VecDeque;
use unicode_segmentation::UnicodeSegmentation;

pub struct ChatSession {
    project_id: Option<String>,
    messages: Vec<Message>,
    input: String,
    status: ChatStatus,
    pending: VecDeque<GenerationRequest>,
    file_system: FileSystemHandle,
    next_id: u64,
}

impl ChatSession {
    pub fn new(
        project_id: Option<String>,
        initial_messages: Vec<Message>,
        file_system: FileSystemHandle,
    ) -> Self {
        let next_id = initial_messages.len() as u64;
        Self {
            project_id,
            messages: initial_messages,
            input: String::new(),
            status: ChatStatus::Ready,
            pending: VecDeque::new(),
            file_system,
            next_id,
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    fn push_message(&mut self, role: Role, content: &str) {
        self.next_id += 1;
        let id = format!("msg-{}", self.next_id);
        self.messages.push(Message::new(id, role, content));
    }
}

impl ChatProvider for ChatSession {
    fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn input(&self) -> &str {
        &self.input
    }

    fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    fn insert_str(&mut self, text: &str) {
        self.input.push_str(text);
    }

    fn backspace(&mut self) -> bool {
        let Some((idx, _)) = self.input.grapheme_indices(true).next_back() else {
            return false;
        };
        self.input.truncate(idx);
        true
    }

    fn submit(&mut self) -> bool {
        if self.status == ChatStatus::Submitted {
            return false;
        }
        let content = self.input.trim().to_string();
        if content.is_empty() {
            return false;
        }

        self.push_message(Role::User, &content);
        self.input.clear();
        self.status = ChatStatus::Submitted;

        let files = self.file_system.borrow().serialize();
        self.pending.push_back(GenerationRequest {
            project_id: self.project_id.clone(),
            system_prompt: GENERATION_PROMPT.to_string(),
            messages: self.messages.clone(),
            files,
        });
        tracing::debug!(
            project_id = ?self.project_id,
            messages = self.messages.len(),
            "queued generation request"
        );
        true
    }

    fn take_pending(&mut self) -> Vec<GenerationRequest> {
        self.pending.drain(..).collect()
    }

    fn push_assistant(&mut self, content: &str) {
        self.push_message(Role::Assistant, content);
        self.status = ChatStatus::Ready;
    }

    fn status(&self) -> ChatStatus {
        self.status
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/chat.rs"]
mod tests;
