//! 快捷键：按键 → 命令
//!
//! Bindings are global: they are resolved before the focused panel sees the key.

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.global.get(key)
    }

    pub fn bindings(&self) -> &FxHashMap<Key, Command> {
        &self.global
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.global.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.global.remove(key)
    }

    /// An empty command unbinds the key; unparsable keys are skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring unparsable keybinding");
                continue;
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(&key);
            } else {
                self.bind(key, Command::from_name(rule.command.trim()));
            }
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

    bindings.insert(Key::alt(KeyCode::Char('1')), Command::ShowPreview);
    bindings.insert(Key::alt(KeyCode::Char('2')), Command::ShowCode);
    bindings.insert(Key::ctrl(KeyCode::Char('t')), Command::ToggleView);

    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    bindings.insert(Key::shift(KeyCode::BackTab), Command::FocusPrev);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusPrev);
    bindings.insert(Key::simple(KeyCode::Esc), Command::FocusChat);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
