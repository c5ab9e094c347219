//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标管理（行 + 字素列）
//! - 行列 ↔ 字符偏移映射

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Clamps to the buffer bounds.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Line content without its trailing newline.
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = slice_to_cow(self.rope.line(row));
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some(line.to_string())
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        without_newline.graphemes(true).count()
    }

    // ==================== 编辑 ====================

    pub fn insert_char(&mut self, c: char) {
        let char_offset = self.pos_to_char(self.cursor);
        self.rope.insert_char(char_offset, c);

        self.cursor = if c == '\n' {
            (self.cursor.0 + 1, 0)
        } else {
            (self.cursor.0, self.cursor.1 + 1)
        };
    }

    pub fn insert_str(&mut self, s: &str) {
        let char_offset = self.pos_to_char(self.cursor);
        self.rope.insert(char_offset, s);

        let newlines = s.matches('\n').count();
        self.cursor = match s.rfind('\n') {
            Some(last_newline) => {
                let after_last_newline = &s[last_newline + 1..];
                (
                    self.cursor.0 + newlines,
                    after_last_newline.graphemes(true).count(),
                )
            }
            None => (self.cursor.0, self.cursor.1 + s.graphemes(true).count()),
        };
    }

    /// Backspace。返回是否修改了文本
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;

        if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
            true
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let start = self.pos_to_char((row, 0)) - 1;
            self.rope.remove(start..start + 1);
            self.cursor = (row - 1, prev_len);
            true
        } else {
            false
        }
    }

    /// Delete。光标位置不变
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let line_len = self.line_grapheme_len(row);

        if col < line_len {
            let start = self.pos_to_char((row, col));
            let end = self.pos_to_char((row, col + 1));
            self.rope.remove(start..end);
            true
        } else if row + 1 < self.len_lines() {
            let start = self.pos_to_char((row, col));
            self.rope.remove(start..start + 1);
            true
        } else {
            false
        }
    }

    // ==================== 光标移动 ====================

    pub fn move_left(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor = (row, col - 1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_grapheme_len(row - 1));
        }
    }

    pub fn move_right(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.cursor = (row, col + 1);
        } else if row + 1 < self.len_lines() {
            self.cursor = (row + 1, 0);
        }
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor;
        if row > 0 {
            self.set_cursor(row - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor;
        if row + 1 < self.len_lines() {
            self.set_cursor(row + 1, col);
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor.1 = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.1 = self.line_grapheme_len(self.cursor.0);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
