//! Single-line text input used by the host form.

use crate::constants::{BORDER_COLOR, FOCUSED_BORDER_COLOR, PLACEHOLDER_COLOR};
use crate::ui::core::{Action, Component, FormField};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Bordered single-line input with a placeholder.
///
/// When `integer_only` is set, only ASCII digits (and a leading minus sign)
/// are accepted.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub field: FormField,
    pub title: String,
    pub placeholder: String,
    pub value: String,
    pub cursor_position: usize,
    pub has_focus: bool,
    pub integer_only: bool,
}

impl TextInput {
    pub fn new(field: FormField, title: &str, placeholder: &str) -> Self {
        Self {
            field,
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            cursor_position: 0,
            has_focus: false,
            integer_only: false,
        }
    }

    pub fn integer(field: FormField, title: &str, placeholder: &str) -> Self {
        Self {
            integer_only: true,
            ..Self::new(field, title, placeholder)
        }
    }

    /// Parsed value of an integer input
    pub fn integer_value(&self) -> Option<i64> {
        self.value.parse().ok()
    }

    fn byte_position(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    fn accepts(&self, c: char) -> bool {
        if !self.integer_only {
            return !c.is_control();
        }
        let before_sign = self.cursor_position == 0 && self.value.starts_with('-');
        if before_sign {
            return false;
        }
        c.is_ascii_digit() || (c == '-' && self.cursor_position == 0)
    }
}

impl Component for TextInput {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.has_focus {
            return Action::None;
        }

        let char_count = self.value.chars().count();
        match key.code {
            KeyCode::Char(c) if self.accepts(c) => {
                let byte_pos = self.byte_position();
                self.value.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::InputChanged(self.field)
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.cursor_position -= 1;
                let byte_pos = self.byte_position();
                self.value.remove(byte_pos);
                Action::InputChanged(self.field)
            }
            KeyCode::Delete if self.cursor_position < char_count => {
                let byte_pos = self.byte_position();
                self.value.remove(byte_pos);
                Action::InputChanged(self.field)
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(char_count);
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = char_count;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if is_in_area && !self.has_focus => Action::FocusField(self.field),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.has_focus { FOCUSED_BORDER_COLOR } else { BORDER_COLOR };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.has_focus { BorderType::Double } else { BorderType::Plain })
            .border_style(Style::default().fg(border_color))
            .title(self.title.as_str());
        let inner = block.inner(rect);

        let line = if self.value.is_empty() && !self.has_focus {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(PLACEHOLDER_COLOR),
            ))
        } else {
            Line::from(self.value.as_str())
        };

        f.render_widget(Paragraph::new(line).block(block), rect);

        if self.has_focus && inner.width > 0 {
            let offset = (self.cursor_position as u16).min(inner.width - 1);
            f.set_cursor_position((inner.x + offset, inner.y));
        }
    }

    fn on_focus(&mut self) -> Action {
        self.has_focus = true;
        self.cursor_position = self.value.chars().count();
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.has_focus = false;
        Action::None
    }
}
