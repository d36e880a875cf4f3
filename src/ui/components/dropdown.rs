//! Dropdown selection widget.
//!
//! A dropdown is either closed, showing the committed value on one row, or
//! open, listing every option with one of them highlighted. Hovering only
//! previews an option; it becomes the value when committed with Enter/Space or
//! a second click. Every commit hands a [`SelectionChanged`] back to the host.

use crate::constants::{
    BORDER_CHROME, BORDER_COLOR, DROPDOWN_CLOSED_MARKER, DROPDOWN_OPEN_MARKER, HOVER_BACKGROUND,
};
use crate::ui::core::{Action, Component, SelectionChanged};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashSet;

/// Reasons a dropdown cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropdownError {
    #[error("dropdown needs at least one option")]
    NoOptions,

    #[error("duplicate option id: {0}")]
    DuplicateOption(String),

    #[error("initial value '{0}' is not one of the options")]
    UnknownValue(String),
}

/// One entry of the choice list.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub id: String,
    pub label: Line<'static>,
}

impl DropdownOption {
    pub fn new(id: impl Into<String>, label: impl Into<Line<'static>>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for DropdownOption {
    fn from(id: &str) -> Self {
        Self::new(id, id.to_string())
    }
}

impl From<String> for DropdownOption {
    fn from(id: String) -> Self {
        let label = id.clone();
        Self::new(id, label)
    }
}

impl From<(&str, &str)> for DropdownOption {
    fn from((id, label): (&str, &str)) -> Self {
        Self::new(id, label.to_string())
    }
}

impl From<(&str, Line<'static>)> for DropdownOption {
    fn from((id, label): (&str, Line<'static>)) -> Self {
        Self::new(id, label)
    }
}

/// Input a dropdown reacts to. Pointer targets are option ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownInput {
    FocusGained,
    Blur,
    PointerMove(Option<String>),
    Click(Option<String>),
    Key(KeyCode),
}

/// A single row of the rendered dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownRow {
    pub id: Option<String>,
    pub label: Line<'static>,
    pub hovered: bool,
    pub marker: &'static str,
}

/// Snapshot of what the dropdown should look like right now.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub title: Option<String>,
    pub expanded: bool,
    pub rows: Vec<DropdownRow>,
}

impl DropdownView {
    /// Rows needed to draw the view, border included
    pub fn height(&self) -> u16 {
        self.rows.len() as u16 + BORDER_CHROME
    }
}

/// Interactive choice widget.
///
/// `value` and `hovered` are kept as indices into `options`, so they can only
/// ever point at an existing option. `hovered` is set exactly while the widget
/// has focus.
#[derive(Debug, Clone)]
pub struct Dropdown {
    name: String,
    title: Option<String>,
    options: Vec<DropdownOption>,
    value: Option<usize>,
    hovered: Option<usize>,
    has_focus: bool,
}

impl Dropdown {
    pub fn new<I, O>(
        name: impl Into<String>,
        title: Option<&str>,
        value: Option<&str>,
        options: I,
    ) -> Result<Self, DropdownError>
    where
        I: IntoIterator<Item = O>,
        O: Into<DropdownOption>,
    {
        let options: Vec<DropdownOption> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(DropdownError::NoOptions);
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.id.as_str()) {
                return Err(DropdownError::DuplicateOption(option.id.clone()));
            }
        }

        let value = match value {
            Some(id) => Some(
                options
                    .iter()
                    .position(|o| o.id == id)
                    .ok_or_else(|| DropdownError::UnknownValue(id.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            name: name.into(),
            title: title.map(str::to_string),
            options,
            value,
            hovered: None,
            has_focus: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    /// Committed option id
    pub fn value(&self) -> Option<&str> {
        self.value.map(|i| self.options[i].id.as_str())
    }

    /// Highlighted option id, only set while open
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.map(|i| self.options[i].id.as_str())
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Label of the committed option
    pub fn selected_label(&self) -> Option<&Line<'static>> {
        self.value.map(|i| &self.options[i].label)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    /// Feed one input event through the state machine.
    ///
    /// Returns [`Action::SelectionChanged`] when the event committed a value,
    /// [`Action::None`] otherwise.
    pub fn handle_input(&mut self, input: DropdownInput) -> Action {
        match input {
            DropdownInput::FocusGained => {
                self.open_at(self.value.unwrap_or(0));
                Action::None
            }
            DropdownInput::Blur => {
                self.close();
                Action::None
            }
            DropdownInput::PointerMove(target) => {
                if self.has_focus {
                    if let Some(index) = target.as_deref().and_then(|id| self.index_of(id)) {
                        self.hovered = Some(index);
                    }
                }
                Action::None
            }
            DropdownInput::Click(target) => {
                let index = target.as_deref().and_then(|id| self.index_of(id));
                match (self.has_focus, index) {
                    (false, Some(index)) => {
                        self.open_at(index);
                        Action::None
                    }
                    (false, None) => {
                        self.open_at(self.value.unwrap_or(0));
                        Action::None
                    }
                    (true, Some(index)) => {
                        self.hovered = Some(index);
                        self.commit()
                    }
                    // Border or title clicked while open
                    (true, None) => Action::None,
                }
            }
            DropdownInput::Key(code) => self.handle_key(code),
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.has_focus {
                    self.commit()
                } else {
                    self.open_at(self.value.unwrap_or(0));
                    Action::None
                }
            }
            KeyCode::Up => {
                let len = self.options.len();
                self.hovered = self.hovered.map(|i| (i + len - 1) % len);
                Action::None
            }
            KeyCode::Down => {
                let len = self.options.len();
                self.hovered = self.hovered.map(|i| (i + 1) % len);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn open_at(&mut self, index: usize) {
        self.hovered = Some(index);
        self.has_focus = true;
        log::debug!("Dropdown '{}' opened on '{}'", self.name, self.options[index].id);
    }

    fn close(&mut self) {
        self.has_focus = false;
        self.hovered = None;
    }

    fn commit(&mut self) -> Action {
        self.value = self.hovered;
        self.close();

        let value = self.value().map(str::to_string);
        log::debug!("Dropdown '{}' committed {:?}", self.name, value);
        Action::SelectionChanged(SelectionChanged {
            source: self.name.clone(),
            value,
        })
    }

    /// Current renderable representation. Has no side effects.
    pub fn view(&self) -> DropdownView {
        let rows = if self.has_focus {
            self.options
                .iter()
                .enumerate()
                .map(|(i, option)| DropdownRow {
                    id: Some(option.id.clone()),
                    label: option.label.clone(),
                    hovered: self.hovered == Some(i),
                    marker: if i == 0 { DROPDOWN_OPEN_MARKER } else { "" },
                })
                .collect()
        } else {
            vec![DropdownRow {
                id: self.value().map(str::to_string),
                label: self.selected_label().cloned().unwrap_or_default(),
                hovered: false,
                marker: DROPDOWN_CLOSED_MARKER,
            }]
        };

        DropdownView {
            title: self.title.clone(),
            expanded: self.has_focus,
            rows,
        }
    }

    /// Option id under a terminal cell, given the area the widget was drawn in
    pub fn option_at(&self, area: Rect, column: u16, row: u16) -> Option<&str> {
        if !self.has_focus {
            return None;
        }
        let inner = Self::block(None, true).inner(area);
        let inside = column >= inner.x
            && column < inner.x + inner.width
            && row >= inner.y
            && row < inner.y + inner.height;
        if !inside {
            return None;
        }
        self.options
            .get((row - inner.y) as usize)
            .map(|o| o.id.as_str())
    }

    /// Translate a terminal mouse event into dropdown input
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        let target = self.option_at(area, mouse.column, mouse.row).map(str::to_string);
        match mouse.kind {
            MouseEventKind::Moved => self.handle_input(DropdownInput::PointerMove(target)),
            MouseEventKind::Down(MouseButton::Left) => self.handle_input(DropdownInput::Click(target)),
            _ => Action::None,
        }
    }

    fn block(title: Option<&str>, expanded: bool) -> Block<'_> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if expanded { BorderType::Double } else { BorderType::Plain })
            .border_style(Style::default().fg(BORDER_COLOR))
            .title_alignment(Alignment::Left);
        match title {
            Some(title) => block.title(title),
            None => block,
        }
    }
}

impl Component for Dropdown {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_input(DropdownInput::Key(key.code))
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        self.handle_mouse(mouse, area)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let view = self.view();
        let block = Self::block(view.title.as_deref(), view.expanded);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        for (i, row) in view.rows.into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            let [label_area, marker_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(row_area);

            let style = if row.hovered {
                Style::default().bg(HOVER_BACKGROUND)
            } else {
                Style::default()
            };
            f.render_widget(Paragraph::new(row.label).style(style), label_area);
            f.render_widget(Paragraph::new(row.marker), marker_area);
        }
    }

    fn height(&self) -> u16 {
        let rows = if self.has_focus { self.options.len() } else { 1 };
        rows as u16 + BORDER_CHROME
    }

    fn on_focus(&mut self) -> Action {
        self.handle_input(DropdownInput::FocusGained)
    }

    fn on_blur(&mut self) -> Action {
        self.handle_input(DropdownInput::Blur)
    }
}
