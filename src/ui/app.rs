//! Host form: owns the widgets, keeps the tab order and listens for
//! dropdown commits.

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use super::components::{Dropdown, TextInput};
use super::core::{Action, Component, EventType, FormField, SelectionChanged};
use super::layout::LayoutManager;
use crate::config::{FormConfig, UiConfig};
use crate::constants::{
    APP_DISPLAY_NAME, BAR_BACKGROUND, BORDER_COLOR, FOOTER_HINTS, PLACEHOLDER_AGE, PLACEHOLDER_USERNAME,
    STATUS_SUBMITTED, TITLE_AGE, TITLE_CHOICE, TITLE_REPORT, TITLE_USERNAME,
};

/// Values captured by the last submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub username: String,
    pub choice: Option<String>,
    pub age: Option<i64>,
}

pub struct App {
    pub username: TextInput,
    pub choice: Dropdown,
    pub age: TextInput,
    pub report: Option<Report>,
    pub status: Option<String>,
    pub should_quit: bool,
    focused: Option<FormField>,
    mouse_enabled: bool,
    report_width: u16,
    field_areas: [Rect; 3],
}

impl App {
    pub fn new(ui: &UiConfig, form: &FormConfig) -> Result<Self> {
        let choice = Dropdown::new(
            "choice",
            Some(TITLE_CHOICE),
            form.default_choice.as_deref(),
            form.choices.iter().map(String::as_str),
        )
        .context("Failed to build the choice dropdown")?;

        Ok(Self {
            username: TextInput::new(FormField::Username, TITLE_USERNAME, PLACEHOLDER_USERNAME),
            choice,
            age: TextInput::integer(FormField::Age, TITLE_AGE, PLACEHOLDER_AGE),
            report: None,
            status: None,
            should_quit: false,
            focused: None,
            mouse_enabled: ui.mouse_enabled,
            report_width: ui.report_width,
            field_areas: [Rect::default(); 3],
        })
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    fn field_mut(&mut self, field: FormField) -> &mut dyn Component {
        match field {
            FormField::Username => &mut self.username,
            FormField::Choice => &mut self.choice,
            FormField::Age => &mut self.age,
        }
    }

    /// Move keyboard focus, blurring the previous field first
    pub fn set_focus(&mut self, field: Option<FormField>) -> Action {
        if self.focused == field {
            return Action::None;
        }

        let mut action = Action::None;
        if let Some(previous) = self.focused.take() {
            action = self.field_mut(previous).on_blur();
        }
        self.focused = field;
        if let Some(next) = field {
            log::debug!("Focus moved to {:?}", next);
            let focus_action = self.field_mut(next).on_focus();
            if action.is_none() {
                action = focus_action;
            }
        }
        action
    }

    /// Route one terminal event and apply whatever action it produced
    pub fn handle_event(&mut self, event: EventType) -> Action {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) if self.mouse_enabled => self.handle_mouse(mouse),
            _ => Action::None,
        };
        self.update(action)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let field = FormField::TAB_ORDER
            .into_iter()
            .find(|f| LayoutManager::contains(self.field_areas[f.index()], mouse.column, mouse.row));

        match field {
            Some(FormField::Choice) => {
                let area = self.field_areas[FormField::Choice.index()];
                let mut action = self.choice.handle_events(Some(Event::Mouse(mouse)), area);
                // A click opens the dropdown on its own; only record the focus move here
                if self.choice.has_focus() && self.focused != Some(FormField::Choice) {
                    if let Some(previous) = self.focused.take() {
                        let blur_action = self.field_mut(previous).on_blur();
                        if action.is_none() {
                            action = blur_action;
                        }
                    }
                    self.focused = Some(FormField::Choice);
                }
                action
            }
            Some(field) => {
                let area = self.field_areas[field.index()];
                self.field_mut(field).handle_events(Some(Event::Mouse(mouse)), area)
            }
            None => Action::None,
        }
    }

    fn on_selection_changed(&mut self, change: &SelectionChanged) {
        let label = change
            .value
            .as_deref()
            .and_then(|id| self.choice.options().iter().find(|o| o.id == id))
            .map(|o| o.label.to_string())
            .unwrap_or_default();
        log::info!("Dropdown '{}' changed to {:?}", change.source, change.value);
        self.status = Some(format!("{} → {}", self.choice.title().unwrap_or(&change.source), label));
    }

    fn submit(&mut self) {
        let report = Report {
            username: self.username.value.clone(),
            choice: self.choice.value().map(str::to_string),
            age: self.age.integer_value(),
        };
        log::info!("Form submitted: {:?}", report);
        self.report = Some(report);
        self.status = Some(STATUS_SUBMITTED.to_string());
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let header = Paragraph::new(APP_DISPLAY_NAME)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(BAR_BACKGROUND));
        f.render_widget(header, rect);
    }

    fn render_footer(&self, f: &mut Frame, rect: Rect) {
        let mut spans = vec![Span::raw(FOOTER_HINTS)];
        if let Some(status) = &self.status {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(status.as_str(), Style::default().fg(Color::Yellow)));
        }
        let footer = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::White).bg(BAR_BACKGROUND));
        f.render_widget(footer, rect);
    }

    fn render_report(&self, f: &mut Frame, rect: Rect) {
        let lines: Vec<Line> = match &self.report {
            Some(report) => {
                let mut choice = vec![Span::raw(format!("{}: ", TITLE_CHOICE))];
                if let Some(option) = report
                    .choice
                    .as_deref()
                    .and_then(|id| self.choice.options().iter().find(|o| o.id == id))
                {
                    choice.extend(option.label.spans.iter().cloned());
                }
                vec![
                    Line::from(format!("{}: {}", TITLE_USERNAME, report.username)),
                    Line::from(choice),
                    Line::from(format!(
                        "{}: {}",
                        TITLE_AGE,
                        report.age.map(|a| a.to_string()).unwrap_or_default()
                    )),
                ]
            }
            None => Vec::new(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(TITLE_REPORT);
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

impl Component for App {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => return Action::FocusNext,
            KeyCode::BackTab => return Action::FocusPrevious,
            KeyCode::Esc => return Action::ResetFocus,
            _ => {}
        }

        match self.focused {
            None => match key.code {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Enter => Action::Submit,
                _ => Action::None,
            },
            Some(FormField::Choice) => self.choice.handle_key_events(key),
            Some(field) => match key.code {
                KeyCode::Enter => Action::Submit,
                _ => self.field_mut(field).handle_key_events(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectionChanged(change) => {
                self.on_selection_changed(&change);
                Action::None
            }
            Action::InputChanged(field) => {
                log::debug!("Input {:?} changed", field);
                Action::None
            }
            Action::FocusField(field) => self.set_focus(Some(field)),
            Action::FocusNext => {
                let order = FormField::TAB_ORDER;
                let next = match self.focused {
                    None => Some(order[0]),
                    Some(field) if field.index() + 1 < order.len() => Some(order[field.index() + 1]),
                    Some(_) => None,
                };
                match next {
                    Some(field) => self.set_focus(Some(field)),
                    None => Action::None,
                }
            }
            Action::FocusPrevious => match self.focused {
                Some(field) if field.index() > 0 => self.set_focus(Some(FormField::TAB_ORDER[field.index() - 1])),
                _ => Action::None,
            },
            Action::ResetFocus => self.set_focus(None),
            Action::Submit => {
                self.submit();
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect, self.report_width);

        self.render_header(f, areas.header);
        self.render_report(f, areas.report);

        let heights = [self.username.height(), self.choice.height(), self.age.height()];
        let rects = LayoutManager::form_layout(areas.form, &heights);
        for (slot, rect) in self.field_areas.iter_mut().zip(rects) {
            *slot = rect;
        }

        let [username_area, choice_area, age_area] = self.field_areas;
        self.username.render(f, username_area);
        self.choice.render(f, choice_area);
        self.age.render(f, age_area);

        self.render_footer(f, areas.footer);
    }
}
