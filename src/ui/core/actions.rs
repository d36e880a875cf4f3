/// Outbound notification of a dropdown commit.
///
/// `source` is the name of the emitting widget so the host can tell several
/// dropdowns apart; `value` is the committed option id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub source: String,
    pub value: Option<String>,
}

/// Fields of the host form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Username,
    Choice,
    Age,
}

impl FormField {
    /// Explicit tab order of the form
    pub const TAB_ORDER: [FormField; 3] = [FormField::Username, FormField::Choice, FormField::Age];

    pub fn index(self) -> usize {
        match self {
            FormField::Username => 0,
            FormField::Choice => 1,
            FormField::Age => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Widget notifications
    SelectionChanged(SelectionChanged),
    InputChanged(FormField),

    // Focus navigation
    FocusField(FormField),
    FocusNext,
    FocusPrevious,
    ResetFocus,

    // Form
    Submit,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
