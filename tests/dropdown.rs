use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use tman::ui::components::{Dropdown, DropdownError, DropdownInput, DropdownOption};
use tman::ui::core::{Action, Component, SelectionChanged};

fn abc() -> Dropdown {
    Dropdown::new("choice", Some("Pick"), None, ["A", "B", "C"]).unwrap()
}

fn key(code: KeyCode) -> DropdownInput {
    DropdownInput::Key(code)
}

fn click(id: &str) -> DropdownInput {
    DropdownInput::Click(Some(id.to_string()))
}

fn changed(value: &str) -> Action {
    Action::SelectionChanged(SelectionChanged {
        source: "choice".to_string(),
        value: Some(value.to_string()),
    })
}

fn assert_invariants(dropdown: &Dropdown) {
    let ids: Vec<&str> = dropdown.options().iter().map(|o| o.id.as_str()).collect();
    if dropdown.has_focus() {
        let hovered = dropdown.hovered().expect("hovered must be set while focused");
        assert!(ids.contains(&hovered));
    } else {
        assert_eq!(dropdown.hovered(), None, "hovered must be unset while closed");
    }
    if let Some(value) = dropdown.value() {
        assert!(ids.contains(&value));
    }
}

#[test]
fn test_construction_starts_closed() {
    let dropdown = abc();
    assert!(!dropdown.has_focus());
    assert_eq!(dropdown.value(), None);
    assert_eq!(dropdown.hovered(), None);
    assert_eq!(dropdown.title(), Some("Pick"));
    assert_eq!(dropdown.name(), "choice");
}

#[test]
fn test_construction_with_initial_value() {
    let dropdown = Dropdown::new("choice", None, Some("B"), ["A", "B"]).unwrap();
    assert_eq!(dropdown.value(), Some("B"));
    assert_eq!(dropdown.title(), None);
}

#[test]
fn test_construction_rejects_bad_input() {
    let empty: [&str; 0] = [];
    assert_eq!(
        Dropdown::new("choice", None, None, empty).unwrap_err(),
        DropdownError::NoOptions
    );
    assert_eq!(
        Dropdown::new("choice", None, Some("Z"), ["A", "B"]).unwrap_err(),
        DropdownError::UnknownValue("Z".to_string())
    );
    assert_eq!(
        Dropdown::new("choice", None, None, ["A", "B", "A"]).unwrap_err(),
        DropdownError::DuplicateOption("A".to_string())
    );
}

#[test]
fn test_options_keep_insertion_order_and_labels() {
    let styled = Line::from(vec![
        Span::styled("High", Style::default().fg(Color::Red)),
        Span::raw(" priority"),
    ]);
    let options = vec![
        DropdownOption::from(("low", "Low")),
        DropdownOption::from(("high", styled.clone())),
    ];
    let dropdown = Dropdown::new("priority", None, Some("high"), options).unwrap();

    let ids: Vec<&str> = dropdown.options().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["low", "high"]);
    assert_eq!(dropdown.selected_label(), Some(&styled));
}

#[test]
fn test_focus_hovers_first_option_without_value() {
    let mut dropdown = abc();
    assert_eq!(dropdown.handle_input(DropdownInput::FocusGained), Action::None);
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("A"));
}

#[test]
fn test_focus_hovers_current_value() {
    let mut dropdown = Dropdown::new("choice", None, Some("C"), ["A", "B", "C"]).unwrap();
    dropdown.handle_input(DropdownInput::FocusGained);
    assert_eq!(dropdown.hovered(), Some("C"));
}

#[test]
fn test_blur_closes_and_clears_hover() {
    let mut dropdown = abc();
    dropdown.handle_input(DropdownInput::FocusGained);
    dropdown.handle_input(key(KeyCode::Down));
    dropdown.handle_input(DropdownInput::Blur);

    assert!(!dropdown.has_focus());
    assert_eq!(dropdown.hovered(), None);
    assert_eq!(dropdown.value(), None, "blur must not commit");
}

#[test]
fn test_blur_on_closed_widget_is_idempotent() {
    let mut dropdown = Dropdown::new("choice", None, Some("B"), ["A", "B", "C"]).unwrap();
    dropdown.handle_input(DropdownInput::Blur);
    dropdown.handle_input(DropdownInput::Blur);

    assert!(!dropdown.has_focus());
    assert_eq!(dropdown.hovered(), None);
    assert_eq!(dropdown.value(), Some("B"));
}

#[test]
fn test_down_wraps_around() {
    let mut dropdown = abc();
    dropdown.handle_input(DropdownInput::FocusGained);
    let start = dropdown.hovered().map(str::to_string);

    for _ in 0..3 {
        dropdown.handle_input(key(KeyCode::Down));
    }
    assert_eq!(dropdown.hovered().map(str::to_string), start);
}

#[test]
fn test_up_from_first_goes_to_last() {
    let mut dropdown = abc();
    dropdown.handle_input(DropdownInput::FocusGained);
    assert_eq!(dropdown.hovered(), Some("A"));

    dropdown.handle_input(key(KeyCode::Up));
    assert_eq!(dropdown.hovered(), Some("C"));
    dropdown.handle_input(key(KeyCode::Up));
    assert_eq!(dropdown.hovered(), Some("B"));
}

#[test]
fn test_arrows_ignored_while_closed() {
    let mut dropdown = abc();
    assert_eq!(dropdown.handle_input(key(KeyCode::Down)), Action::None);
    assert_eq!(dropdown.handle_input(key(KeyCode::Up)), Action::None);
    assert!(!dropdown.has_focus());
    assert_eq!(dropdown.hovered(), None);
}

#[test]
fn test_commit_flow_with_enter() {
    let mut dropdown = Dropdown::new("choice", None, None, ["A", "B"]).unwrap();

    dropdown.handle_input(DropdownInput::FocusGained);
    assert_eq!(dropdown.hovered(), Some("A"));
    assert!(dropdown.has_focus());

    dropdown.handle_input(key(KeyCode::Down));
    assert_eq!(dropdown.hovered(), Some("B"));

    let action = dropdown.handle_input(key(KeyCode::Enter));
    assert_eq!(action, changed("B"));
    assert_eq!(dropdown.value(), Some("B"));
    assert!(!dropdown.has_focus());
}

#[test]
fn test_space_opens_then_commits() {
    let mut dropdown = abc();

    assert_eq!(dropdown.handle_input(key(KeyCode::Char(' '))), Action::None);
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("A"));

    assert_eq!(dropdown.handle_input(key(KeyCode::Char(' '))), changed("A"));
    assert_eq!(dropdown.value(), Some("A"));
}

#[test]
fn test_enter_while_closed_opens_on_value() {
    let mut dropdown = Dropdown::new("choice", None, Some("B"), ["A", "B", "C"]).unwrap();
    assert_eq!(dropdown.handle_input(key(KeyCode::Enter)), Action::None);
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("B"));
    assert_eq!(dropdown.value(), Some("B"));
}

#[test]
fn test_selection_changed_emitted_once_per_commit() {
    let mut dropdown = abc();
    let inputs = [
        key(KeyCode::Enter),
        key(KeyCode::Down),
        key(KeyCode::Enter),
        key(KeyCode::Enter),
        key(KeyCode::Enter),
    ];

    let notifications: Vec<Action> = inputs
        .into_iter()
        .map(|input| dropdown.handle_input(input))
        .filter(|action| !action.is_none())
        .collect();

    // open, move, commit B, reopen on B, commit B again
    assert_eq!(notifications, vec![changed("B"), changed("B")]);
}

#[test]
fn test_click_while_closed_opens_with_hover_only() {
    let mut dropdown = Dropdown::new("choice", None, None, ["A", "B"]).unwrap();

    assert_eq!(dropdown.handle_input(click("B")), Action::None);
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("B"));
    assert_eq!(dropdown.value(), None, "first click must not commit");
}

#[test]
fn test_click_while_open_commits_and_notifies() {
    let mut dropdown = abc();
    dropdown.handle_input(click("B"));

    assert_eq!(dropdown.handle_input(click("C")), changed("C"));
    assert_eq!(dropdown.value(), Some("C"));
    assert!(!dropdown.has_focus());
    assert_eq!(dropdown.hovered(), None);
}

#[test]
fn test_click_without_target() {
    let mut dropdown = Dropdown::new("choice", None, Some("C"), ["A", "B", "C"]).unwrap();

    // Activating the closed widget behaves like focus
    dropdown.handle_input(DropdownInput::Click(None));
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("C"));

    // Clicking chrome while open changes nothing
    dropdown.handle_input(key(KeyCode::Up));
    assert_eq!(dropdown.handle_input(DropdownInput::Click(None)), Action::None);
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("B"));
}

#[test]
fn test_pointer_move_only_hovers_while_open() {
    let mut dropdown = abc();

    dropdown.handle_input(DropdownInput::PointerMove(Some("C".to_string())));
    assert_eq!(dropdown.hovered(), None);

    dropdown.handle_input(DropdownInput::FocusGained);
    dropdown.handle_input(DropdownInput::PointerMove(Some("C".to_string())));
    assert_eq!(dropdown.hovered(), Some("C"));

    // Moving off the options keeps the last hover
    dropdown.handle_input(DropdownInput::PointerMove(None));
    assert_eq!(dropdown.hovered(), Some("C"));
    dropdown.handle_input(DropdownInput::PointerMove(Some("nope".to_string())));
    assert_eq!(dropdown.hovered(), Some("C"));
    assert_eq!(dropdown.value(), None);
}

#[test]
fn test_unrecognized_key_is_noop() {
    let mut closed = Dropdown::new("choice", None, Some("A"), ["A", "B"]).unwrap();
    assert_eq!(closed.handle_input(key(KeyCode::Char('x'))), Action::None);
    assert!(!closed.has_focus());
    assert_eq!(closed.value(), Some("A"));
    assert_eq!(closed.hovered(), None);

    let mut open = Dropdown::new("choice", None, Some("A"), ["A", "B"]).unwrap();
    open.handle_input(DropdownInput::FocusGained);
    open.handle_input(key(KeyCode::Down));
    assert_eq!(open.handle_input(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(open.handle_input(key(KeyCode::Tab)), Action::None);
    assert!(open.has_focus());
    assert_eq!(open.hovered(), Some("B"));
    assert_eq!(open.value(), Some("A"));
}

#[test]
fn test_component_adapters() {
    let mut dropdown = abc();

    assert_eq!(dropdown.on_focus(), Action::None);
    assert!(dropdown.has_focus());

    let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    dropdown.handle_key_events(down);
    assert_eq!(dropdown.hovered(), Some("B"));

    assert_eq!(dropdown.on_blur(), Action::None);
    assert!(!dropdown.has_focus());
}

#[test]
fn test_height_follows_open_state() {
    let mut dropdown = abc();
    assert_eq!(dropdown.height(), 3);
    dropdown.handle_input(DropdownInput::FocusGained);
    assert_eq!(dropdown.height(), 5);
    assert_eq!(dropdown.view().height(), 5);
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_mouse_click_maps_rows_to_options() {
    let mut dropdown = abc();
    let area = Rect::new(10, 5, 20, 5);
    let left = MouseEventKind::Down(MouseButton::Left);

    // Closed: any click inside opens on the default hover
    dropdown.handle_mouse(mouse(left, 12, 6), area);
    assert!(dropdown.has_focus());
    assert_eq!(dropdown.hovered(), Some("A"));

    // Open: row 0 of the inner area is the first option
    assert_eq!(dropdown.option_at(area, 12, 6), Some("A"));
    assert_eq!(dropdown.option_at(area, 12, 8), Some("C"));
    assert_eq!(dropdown.option_at(area, 12, 5), None, "top border");
    assert_eq!(dropdown.option_at(area, 10, 7), None, "left border");

    dropdown.handle_mouse(mouse(MouseEventKind::Moved, 15, 7), area);
    assert_eq!(dropdown.hovered(), Some("B"));

    let action = dropdown.handle_mouse(mouse(left, 15, 8), area);
    assert_eq!(action, changed("C"));
    assert!(!dropdown.has_focus());
}

#[test]
fn test_mouse_outside_area_is_ignored() {
    let mut dropdown = abc();
    let area = Rect::new(10, 5, 20, 3);
    let action = dropdown.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), area);
    assert_eq!(action, Action::None);
    assert!(!dropdown.has_focus());
}

fn alphabet() -> Vec<DropdownInput> {
    vec![
        DropdownInput::FocusGained,
        DropdownInput::Blur,
        DropdownInput::PointerMove(Some("A".to_string())),
        DropdownInput::PointerMove(Some("C".to_string())),
        DropdownInput::PointerMove(None),
        DropdownInput::Click(Some("B".to_string())),
        DropdownInput::Click(Some("missing".to_string())),
        DropdownInput::Click(None),
        key(KeyCode::Enter),
        key(KeyCode::Char(' ')),
        key(KeyCode::Up),
        key(KeyCode::Down),
        key(KeyCode::Char('x')),
    ]
}

#[test]
fn test_invariants_hold_for_all_short_sequences() {
    let alphabet = alphabet();
    let n = alphabet.len();

    for seq in 0..n.pow(4) {
        let mut dropdown = abc();
        let mut code = seq;
        for _ in 0..4 {
            let input = alphabet[code % n].clone();
            code /= n;

            let was_open = dropdown.has_focus();
            let before = dropdown.value().map(str::to_string);
            let action = dropdown.handle_input(input.clone());
            assert_invariants(&dropdown);

            if let Action::SelectionChanged(change) = action {
                assert!(was_open, "only an open dropdown can commit ({:?})", input);
                assert_eq!(change.value.as_deref(), dropdown.value());
            } else {
                assert_eq!(before.as_deref(), dropdown.value(), "value changed silently on {:?}", input);
            }
        }
    }
}
