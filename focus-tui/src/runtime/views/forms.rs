use crate::app::{GoalField, GoalForm, TodoField, TodoForm};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::Action;
use super::edit_text;

/// Returns the submit action on Enter. Esc is left to the caller.
pub(super) fn handle_goal_form_key(key: KeyEvent, form: &mut GoalForm) -> Option<Action> {
    match key.code {
        KeyCode::Enter => return Some(Action::SubmitGoal(form.to_draft())),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        _ if form.focused == GoalField::Color => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => form.cycle_color(true),
            KeyCode::Left | KeyCode::Char('h') => form.cycle_color(false),
            _ => {}
        },
        _ => {
            if let Some(input) = form.focused_input() {
                if edit_text(input, key) {
                    form.error = None;
                }
            }
        }
    }
    None
}

/// Returns the submit action on Enter. Esc is left to the caller.
pub(super) fn handle_todo_form_key(key: KeyEvent, form: &mut TodoForm) -> Option<Action> {
    match key.code {
        KeyCode::Enter => return Some(Action::SubmitTodo(form.to_draft())),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        _ if matches!(form.focused, TodoField::Goal | TodoField::Priority) => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => form.cycle(true),
            KeyCode::Left | KeyCode::Char('h') => form.cycle(false),
            _ => {}
        },
        _ => {
            if let Some(input) = form.focused_input() {
                if edit_text(input, key) {
                    form.error = None;
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use goal_focus::models::Priority;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_fills_focused_field_and_enter_submits() {
        let mut form = GoalForm::default();
        for c in "Read".chars() {
            assert!(handle_goal_form_key(press(KeyCode::Char(c)), &mut form).is_none());
        }
        handle_goal_form_key(press(KeyCode::Tab), &mut form);
        handle_goal_form_key(press(KeyCode::Char('x')), &mut form);

        let Some(Action::SubmitGoal(draft)) = handle_goal_form_key(press(KeyCode::Enter), &mut form)
        else {
            panic!("expected submit");
        };
        assert_eq!(draft.title, "Read");
        assert_eq!(draft.description, "x");
    }

    #[test]
    fn letters_cycle_choices_instead_of_typing() {
        let mut form = TodoForm::new(&[]);
        form.focused = TodoField::Priority;

        handle_todo_form_key(press(KeyCode::Char('l')), &mut form);
        assert_eq!(form.priority, Priority::Medium);
        assert!(form.title.value.is_empty());
    }

    #[test]
    fn editing_clears_inline_error() {
        let mut form = TodoForm::new(&[]);
        form.error = Some("Title is required".to_string());
        handle_todo_form_key(press(KeyCode::Char('a')), &mut form);
        assert_eq!(form.error, None);
    }
}
