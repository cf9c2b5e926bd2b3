use crate::app::{App, Dialog, TextInput, Workspace};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod browse;
mod confirm_delete;
mod forms;
mod reassign;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, ws: &mut Workspace, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match &mut app.dialog {
        Some(Dialog::AddGoal(form)) => {
            if let Some(action) = forms::handle_goal_form_key(key, form) {
                enqueue_action(action_tx, action);
            } else if key.code == KeyCode::Esc {
                app.close_dialog();
            }
        }
        Some(Dialog::AddTodo(form)) => {
            if let Some(action) = forms::handle_todo_form_key(key, form) {
                enqueue_action(action_tx, action);
            } else if key.code == KeyCode::Esc {
                app.close_dialog();
            }
        }
        Some(Dialog::Reassign(_)) => reassign::handle_reassign_key(key, app, action_tx),
        Some(Dialog::ConfirmDelete(_)) => {
            confirm_delete::handle_confirm_delete_key(key, app, action_tx)
        }
        None => browse::handle_browse_key(key, app, ws, action_tx),
    }
}

/// Shared line editing for text fields. Returns false for keys it ignores.
fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Char('u') => input.clear(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}
