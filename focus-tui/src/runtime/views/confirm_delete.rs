use crate::app::{App, DeleteTarget, Dialog};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_delete_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(Dialog::ConfirmDelete(target)) = &app.dialog else {
        return;
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let action = match target {
                DeleteTarget::Goal { id, .. } => Action::DeleteGoal(id.clone()),
                DeleteTarget::Todo { id, .. } => Action::DeleteTodo(id.clone()),
            };
            enqueue_action(action_tx, action);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}
