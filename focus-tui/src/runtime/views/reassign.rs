use crate::app::{App, Dialog};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_reassign_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(Dialog::Reassign(picker)) = &mut app.dialog else {
        return;
    };

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => picker.move_down(),
        KeyCode::Up | KeyCode::Char('k') => picker.move_up(),
        KeyCode::Enter => {
            let action = Action::ReassignTodo {
                todo_id: picker.todo_id.clone(),
                goal_id: picker.chosen(),
            };
            enqueue_action(action_tx, action);
        }
        KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
        _ => {}
    }
}
