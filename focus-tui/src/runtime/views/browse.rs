use crate::app::{App, Pane, Workspace};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_browse_key(
    key: KeyEvent,
    app: &mut App,
    ws: &mut Workspace,
    action_tx: &ActionTx,
) {
    if ws.session().is_none() {
        // Signed out: nothing to browse.
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.focused_pane = app.focused_pane.toggle(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(ws),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Enter if app.focused_pane == Pane::Goals => app.select_goal_under_cursor(ws),
        KeyCode::Char('v') => {
            ws.set_view_mode(ws.view_mode().next());
            app.todo_cursor = 0;
        }
        KeyCode::Char('g') => app.open_add_goal(),
        KeyCode::Char('a') => app.open_add_todo(ws),
        KeyCode::Char(' ') if app.focused_pane == Pane::Todos => {
            if let Some(todo) = app.todo_under_cursor(ws) {
                enqueue_action(action_tx, Action::ToggleTodo(todo.id.clone()));
            }
        }
        KeyCode::Char('r') if app.focused_pane == Pane::Todos => app.open_reassign(ws),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete(ws),
        KeyCode::Char('R') => enqueue_action(action_tx, Action::Reload),
        KeyCode::Char('L') => enqueue_action(action_tx, Action::SignOut),
        _ => {}
    }
}
