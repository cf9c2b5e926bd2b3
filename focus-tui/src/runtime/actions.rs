use anyhow::Result;
use goal_focus::models::{GoalDraft, Session, TodoDraft};
use goal_focus::{AuthState, FocusError, Notice, StoreError};

use crate::app::{App, Dialog, Workspace};
use crate::session_store;

use super::action_queue::Action;

const UNAUTH_RELOGIN: &str = "Session expired. Run `goal-focus login` to re-authenticate.";

pub(super) async fn run_action(
    action: Action,
    app: &mut App,
    ws: &mut Workspace,
    auth: &AuthState,
) -> Result<()> {
    let result = match action {
        Action::Reload => ws.reload().await,
        Action::SubmitGoal(draft) => submit_goal(draft, app, ws).await,
        Action::SubmitTodo(draft) => submit_todo(draft, app, ws).await,
        Action::ToggleTodo(todo_id) => ws.toggle_todo(&todo_id).await.map(|_| ()),
        Action::ReassignTodo { todo_id, goal_id } => {
            app.close_dialog();
            ws.reassign_todo_goal(&todo_id, goal_id).await
        }
        Action::DeleteGoal(goal_id) => {
            app.close_dialog();
            ws.delete_goal(&goal_id).await
        }
        Action::DeleteTodo(todo_id) => {
            app.close_dialog();
            ws.delete_todo(&todo_id).await
        }
        Action::SignOut => {
            sign_out(app, auth)?;
            Ok(())
        }
    };

    app.show_notices(ws.drain_notices());
    report_unauthorized(app, &result);
    app.clamp_cursors(ws);
    Ok(())
}

/// Replace the generic failure notice when the token was rejected.
fn report_unauthorized(app: &mut App, result: &Result<(), FocusError>) {
    if let Err(FocusError::Store(StoreError::Unauthorized)) = result {
        app.set_status(Notice::error(UNAUTH_RELOGIN));
    }
}

/// Forward an auth change to the workspace and refresh the status line.
pub(super) async fn apply_auth_change(
    session: Option<Session>,
    app: &mut App,
    ws: &mut Workspace,
) {
    let signed_in = session.is_some();
    let result = ws.on_auth_state_changed(session).await;

    app.dialog = None;
    app.goal_cursor = 0;
    app.todo_cursor = 0;
    if !signed_in {
        app.set_status(Notice::success("Signed out"));
    }
    app.show_notices(ws.drain_notices());
    report_unauthorized(app, &result);
}

async fn submit_goal(
    draft: GoalDraft,
    app: &mut App,
    ws: &mut Workspace,
) -> Result<(), FocusError> {
    let result = ws.add_goal(draft).await.map(|_| ());
    close_form_unless_invalid(app, &result);
    result
}

async fn submit_todo(
    draft: TodoDraft,
    app: &mut App,
    ws: &mut Workspace,
) -> Result<(), FocusError> {
    let result = ws.add_todo(draft).await.map(|_| ());
    close_form_unless_invalid(app, &result);
    result
}

/// A rejected title keeps the form open with an inline error; anything else
/// closes it and leaves the outcome to the status line.
fn close_form_unless_invalid(app: &mut App, result: &Result<(), FocusError>) {
    if !matches!(result, Err(FocusError::Validation(_))) {
        app.close_dialog();
        return;
    }
    match &mut app.dialog {
        Some(Dialog::AddGoal(form)) => form.error = Some("Title is required".to_string()),
        Some(Dialog::AddTodo(form)) => form.error = Some("Title is required".to_string()),
        _ => {}
    }
}

fn sign_out(app: &mut App, auth: &AuthState) -> Result<()> {
    if !app.dev_mode {
        session_store::clear_token()?;
    }
    auth.sign_out();
    tracing::info!("Signed out");
    Ok(())
}
