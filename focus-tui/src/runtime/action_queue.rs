use goal_focus::models::{GoalDraft, GoalId, TodoDraft, TodoId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs the remote store, queued by key handlers and run by the
/// event loop between frames.
#[derive(Debug, Clone)]
pub(super) enum Action {
    Reload,
    SubmitGoal(GoalDraft),
    SubmitTodo(TodoDraft),
    ToggleTodo(TodoId),
    ReassignTodo {
        todo_id: TodoId,
        goal_id: Option<GoalId>,
    },
    DeleteGoal(GoalId),
    DeleteTodo(TodoId),
    SignOut,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
