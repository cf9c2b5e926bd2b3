use focus_client::FocusApiClient;
use goal_focus::models::{Goal, GoalId, Todo, TodoId};
use goal_focus::view::sort_for_display;
use goal_focus::{FocusWorkspace, GoalMatcher, Notice};
use throbber_widgets_tui::ThrobberState;

mod forms;
mod state;

pub use forms::*;
pub use state::*;

/// The workspace as wired by the binary: REST client plus a matcher picked
/// from config.
pub type Workspace = FocusWorkspace<FocusApiClient, dyn GoalMatcher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Goal { id: GoalId, title: String },
    Todo { id: TodoId, title: String },
}

impl DeleteTarget {
    pub fn title(&self) -> &str {
        match self {
            DeleteTarget::Goal { title, .. } | DeleteTarget::Todo { title, .. } => title,
        }
    }
}

/// Goal picker for moving a task to another goal. Index 0 is "No goal".
#[derive(Debug, Clone)]
pub struct ReassignPicker {
    pub todo_id: TodoId,
    pub todo_title: String,
    pub options: Vec<(Option<GoalId>, String)>,
    pub selected: usize,
}

impl ReassignPicker {
    fn new(todo: &Todo, goals: &[Goal]) -> Self {
        let options: Vec<(Option<GoalId>, String)> =
            std::iter::once((None, "No goal".to_string()))
                .chain(goals.iter().map(|g| (Some(g.id.clone()), g.title.clone())))
                .collect();
        let selected = options
            .iter()
            .position(|(id, _)| id.as_ref() == todo.goal_id.as_ref())
            .unwrap_or(0);

        Self {
            todo_id: todo.id.clone(),
            todo_title: todo.title.clone(),
            options,
            selected,
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn chosen(&self) -> Option<GoalId> {
        self.options
            .get(self.selected)
            .and_then(|(id, _)| id.clone())
    }
}

#[derive(Debug, Clone)]
pub enum Dialog {
    AddGoal(GoalForm),
    AddTodo(TodoForm),
    Reassign(ReassignPicker),
    ConfirmDelete(DeleteTarget),
}

pub struct App {
    pub running: bool,
    pub focused_pane: Pane,
    /// Row in the goals pane: 0 is "All Tasks", `i + 1` is `goals[i]`.
    pub goal_cursor: usize,
    pub todo_cursor: usize,
    pub dialog: Option<Dialog>,
    pub status: Vec<Notice>,
    pub throbber_state: ThrobberState,
    /// Set while a queued action talks to the backend.
    pub busy: bool,
    pub dev_mode: bool,
}

impl App {
    pub fn new(dev_mode: bool) -> Self {
        Self {
            running: true,
            focused_pane: Pane::default(),
            goal_cursor: 0,
            todo_cursor: 0,
            dialog: None,
            status: Vec::new(),
            throbber_state: ThrobberState::default(),
            busy: false,
            dev_mode,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, notice: Notice) {
        self.status = vec![notice];
    }

    /// Replace the status line with the latest batch of notices, if any.
    pub fn show_notices(&mut self, notices: Vec<Notice>) {
        if !notices.is_empty() {
            self.status = notices;
        }
    }

    pub fn goal_under_cursor<'a>(&self, ws: &'a Workspace) -> Option<&'a Goal> {
        self.goal_cursor
            .checked_sub(1)
            .and_then(|i| ws.goals().get(i))
    }

    pub fn todo_under_cursor<'a>(&self, ws: &'a Workspace) -> Option<&'a Todo> {
        displayed_todos(ws).get(self.todo_cursor).copied()
    }

    pub fn move_down(&mut self, ws: &Workspace) {
        match self.focused_pane {
            Pane::Goals => {
                if self.goal_cursor < ws.goals().len() {
                    self.goal_cursor += 1;
                }
            }
            Pane::Todos => {
                if self.todo_cursor + 1 < displayed_todos(ws).len() {
                    self.todo_cursor += 1;
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.focused_pane {
            Pane::Goals => self.goal_cursor = self.goal_cursor.saturating_sub(1),
            Pane::Todos => self.todo_cursor = self.todo_cursor.saturating_sub(1),
        }
    }

    /// Pull both cursors back inside their lists after data changed.
    pub fn clamp_cursors(&mut self, ws: &Workspace) {
        self.goal_cursor = self.goal_cursor.min(ws.goals().len());
        self.todo_cursor = self
            .todo_cursor
            .min(displayed_todos(ws).len().saturating_sub(1));
    }

    /// Select the goal under the cursor, or clear the selection on "All Tasks".
    pub fn select_goal_under_cursor(&mut self, ws: &mut Workspace) {
        let goal_id = self.goal_under_cursor(ws).map(|g| g.id.clone());
        ws.select_goal(goal_id);
        self.todo_cursor = 0;
    }

    pub fn open_add_goal(&mut self) {
        self.dialog = Some(Dialog::AddGoal(GoalForm::default()));
    }

    pub fn open_add_todo(&mut self, ws: &Workspace) {
        self.dialog = Some(Dialog::AddTodo(TodoForm::new(ws.goals())));
    }

    /// Open the goal picker for the task under the cursor. Completed tasks
    /// keep their goal.
    pub fn open_reassign(&mut self, ws: &Workspace) {
        match self.todo_under_cursor(ws) {
            Some(todo) if !todo.completed => {
                self.dialog = Some(Dialog::Reassign(ReassignPicker::new(todo, ws.goals())));
            }
            Some(_) => self.set_status(Notice::error("Only incomplete tasks can be reassigned")),
            None => {}
        }
    }

    pub fn open_delete(&mut self, ws: &Workspace) {
        let target = match self.focused_pane {
            Pane::Goals => self.goal_under_cursor(ws).map(|g| DeleteTarget::Goal {
                id: g.id.clone(),
                title: g.title.clone(),
            }),
            Pane::Todos => self.todo_under_cursor(ws).map(|t| DeleteTarget::Todo {
                id: t.id.clone(),
                title: t.title.clone(),
            }),
        };
        if let Some(target) = target {
            self.dialog = Some(Dialog::ConfirmDelete(target));
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}

/// Visible todos in display order: open tasks first, newest first.
pub fn displayed_todos(ws: &Workspace) -> Vec<&Todo> {
    let mut todos = ws.visible_todos();
    sort_for_display(&mut todos);
    todos
}

#[cfg(test)]
mod tests {
    use super::*;
    use goal_focus::view::ViewMode;
    use goal_focus::AuthState;
    use std::sync::Arc;

    async fn dev_workspace() -> Workspace {
        let client = Arc::new(FocusApiClient::dev().unwrap());
        let matcher: Arc<dyn GoalMatcher> = Arc::new(());
        let mut ws: Workspace = FocusWorkspace::with_matcher(client.clone(), matcher);

        let auth = AuthState::new();
        auth.sign_in(client.me().await.unwrap());
        ws.on_auth_state_changed(auth.current()).await.unwrap();
        ws
    }

    #[tokio::test]
    async fn displayed_todos_put_open_tasks_first() {
        let ws = dev_workspace().await;
        let todos = displayed_todos(&ws);

        let first_completed = todos.iter().position(|t| t.completed).unwrap();
        assert!(todos[first_completed..].iter().all(|t| t.completed));
        assert!(todos[..first_completed]
            .windows(2)
            .all(|w| w[0].order_index > w[1].order_index));
    }

    #[tokio::test]
    async fn goal_cursor_row_zero_is_all_tasks() {
        let mut ws = dev_workspace().await;
        let mut app = App::new(true);
        ws.set_view_mode(ViewMode::Goals);

        app.move_down(&ws);
        app.select_goal_under_cursor(&mut ws);
        let goal_id = ws.goals()[0].id.clone();
        assert_eq!(ws.selected_goal(), Some(&goal_id));
        assert!(displayed_todos(&ws)
            .iter()
            .all(|t| t.goal_id.as_ref() == Some(&goal_id)));

        app.move_up();
        app.select_goal_under_cursor(&mut ws);
        assert_eq!(ws.selected_goal(), None);
    }

    #[tokio::test]
    async fn cursors_stop_at_list_ends() {
        let ws = dev_workspace().await;
        let mut app = App::new(true);

        for _ in 0..10 {
            app.move_down(&ws);
        }
        assert_eq!(app.goal_cursor, ws.goals().len());

        app.focused_pane = Pane::Todos;
        for _ in 0..10 {
            app.move_down(&ws);
        }
        assert_eq!(app.todo_cursor, displayed_todos(&ws).len() - 1);
    }

    #[tokio::test]
    async fn reassign_is_refused_for_completed_tasks() {
        let ws = dev_workspace().await;
        let mut app = App::new(true);
        app.focused_pane = Pane::Todos;

        app.todo_cursor = displayed_todos(&ws).iter().position(|t| t.completed).unwrap();
        app.open_reassign(&ws);
        assert!(app.dialog.is_none());
        assert!(app.status[0].is_error());

        app.todo_cursor = 0;
        app.open_reassign(&ws);
        let Some(Dialog::Reassign(picker)) = &app.dialog else {
            panic!("expected reassign picker");
        };
        assert_eq!(picker.options[0].1, "No goal");
        assert_eq!(picker.options.len(), ws.goals().len() + 1);
    }

    #[tokio::test]
    async fn deleting_from_all_tasks_row_does_nothing() {
        let ws = dev_workspace().await;
        let mut app = App::new(true);

        app.open_delete(&ws);
        assert!(app.dialog.is_none());

        app.move_down(&ws);
        app.open_delete(&ws);
        assert!(matches!(
            app.dialog,
            Some(Dialog::ConfirmDelete(DeleteTarget::Goal { .. }))
        ));
    }

    #[test]
    fn show_notices_keeps_previous_status_on_empty_batch() {
        let mut app = App::new(false);
        app.show_notices(vec![Notice::success("Goal deleted")]);
        app.show_notices(Vec::new());
        assert_eq!(app.status, vec![Notice::success("Goal deleted")]);
    }
}
