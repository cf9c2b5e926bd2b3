use std::collections::VecDeque;
use std::sync::Arc;

use crate::models::{
    Goal, GoalDraft, GoalId, NewTodo, Session, Todo, TodoDraft, TodoId, TodoPatch, UserId,
};
use crate::ports::outbound::FocusStore;
use crate::view::{self, Progress, ViewMode};
use crate::{FocusError, GoalMatcher, Notice};

/// In-memory mirror of the signed-in user's goals and todos.
///
/// Every mutation awaits the remote store first and only then touches local
/// state. A failed call leaves local state as it was (except [`reload`],
/// which empties both lists) and pushes a generic [`Notice`]; the detailed
/// error is returned and logged.
///
/// `M` is the goal matching strategy. The default `()` never assigns a goal.
///
/// [`reload`]: FocusWorkspace::reload
pub struct FocusWorkspace<S, M: ?Sized = ()> {
    store: Arc<S>,
    matcher: Arc<M>,
    session: Option<Session>,
    goals: Vec<Goal>,
    todos: Vec<Todo>,
    view_mode: ViewMode,
    selected_goal: Option<GoalId>,
    loading: bool,
    notices: VecDeque<Notice>,
}

impl<S> FocusWorkspace<S, ()> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_matcher(store, Arc::new(()))
    }
}

impl<S, M: ?Sized> FocusWorkspace<S, M> {
    pub fn with_matcher(store: Arc<S>, matcher: Arc<M>) -> Self {
        Self {
            store,
            matcher,
            session: None,
            goals: Vec::new(),
            todos: Vec::new(),
            view_mode: ViewMode::default(),
            selected_goal: None,
            loading: true,
            notices: VecDeque::new(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn goal(&self, goal_id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == goal_id)
    }

    pub fn todo(&self, todo_id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == todo_id)
    }

    /// True until the first auth state arrives, and while a reload runs.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn selected_goal(&self) -> Option<&GoalId> {
        self.selected_goal.as_ref()
    }

    pub fn select_goal(&mut self, goal_id: Option<GoalId>) {
        self.selected_goal = goal_id;
    }

    /// Todos passing the current view filter, in stored order.
    pub fn visible_todos(&self) -> Vec<&Todo> {
        view::filter_todos(&self.todos, self.view_mode, self.selected_goal.as_ref())
    }

    /// Overall completion across all todos.
    pub fn progress(&self) -> Progress {
        Progress::of(&self.todos)
    }

    pub fn goal_progress(&self, goal_id: &GoalId) -> Progress {
        view::goal_progress(&self.todos, goal_id)
    }

    /// Take every notice produced since the last call, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    fn current_user(&self) -> Result<UserId, FocusError> {
        self.session
            .as_ref()
            .map(|s| s.user_id.clone())
            .ok_or(FocusError::NotSignedIn)
    }

    /// Log the error, push the generic notice, hand the error back.
    fn fail(&mut self, message: &str, err: impl Into<FocusError>) -> FocusError {
        let err = err.into();
        tracing::error!(error = %err, "{}", message);
        self.notify(Notice::error(message));
        err
    }
}

impl<S, M> FocusWorkspace<S, M>
where
    S: FocusStore,
    M: GoalMatcher + ?Sized,
{
    /// Apply an auth state change. A session triggers a reload; no session
    /// drops all user data. A failed reload has already pushed its notice.
    pub async fn on_auth_state_changed(
        &mut self,
        session: Option<Session>,
    ) -> Result<(), FocusError> {
        self.session = session;
        if self.session.is_some() {
            return self.reload().await;
        }
        self.goals.clear();
        self.todos.clear();
        self.selected_goal = None;
        self.loading = false;
        Ok(())
    }

    /// Fetch goals and todos concurrently and replace both lists.
    pub async fn reload(&mut self) -> Result<(), FocusError> {
        self.loading = true;
        let result = self.fetch_all().await;
        self.loading = false;

        match result {
            Ok((goals, todos)) => {
                tracing::debug!(goals = goals.len(), todos = todos.len(), "Loaded data");
                self.goals = goals;
                self.todos = todos;
                Ok(())
            }
            Err(e) => {
                self.goals.clear();
                self.todos.clear();
                Err(self.fail("Failed to load data", e))
            }
        }
    }

    async fn fetch_all(&self) -> Result<(Vec<Goal>, Vec<Todo>), FocusError> {
        let user_id = self.current_user()?;
        let (goals, todos) = tokio::try_join!(
            self.store.list_goals(&user_id),
            self.store.list_todos(&user_id)
        )?;
        Ok((goals, todos))
    }

    pub async fn add_goal(&mut self, draft: GoalDraft) -> Result<Goal, FocusError> {
        let draft = match draft.validate() {
            Ok(draft) => draft,
            Err(e) => return Err(self.fail("Title is required", e)),
        };
        let user_id = match self.current_user() {
            Ok(user_id) => user_id,
            Err(e) => return Err(self.fail("Failed to create goal", e)),
        };

        let new_goal = draft.into_new_goal(user_id);
        match self.store.create_goal(&new_goal).await {
            Ok(goal) => {
                self.goals.push(goal.clone());
                self.notify(Notice::success("Goal created successfully!"));
                Ok(goal)
            }
            Err(e) => Err(self.fail("Failed to create goal", e)),
        }
    }

    /// Create a todo. Without an explicit goal, and with at least one goal
    /// present, the matcher gets a chance to pick one.
    pub async fn add_todo(&mut self, draft: TodoDraft) -> Result<Todo, FocusError> {
        let draft = match draft.validate() {
            Ok(draft) => draft,
            Err(e) => return Err(self.fail("Title is required", e)),
        };
        let user_id = match self.current_user() {
            Ok(user_id) => user_id,
            Err(e) => return Err(self.fail("Failed to add task", e)),
        };

        let mut auto_assigned = false;
        let goal_id = match draft.goal_id {
            Some(goal_id) => Some(goal_id),
            None if !self.goals.is_empty() => {
                let matched = self.matcher.match_goal(&self.goals, &draft.title).await;
                auto_assigned = matched.is_some();
                matched
            }
            None => None,
        };

        let new_todo = NewTodo {
            user_id,
            title: draft.title,
            description: draft.description,
            goal_id,
            priority: draft.priority,
            completed: false,
            order_index: self.todos.len() as i64,
        };

        match self.store.create_todo(&new_todo).await {
            Ok(todo) => {
                if auto_assigned {
                    if let Some(goal) = todo.goal_id.as_ref().and_then(|id| self.goal(id)) {
                        let message = format!("AI matched this task to \"{}\"", goal.title);
                        self.notify(Notice::success(message));
                    }
                }
                self.todos.push(todo.clone());
                self.notify(Notice::success("Task added successfully!"));
                Ok(todo)
            }
            Err(e) => Err(self.fail("Failed to add task", e)),
        }
    }

    /// Flip a todo's completed flag. Returns the new flag, or `None` when the
    /// todo is unknown.
    pub async fn toggle_todo(&mut self, todo_id: &TodoId) -> Result<Option<bool>, FocusError> {
        let Some(was_completed) = self.todo(todo_id).map(|t| t.completed) else {
            return Ok(None);
        };

        let patch = TodoPatch::completed(!was_completed);
        if let Err(e) = self.store.update_todo(todo_id, &patch).await {
            return Err(self.fail("Failed to update task", e));
        }

        self.patch_local(todo_id, &patch);
        if !was_completed {
            self.notify(Notice::success("Task completed!"));
        }
        Ok(Some(!was_completed))
    }

    /// Point a todo at another goal, or at none.
    pub async fn reassign_todo_goal(
        &mut self,
        todo_id: &TodoId,
        goal_id: Option<GoalId>,
    ) -> Result<(), FocusError> {
        let patch = TodoPatch::goal(goal_id);
        if let Err(e) = self.store.update_todo(todo_id, &patch).await {
            return Err(self.fail("Failed to update task goal", e));
        }

        self.patch_local(todo_id, &patch);
        self.notify(Notice::success("Task goal updated!"));
        Ok(())
    }

    /// Delete a goal. Todos pointing at it keep their now dangling goal id.
    pub async fn delete_goal(&mut self, goal_id: &GoalId) -> Result<(), FocusError> {
        if let Err(e) = self.store.delete_goal(goal_id).await {
            return Err(self.fail("Failed to delete goal", e));
        }

        self.goals.retain(|g| &g.id != goal_id);
        if self.selected_goal.as_ref() == Some(goal_id) {
            self.selected_goal = None;
        }
        self.notify(Notice::success("Goal deleted"));
        Ok(())
    }

    pub async fn delete_todo(&mut self, todo_id: &TodoId) -> Result<(), FocusError> {
        if let Err(e) = self.store.delete_todo(todo_id).await {
            return Err(self.fail("Failed to delete task", e));
        }

        self.todos.retain(|t| &t.id != todo_id);
        self.notify(Notice::success("Task deleted"));
        Ok(())
    }

    fn patch_local(&mut self, todo_id: &TodoId, patch: &TodoPatch) {
        if let Some(todo) = self.todos.iter_mut().find(|t| &t.id == todo_id) {
            patch.apply_to(todo);
        }
    }
}
