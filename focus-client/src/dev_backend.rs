use std::sync::{Arc, Mutex, MutexGuard};

use goal_focus::models::{
    Goal, GoalId, NewGoal, NewTodo, Priority, Session, Todo, TodoId, TodoPatch, UserId,
};
use goal_focus::StoreError;
use time::OffsetDateTime;

pub const DEV_USER_ID: &str = "dev-user";

/// In-memory backend used by `FocusApiClient::dev()`. Seeded with a few
/// goals and todos; nothing is persisted.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug)]
struct DevStore {
    goals: Vec<Goal>,
    todos: Vec<Todo>,
    next_id: u32,
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DevBackend {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(seed_dev_store())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DevStore> {
        self.store.lock().expect("dev store lock poisoned")
    }

    pub fn session(&self) -> Session {
        Session {
            user_id: UserId::new(DEV_USER_ID),
            email: "dev@localhost".to_string(),
            display_name: Some("Dev User".to_string()),
        }
    }

    pub fn list_goals(&self, user_id: &UserId) -> Vec<Goal> {
        self.lock()
            .goals
            .iter()
            .filter(|g| &g.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn create_goal(&self, goal: &NewGoal) -> Goal {
        let mut store = self.lock();
        let now = OffsetDateTime::now_utc();
        let created = Goal {
            id: GoalId::new(store.next_id("goal")),
            user_id: goal.user_id.clone(),
            title: goal.title.clone(),
            description: goal.description.clone(),
            color: goal.color.clone(),
            created_at: now,
            updated_at: now,
        };
        store.goals.push(created.clone());
        created
    }

    pub fn delete_goal(&self, goal_id: &GoalId) {
        self.lock().goals.retain(|g| &g.id != goal_id);
    }

    pub fn list_todos(&self, user_id: &UserId) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self
            .lock()
            .todos
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.order_index);
        todos
    }

    pub fn create_todo(&self, todo: &NewTodo) -> Todo {
        let mut store = self.lock();
        let now = OffsetDateTime::now_utc();
        let created = Todo {
            id: TodoId::new(store.next_id("todo")),
            user_id: todo.user_id.clone(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            goal_id: todo.goal_id.clone(),
            priority: todo.priority,
            completed: todo.completed,
            order_index: todo.order_index,
            created_at: now,
            updated_at: now,
        };
        store.todos.push(created.clone());
        created
    }

    pub fn update_todo(&self, todo_id: &TodoId, patch: &TodoPatch) -> Result<(), StoreError> {
        let mut store = self.lock();
        let todo = store
            .todos
            .iter_mut()
            .find(|t| &t.id == todo_id)
            .ok_or_else(|| StoreError::NotFound(todo_id.to_string()))?;
        patch.apply_to(todo);
        todo.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }

    pub fn delete_todo(&self, todo_id: &TodoId) {
        self.lock().todos.retain(|t| &t.id != todo_id);
    }

    /// Stand-in for the text generation service: answers with the first goal
    /// title sharing a word with the quoted task in the prompt, else "none".
    pub fn generate_text(&self, prompt: &str) -> String {
        let task = quoted_task(prompt).unwrap_or(prompt).to_lowercase();
        let task_words: Vec<&str> = task
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() > 2)
            .collect();

        self.lock()
            .goals
            .iter()
            .find(|g| {
                let haystack = format!("{} {}", g.title, g.description).to_lowercase();
                haystack
                    .split(|c: char| !c.is_alphanumeric())
                    .any(|w| task_words.contains(&w))
            })
            .map(|g| g.title.clone())
            .unwrap_or_else(|| "none".to_string())
    }
}

impl DevStore {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("dev-{}-{}", prefix, self.next_id)
    }
}

fn quoted_task(prompt: &str) -> Option<&str> {
    let (_, rest) = prompt.rsplit_once("best match: \"")?;
    let (task, _) = rest.rsplit_once("\"?")?;
    Some(task)
}

fn seed_dev_store() -> DevStore {
    let now = OffsetDateTime::now_utc();
    let user_id = UserId::new(DEV_USER_ID);

    let goal = |id: &str, title: &str, description: &str, color: &str| Goal {
        id: GoalId::new(id),
        user_id: user_id.clone(),
        title: title.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        created_at: now,
        updated_at: now,
    };

    let todo = |id: &str,
                title: &str,
                goal_id: Option<&str>,
                priority: Priority,
                completed: bool,
                order_index: i64| Todo {
        id: TodoId::new(id),
        user_id: user_id.clone(),
        title: title.to_string(),
        description: String::new(),
        goal_id: goal_id.map(GoalId::new),
        priority,
        completed,
        order_index,
        created_at: now,
        updated_at: now,
    };

    DevStore {
        goals: vec![
            goal(
                "dev-goal-1",
                "Run a half marathon",
                "Train four times a week",
                "#10b981",
            ),
            goal("dev-goal-2", "Learn Rust", "Ship a small CLI tool", "#f97316"),
        ],
        todos: vec![
            todo(
                "dev-todo-1",
                "Buy running shoes",
                Some("dev-goal-1"),
                Priority::Medium,
                true,
                0,
            ),
            todo(
                "dev-todo-2",
                "Read the async chapter",
                Some("dev-goal-2"),
                Priority::High,
                false,
                1,
            ),
            todo(
                "dev-todo-3",
                "Book dentist appointment",
                None,
                Priority::Low,
                false,
                2,
            ),
        ],
        next_id: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_user() -> UserId {
        UserId::new(DEV_USER_ID)
    }

    #[test]
    fn seeded_todos_are_sorted_by_order_index() {
        let backend = DevBackend::new();
        let order: Vec<i64> = backend
            .list_todos(&dev_user())
            .iter()
            .map(|t| t.order_index)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn create_and_delete_goal() {
        let backend = DevBackend::new();
        let goal = backend.create_goal(&NewGoal {
            user_id: dev_user(),
            title: "Read more".to_string(),
            description: String::new(),
            color: "#ec4899".to_string(),
        });

        assert_eq!(backend.list_goals(&dev_user()).len(), 3);
        backend.delete_goal(&goal.id);
        assert_eq!(backend.list_goals(&dev_user()).len(), 2);
    }

    #[test]
    fn update_unknown_todo_is_not_found() {
        let backend = DevBackend::new();
        let err = backend
            .update_todo(&TodoId::new("missing"), &TodoPatch::completed(true))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn generate_text_picks_goal_sharing_a_word() {
        let backend = DevBackend::new();
        let goals = backend.list_goals(&dev_user());
        let prompt = goal_focus::matcher::build_prompt(&goals, "Plan weekly running schedule");

        assert_eq!(backend.generate_text(&prompt), "none");

        let prompt = goal_focus::matcher::build_prompt(&goals, "Finish the Rust book");
        assert_eq!(backend.generate_text(&prompt), "Learn Rust");
    }

    #[test]
    fn clones_share_state() {
        let backend = DevBackend::new();
        let clone = backend.clone();
        clone.delete_todo(&TodoId::new("dev-todo-1"));
        assert_eq!(backend.list_todos(&dev_user()).len(), 2);
    }
}
