//! In-memory test doubles for the outbound ports.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Barrier;

use crate::models::{Goal, GoalId, NewGoal, NewTodo, Todo, TodoId, TodoPatch, UserId};
use crate::ports::outbound::{GoalStore, TextGenerator, TodoStore};
use crate::{GenerationError, StoreError};

/// Mock store backed by two vectors.
///
/// Each failure switch makes the matching family of calls return
/// [`StoreError::Request`].
#[derive(Clone, Default)]
pub struct MockStore {
    goals: Arc<RwLock<Vec<Goal>>>,
    todos: Arc<RwLock<Vec<Todo>>>,
    next_id: Arc<AtomicUsize>,
    fail_lists: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    created_todos: Arc<Mutex<Vec<NewTodo>>>,
    patches: Arc<Mutex<Vec<(TodoId, TodoPatch)>>>,
    list_barrier: Option<Arc<Barrier>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(self, goals: Vec<Goal>) -> Self {
        *self.goals.write().unwrap() = goals;
        self
    }

    pub fn with_todos(self, todos: Vec<Todo>) -> Self {
        *self.todos.write().unwrap() = todos;
        self
    }

    /// Both list calls wait on `barrier` before answering.
    pub fn with_list_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.list_barrier = Some(barrier);
        self
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn stored_goals(&self) -> Vec<Goal> {
        self.goals.read().unwrap().clone()
    }

    pub fn stored_todos(&self) -> Vec<Todo> {
        self.todos.read().unwrap().clone()
    }

    /// Field sets received by `create_todo`, in call order.
    pub fn created_todos(&self) -> Vec<NewTodo> {
        self.created_todos.lock().unwrap().clone()
    }

    /// Patches received by `update_todo`, in call order.
    pub fn patches(&self) -> Vec<(TodoId, TodoPatch)> {
        self.patches.lock().unwrap().clone()
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn check_lists(&self) -> Result<(), StoreError> {
        if let Some(barrier) = &self.list_barrier {
            barrier.wait().await;
        }
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(StoreError::Request("list failed".into()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Request("write failed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalStore for MockStore {
    async fn list_goals(&self, user_id: &UserId) -> Result<Vec<Goal>, StoreError> {
        self.check_lists().await?;
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .filter(|g| &g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, StoreError> {
        self.check_writes()?;
        let now = OffsetDateTime::now_utc();
        let created = Goal {
            id: GoalId::new(self.next_id("goal")),
            user_id: goal.user_id.clone(),
            title: goal.title.clone(),
            description: goal.description.clone(),
            color: goal.color.clone(),
            created_at: now,
            updated_at: now,
        };
        self.goals.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_goal(&self, goal_id: &GoalId) -> Result<(), StoreError> {
        self.check_writes()?;
        self.goals.write().unwrap().retain(|g| &g.id != goal_id);
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MockStore {
    async fn list_todos(&self, user_id: &UserId) -> Result<Vec<Todo>, StoreError> {
        self.check_lists().await?;
        let mut todos: Vec<Todo> = self
            .todos
            .read()
            .unwrap()
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.order_index);
        Ok(todos)
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, StoreError> {
        self.created_todos.lock().unwrap().push(todo.clone());
        self.check_writes()?;
        let now = OffsetDateTime::now_utc();
        let created = Todo {
            id: TodoId::new(self.next_id("todo")),
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
        self.todos.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_todo(&self, todo_id: &TodoId, patch: &TodoPatch) -> Result<(), StoreError> {
        self.patches
            .lock()
            .unwrap()
            .push((todo_id.clone(), patch.clone()));
        self.check_writes()?;
        let mut todos = self.todos.write().unwrap();
        let todo = todos
            .iter_mut()
            .find(|t| &t.id == todo_id)
            .ok_or_else(|| StoreError::NotFound(todo_id.to_string()))?;
        patch.apply_to(todo);
        Ok(())
    }

    async fn delete_todo(&self, todo_id: &TodoId) -> Result<(), StoreError> {
        self.check_writes()?;
        self.todos.write().unwrap().retain(|t| &t.id != todo_id);
        Ok(())
    }
}

/// Mock text generator returning a fixed answer or failing.
#[derive(Clone)]
pub struct MockGenerator {
    answer: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockGenerator {
    pub fn returning(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            prompts: Arc::default(),
            call_count: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            prompts: Arc::default(),
            call_count: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
            .clone()
            .ok_or_else(|| GenerationError::Request("connection refused".into()))
    }
}
