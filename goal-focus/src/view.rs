//! Pure derivations over the todo list: filtering, display order and
//! progress summaries.

use std::cmp::Ordering;

use strum::{Display, EnumIter, EnumString};

use crate::models::{GoalId, Todo};

/// Which todos the task list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ViewMode {
    #[default]
    #[strum(ascii_case_insensitive, serialize = "all")]
    All,
    /// Only the selected goal's todos, when a goal is selected.
    #[strum(ascii_case_insensitive, serialize = "goals")]
    Goals,
    /// Listed separately but filters like [`ViewMode::All`]; there is no
    /// date-based filtering yet.
    #[strum(ascii_case_insensitive, serialize = "today")]
    Today,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::All => ViewMode::Goals,
            ViewMode::Goals => ViewMode::Today,
            ViewMode::Today => ViewMode::All,
        }
    }
}

/// Todos visible under `mode` with an optional selected goal.
///
/// Only `Goals` with a selection narrows the list; every other combination
/// returns all todos in their original order.
pub fn filter_todos<'a>(
    todos: &'a [Todo],
    mode: ViewMode,
    selected_goal: Option<&GoalId>,
) -> Vec<&'a Todo> {
    match (mode, selected_goal) {
        (ViewMode::Goals, Some(goal_id)) => todos
            .iter()
            .filter(|t| t.goal_id.as_ref() == Some(goal_id))
            .collect(),
        _ => todos.iter().collect(),
    }
}

/// Incomplete before completed; newest (highest `order_index`) first within
/// each group.
pub fn display_order(a: &Todo, b: &Todo) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.order_index.cmp(&a.order_index))
}

pub fn sort_for_display(todos: &mut [&Todo]) {
    todos.sort_by(|a, b| display_order(a, b));
}

/// Completed/total counts for a set of todos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        todos.into_iter().fold(Self::default(), |acc, t| Self {
            completed: acc.completed + usize::from(t.completed),
            total: acc.total + 1,
        })
    }

    /// Rounded completion percentage, 0 for an empty set.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Progress of the todos assigned to `goal_id`.
pub fn goal_progress(todos: &[Todo], goal_id: &GoalId) -> Progress {
    Progress::of(todos.iter().filter(|t| t.goal_id.as_ref() == Some(goal_id)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use time::macros::datetime;

    use crate::models::{GoalId, Priority, Todo, TodoId, UserId};

    pub fn todo(id: &str, goal: Option<&str>, completed: bool, order_index: i64) -> Todo {
        Todo {
            id: TodoId::new(id),
            user_id: UserId::new("user_1"),
            title: format!("Todo {}", id),
            description: String::new(),
            goal_id: goal.map(GoalId::new),
            priority: Priority::Low,
            completed,
            order_index,
            created_at: datetime!(2024-03-01 10:00 UTC),
            updated_at: datetime!(2024-03-01 10:00 UTC),
        }
    }
}
