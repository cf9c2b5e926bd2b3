mod goal_store;
mod text_generation;
mod todo_store;

pub use goal_store::*;
pub use text_generation::*;
pub use todo_store::*;

/// Everything the workspace needs from the remote data service.
pub trait FocusStore: GoalStore + TodoStore {}

impl<T: GoalStore + TodoStore> FocusStore for T {}
