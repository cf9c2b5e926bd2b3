use goal_focus::models::{Goal, GoalDraft, GoalId, Priority, TodoDraft, GOAL_COLORS};

use super::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Title,
    Description,
    Color,
}

impl GoalField {
    fn next(self) -> Self {
        match self {
            GoalField::Title => GoalField::Description,
            GoalField::Description => GoalField::Color,
            GoalField::Color => GoalField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            GoalField::Title => GoalField::Color,
            GoalField::Description => GoalField::Title,
            GoalField::Color => GoalField::Description,
        }
    }
}

/// "New goal" dialog state.
#[derive(Debug, Clone)]
pub struct GoalForm {
    pub title: TextInput,
    pub description: TextInput,
    pub color_index: usize,
    pub focused: GoalField,
    pub error: Option<String>,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            title: TextInput::new(),
            description: TextInput::new(),
            color_index: 0,
            focused: GoalField::Title,
            error: None,
        }
    }
}

impl GoalForm {
    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn previous_field(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            GoalField::Title => Some(&mut self.title),
            GoalField::Description => Some(&mut self.description),
            GoalField::Color => None,
        }
    }

    pub fn cycle_color(&mut self, forward: bool) {
        let len = GOAL_COLORS.len();
        self.color_index = if forward {
            (self.color_index + 1) % len
        } else {
            (self.color_index + len - 1) % len
        };
    }

    pub fn color(&self) -> &'static str {
        GOAL_COLORS[self.color_index % GOAL_COLORS.len()]
    }

    pub fn to_draft(&self) -> GoalDraft {
        GoalDraft::new(self.title.value.as_str())
            .with_description(self.description.value.as_str())
            .with_color(self.color())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Title,
    Description,
    Goal,
    Priority,
}

impl TodoField {
    fn next(self) -> Self {
        match self {
            TodoField::Title => TodoField::Description,
            TodoField::Description => TodoField::Goal,
            TodoField::Goal => TodoField::Priority,
            TodoField::Priority => TodoField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            TodoField::Title => TodoField::Priority,
            TodoField::Description => TodoField::Title,
            TodoField::Goal => TodoField::Description,
            TodoField::Priority => TodoField::Goal,
        }
    }
}

pub const AI_GOAL_LABEL: &str = "Let AI decide";

/// "New task" dialog state.
///
/// The goal choice is an index into `[AI_GOAL_LABEL, goals...]`; 0 leaves
/// the goal to the matcher.
#[derive(Debug, Clone)]
pub struct TodoForm {
    pub title: TextInput,
    pub description: TextInput,
    pub goal_options: Vec<(GoalId, String)>,
    pub goal_choice: usize,
    pub priority: Priority,
    pub focused: TodoField,
    pub error: Option<String>,
}

impl TodoForm {
    pub fn new(goals: &[Goal]) -> Self {
        Self {
            title: TextInput::new(),
            description: TextInput::new(),
            goal_options: goals
                .iter()
                .map(|g| (g.id.clone(), g.title.clone()))
                .collect(),
            goal_choice: 0,
            priority: Priority::default(),
            focused: TodoField::Title,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn previous_field(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            TodoField::Title => Some(&mut self.title),
            TodoField::Description => Some(&mut self.description),
            TodoField::Goal | TodoField::Priority => None,
        }
    }

    /// Cycle the focused choice field. Text fields are left alone.
    pub fn cycle(&mut self, forward: bool) {
        match self.focused {
            TodoField::Goal => {
                let len = self.goal_options.len() + 1;
                self.goal_choice = if forward {
                    (self.goal_choice + 1) % len
                } else {
                    (self.goal_choice + len - 1) % len
                };
            }
            TodoField::Priority => {
                self.priority = if forward {
                    self.priority.next()
                } else {
                    self.priority.previous()
                };
            }
            TodoField::Title | TodoField::Description => {}
        }
    }

    pub fn goal_label(&self) -> &str {
        self.chosen_goal()
            .map(|(_, title)| title.as_str())
            .unwrap_or(AI_GOAL_LABEL)
    }

    fn chosen_goal(&self) -> Option<&(GoalId, String)> {
        self.goal_choice
            .checked_sub(1)
            .and_then(|i| self.goal_options.get(i))
    }

    pub fn to_draft(&self) -> TodoDraft {
        let draft = TodoDraft::new(self.title.value.as_str())
            .with_description(self.description.value.as_str())
            .with_priority(self.priority);
        match self.chosen_goal() {
            Some((goal_id, _)) => draft.with_goal(goal_id.clone()),
            None => draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn goals() -> Vec<Goal> {
        let now = OffsetDateTime::now_utc();
        ["Fitness", "Career"]
            .iter()
            .enumerate()
            .map(|(i, title)| Goal {
                id: GoalId::new(format!("goal_{}", i + 1)),
                user_id: "user_1".into(),
                title: title.to_string(),
                description: String::new(),
                color: GOAL_COLORS[i].to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect()
    }

    #[test]
    fn goal_form_fields_wrap_both_ways() {
        let mut form = GoalForm::default();
        form.previous_field();
        assert_eq!(form.focused, GoalField::Color);
        form.next_field();
        assert_eq!(form.focused, GoalField::Title);
        assert!(form.focused_input().is_some());
    }

    #[test]
    fn goal_form_color_cycles_through_palette() {
        let mut form = GoalForm::default();
        form.cycle_color(false);
        assert_eq!(form.color(), GOAL_COLORS[GOAL_COLORS.len() - 1]);
        form.cycle_color(true);
        form.cycle_color(true);
        assert_eq!(form.color(), GOAL_COLORS[1]);
        assert_eq!(form.to_draft().color, GOAL_COLORS[1]);
    }

    #[test]
    fn todo_form_defaults_to_ai_goal() {
        let form = TodoForm::new(&goals());
        assert_eq!(form.goal_label(), AI_GOAL_LABEL);
        assert_eq!(form.to_draft().goal_id, None);
        assert_eq!(form.to_draft().priority, Priority::Low);
    }

    #[test]
    fn todo_form_goal_choice_wraps_past_ai_option() {
        let mut form = TodoForm::new(&goals());
        form.focused = TodoField::Goal;

        form.cycle(true);
        assert_eq!(form.goal_label(), "Fitness");
        form.cycle(true);
        form.cycle(true);
        assert_eq!(form.goal_label(), AI_GOAL_LABEL);

        form.cycle(false);
        assert_eq!(form.goal_label(), "Career");
        assert_eq!(form.to_draft().goal_id, Some(GoalId::new("goal_2")));
    }

    #[test]
    fn todo_form_cycles_priority_only_on_priority_field() {
        let mut form = TodoForm::new(&[]);
        form.cycle(true);
        assert_eq!(form.priority, Priority::Low);

        form.focused = TodoField::Priority;
        form.cycle(false);
        assert_eq!(form.priority, Priority::High);
    }

    #[test]
    fn todo_form_without_goals_only_offers_ai() {
        let mut form = TodoForm::new(&[]);
        form.focused = TodoField::Goal;
        form.cycle(true);
        assert_eq!(form.goal_label(), AI_GOAL_LABEL);
    }
}
