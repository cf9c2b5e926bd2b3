use goal_focus::models::{GoalId, NewGoal, NewTodo, Priority, Todo, TodoId, TodoPatch, UserId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Todo as sent by the backend.
///
/// The hosted store keeps booleans and small integers loosely typed, so
/// `completed` and `priority` accept numbers, strings or native values.
#[derive(Debug, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goal_id: Option<GoalId>,
    #[serde(deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(deserialize_with = "lenient_bool")]
    pub completed: bool,
    pub order_index: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Todo {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            description: record.description.unwrap_or_default(),
            goal_id: record.goal_id.filter(|id| !id.as_str().is_empty()),
            priority: record.priority,
            completed: record.completed,
            order_index: record.order_index,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match LooseValue::deserialize(deserializer)? {
        LooseValue::Bool(b) => Ok(b),
        LooseValue::Int(i) => Ok(i != 0),
        LooseValue::Str(s) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean: {}", other))),
        },
    }
}

fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Priority, D::Error> {
    let value = match LooseValue::deserialize(deserializer)? {
        LooseValue::Int(i) => i,
        LooseValue::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid priority: {}", s)))?,
        LooseValue::Bool(_) => return Err(D::Error::custom("invalid priority: boolean")),
    };
    Priority::try_from(value).map_err(D::Error::custom)
}

#[derive(Serialize)]
pub struct CreateGoalRequest<'a> {
    pub user_id: &'a UserId,
    pub title: &'a str,
    pub description: &'a str,
    pub color: &'a str,
}

impl<'a> From<&'a NewGoal> for CreateGoalRequest<'a> {
    fn from(goal: &'a NewGoal) -> Self {
        Self {
            user_id: &goal.user_id,
            title: &goal.title,
            description: &goal.description,
            color: &goal.color,
        }
    }
}

#[derive(Serialize)]
pub struct CreateTodoRequest<'a> {
    pub user_id: &'a UserId,
    pub title: &'a str,
    pub description: &'a str,
    pub goal_id: Option<&'a GoalId>,
    pub priority: Priority,
    pub completed: bool,
    pub order_index: i64,
}

impl<'a> From<&'a NewTodo> for CreateTodoRequest<'a> {
    fn from(todo: &'a NewTodo) -> Self {
        Self {
            user_id: &todo.user_id,
            title: &todo.title,
            description: &todo.description,
            goal_id: todo.goal_id.as_ref(),
            priority: todo.priority,
            completed: todo.completed,
            order_index: todo.order_index,
        }
    }
}

/// Partial update body. Absent fields are not sent; a cleared goal is sent
/// as `null`.
#[derive(Serialize)]
pub struct UpdateTodoRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Option<&'a GoalId>>,
}

impl<'a> From<&'a TodoPatch> for UpdateTodoRequest<'a> {
    fn from(patch: &'a TodoPatch) -> Self {
        Self {
            completed: patch.completed,
            goal_id: patch.goal_id.as_ref().map(|g| g.as_ref()),
        }
    }
}

#[derive(Serialize)]
pub struct GenerateTextRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Deserialize)]
pub struct GenerateTextResponse {
    pub text: String,
}

/// The current user, as returned by GET /me.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    #[serde(default, alias = "display_name")]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(completed: &str, priority: &str) -> String {
        format!(
            r#"{{
                "id": "todo_1",
                "user_id": "user_1",
                "title": "Run",
                "description": null,
                "goal_id": "",
                "priority": {},
                "completed": {},
                "order_index": 4,
                "created_at": "2024-03-01T10:00:00Z",
                "updated_at": "2024-03-02T08:30:00Z"
            }}"#,
            priority, completed
        )
    }

    #[test]
    fn todo_record_accepts_loose_booleans() {
        let cases = [
            ("true", true),
            ("0", false),
            ("1", true),
            ("\"1\"", true),
            ("\"0\"", false),
        ];
        for (raw, expected) in cases {
            let record: TodoRecord = serde_json::from_str(&record_json(raw, "2")).unwrap();
            assert_eq!(record.completed, expected, "completed = {}", raw);
        }
    }

    #[test]
    fn todo_record_accepts_string_priority() {
        let record: TodoRecord = serde_json::from_str(&record_json("false", "\"3\"")).unwrap();
        assert_eq!(record.priority, Priority::High);

        assert!(serde_json::from_str::<TodoRecord>(&record_json("false", "9")).is_err());
    }

    #[test]
    fn todo_record_normalizes_empty_fields() {
        let record: TodoRecord = serde_json::from_str(&record_json("false", "1")).unwrap();
        let todo = Todo::from(record);

        assert_eq!(todo.description, "");
        assert_eq!(todo.goal_id, None);
        assert_eq!(todo.order_index, 4);
    }

    #[test]
    fn update_request_sends_only_patched_fields() {
        let patch = TodoPatch::completed(true);
        let body = serde_json::to_value(UpdateTodoRequest::from(&patch)).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));

        let patch = TodoPatch::goal(None);
        let body = serde_json::to_value(UpdateTodoRequest::from(&patch)).unwrap();
        assert_eq!(body, serde_json::json!({ "goal_id": null }));

        let patch = TodoPatch::goal(Some(GoalId::new("goal_2")));
        let body = serde_json::to_value(UpdateTodoRequest::from(&patch)).unwrap();
        assert_eq!(body, serde_json::json!({ "goal_id": "goal_2" }));
    }

    #[test]
    fn create_todo_request_uses_numeric_priority() {
        let todo = NewTodo {
            user_id: UserId::new("user_1"),
            title: "Run".to_string(),
            description: String::new(),
            goal_id: None,
            priority: Priority::Medium,
            completed: false,
            order_index: 3,
        };

        let body = serde_json::to_value(CreateTodoRequest::from(&todo)).unwrap();

        assert_eq!(body["priority"], 2);
        assert_eq!(body["goal_id"], serde_json::Value::Null);
        assert_eq!(body["order_index"], 3);
    }
}
