use async_trait::async_trait;
use goal_focus::models::{Goal, GoalId, NewGoal, NewTodo, Session, Todo, TodoId, TodoPatch, UserId};
use goal_focus::ports::outbound::{GoalStore, TextGenerator, TodoStore};
use goal_focus::{GenerationError, StoreError};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use crate::dev_backend::DevBackend;
use crate::dto::{
    CreateGoalRequest, CreateTodoRequest, GenerateTextRequest, GenerateTextResponse, MeResponse,
    TodoRecord, UpdateTodoRequest,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// REST client for the Goal Focus backend.
///
/// Implements both stores and the text generation port. A client built with
/// [`FocusApiClient::dev`] never touches the network and serves everything
/// from an in-memory [`DevBackend`].
#[derive(Debug, Clone)]
pub struct FocusApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    dev_backend: Option<DevBackend>,
}

impl FocusApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: parse_base_url(base_url)?,
            token,
            dev_backend: None,
        })
    }

    pub fn dev() -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: parse_base_url("http://localhost")?,
            token: None,
            dev_backend: Some(DevBackend::new()),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.dev_backend.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::Request(format!("Failed to build URL for {}: {}", path, e)))
    }

    #[instrument(skip(self, request))]
    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response, StoreError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Request(format!("Failed to call {}: {}", call_name, e)))?;

        tracing::debug!(status = %response.status(), "{} responded", call_name);
        check_status(response.status(), call_name)?;
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, StoreError> {
        let response = self.send(request, call_name).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Parsing(format!("{} response: {}", call_name, e)))
    }

    async fn send_without_body(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<(), StoreError> {
        let response = self.send(request, call_name).await?;
        let _ = response.bytes().await;
        Ok(())
    }

    /// The user the current token belongs to.
    pub async fn me(&self) -> Result<Session, StoreError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.session());
        }

        let me: MeResponse = self
            .get_json(self.client.get(self.endpoint("me")?), "me")
            .await?;

        Ok(Session {
            user_id: UserId::new(me.id),
            email: me.email,
            display_name: me.display_name.filter(|name| !name.trim().is_empty()),
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ClientError> {
    // Relative joins only append when the base path ends with a slash.
    let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
    Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))
}

fn check_status(status: StatusCode, call_name: &str) -> Result<(), StoreError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound(call_name.to_string())),
        s => Err(StoreError::Request(format!("{} returned {}", call_name, s))),
    }
}

#[async_trait]
impl GoalStore for FocusApiClient {
    async fn list_goals(&self, user_id: &UserId) -> Result<Vec<Goal>, StoreError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.list_goals(user_id));
        }

        let request = self
            .client
            .get(self.endpoint("goals")?)
            .query(&[("user_id", user_id.as_str())]);
        self.get_json(request, "list goals").await
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, StoreError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.create_goal(goal));
        }

        let request = self
            .client
            .post(self.endpoint("goals")?)
            .json(&CreateGoalRequest::from(goal));
        self.get_json(request, "create goal").await
    }

    async fn delete_goal(&self, goal_id: &GoalId) -> Result<(), StoreError> {
        if let Some(dev) = &self.dev_backend {
            dev.delete_goal(goal_id);
            return Ok(());
        }

        let request = self
            .client
            .delete(self.endpoint(&format!("goals/{}", goal_id))?);
        self.send_without_body(request, "delete goal").await
    }
}

#[async_trait]
impl TodoStore for FocusApiClient {
    async fn list_todos(&self, user_id: &UserId) -> Result<Vec<Todo>, StoreError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.list_todos(user_id));
        }

        let request = self.client.get(self.endpoint("todos")?).query(&[
            ("user_id", user_id.as_str()),
            ("order_by", "order_index.asc"),
        ]);
        let records: Vec<TodoRecord> = self.get_json(request, "list todos").await?;
        Ok(records.into_iter().map(Todo::from).collect())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, StoreError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.create_todo(todo));
        }

        let request = self
            .client
            .post(self.endpoint("todos")?)
            .json(&CreateTodoRequest::from(todo));
        let record: TodoRecord = self.get_json(request, "create todo").await?;
        Ok(record.into())
    }

    async fn update_todo(&self, todo_id: &TodoId, patch: &TodoPatch) -> Result<(), StoreError> {
        if let Some(dev) = &self.dev_backend {
            return dev.update_todo(todo_id, patch);
        }

        let request = self
            .client
            .patch(self.endpoint(&format!("todos/{}", todo_id))?)
            .json(&UpdateTodoRequest::from(patch));
        self.send_without_body(request, "update todo").await
    }

    async fn delete_todo(&self, todo_id: &TodoId) -> Result<(), StoreError> {
        if let Some(dev) = &self.dev_backend {
            dev.delete_todo(todo_id);
            return Ok(());
        }

        let request = self
            .client
            .delete(self.endpoint(&format!("todos/{}", todo_id))?);
        self.send_without_body(request, "delete todo").await
    }
}

#[async_trait]
impl TextGenerator for FocusApiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.generate_text(prompt));
        }

        let url = self
            .endpoint("ai/generate-text")
            .map_err(|e| GenerationError::Request(e.to_string()))?;
        let request = self.client.post(url).json(&GenerateTextRequest { prompt });

        let response: GenerateTextResponse = self
            .get_json(request, "generate text")
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if response.text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(response.text)
    }
}
