use serde::{Deserialize, Serialize};

use super::UserId;

/// The authenticated user, as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            display_name: None,
        }
    }

    /// Name used in greetings: display name, else the email local part,
    /// else "there".
    pub fn greeting_name(&self) -> &str {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim();
        }
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => "there",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_prefers_display_name() {
        let mut session = Session::new("u1", "ada@example.com");
        assert_eq!(session.greeting_name(), "ada");

        session.display_name = Some("Ada Lovelace".to_string());
        assert_eq!(session.greeting_name(), "Ada Lovelace");
    }

    #[test]
    fn greeting_falls_back_to_there() {
        let session = Session::new("u1", "");
        assert_eq!(session.greeting_name(), "there");
    }
}
