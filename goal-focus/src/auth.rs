use std::sync::Arc;

use tokio::sync::watch;

use crate::models::Session;

/// Current authentication state, observable by subscribers.
///
/// The auth collaborator calls [`sign_in`](Self::sign_in) and
/// [`sign_out`](Self::sign_out). The composition root subscribes and forwards
/// every change to [`FocusWorkspace::on_auth_state_changed`](crate::FocusWorkspace::on_auth_state_changed).
/// Dropping an [`AuthSubscription`] unsubscribes it.
#[derive(Debug, Clone)]
pub struct AuthState {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn sign_in(&self, session: Session) {
        self.tx.send_replace(Some(session));
    }

    pub fn sign_out(&self) {
        self.tx.send_replace(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Subscribe to changes. The first [`AuthSubscription::try_changed`] call
    /// yields the current state.
    pub fn subscribe(&self) -> AuthSubscription {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        AuthSubscription { rx }
    }
}

/// Receiving half of an [`AuthState`] subscription.
#[derive(Debug)]
pub struct AuthSubscription {
    rx: watch::Receiver<Option<Session>>,
}

impl AuthSubscription {
    /// The new state if it changed since the last call. Polled by the event
    /// loop once per tick.
    pub fn try_changed(&mut self) -> Option<Option<Session>> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_yields_current_state_first() {
        let auth = AuthState::new();
        auth.sign_in(Session::new("user_1", "a@b.c"));

        let mut sub = auth.subscribe();
        let state = sub.try_changed().unwrap();
        assert_eq!(state.unwrap().user_id.as_str(), "user_1");
    }

    #[test]
    fn try_changed_reports_each_change_once() {
        let auth = AuthState::new();
        let mut sub = auth.subscribe();

        assert_eq!(sub.try_changed(), Some(None));
        assert_eq!(sub.try_changed(), None);

        auth.sign_in(Session::new("user_1", "a@b.c"));
        assert!(sub.try_changed().unwrap().is_some());

        auth.sign_out();
        assert_eq!(sub.try_changed(), Some(None));
        assert_eq!(auth.current(), None);
    }
}
