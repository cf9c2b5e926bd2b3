use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use goal_focus::AuthState;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::app::{App, Workspace};
use crate::ui;

use super::action_queue::channel;
use super::actions::{apply_auth_change, run_action};
use super::views::handle_key;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ws: &mut Workspace,
    auth: &AuthState,
) -> Result<()> {
    let mut auth_changes = auth.subscribe();
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app, ws))?;

        if ws.is_loading() {
            app.throbber_state.calc_next();
        }

        if let Some(session) = auth_changes.try_changed() {
            apply_auth_change(session, app, ws).await;
            continue;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, ws, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            app.busy = true;
            terminal.draw(|f| ui::render(f, app, ws))?;
            let result = run_action(action, app, ws, auth).await;
            app.busy = false;
            result?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
