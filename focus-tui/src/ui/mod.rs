use crate::app::{displayed_todos, App, Dialog, Pane, Workspace};
use goal_focus::NoticeLevel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

mod dialogs;
mod footer;
mod goals_pane;
mod header;
mod todos_pane;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App, ws: &Workspace) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame.area());

    header::render_header(frame, root[0], app, ws);

    if ws.session().is_none() && !ws.is_loading() {
        render_signed_out(frame, root[1], app);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(root[1]);
        goals_pane::render_goals_pane(frame, body[0], app, ws);
        todos_pane::render_todos_pane(frame, body[1], app, ws);
    }

    footer::render_footer(frame, root[2], app, ws);

    match &app.dialog {
        Some(Dialog::AddGoal(form)) => dialogs::render_goal_form(frame, form),
        Some(Dialog::AddTodo(form)) => dialogs::render_todo_form(frame, form),
        Some(Dialog::Reassign(picker)) => dialogs::render_reassign_picker(frame, picker),
        Some(Dialog::ConfirmDelete(target)) => dialogs::render_delete_confirm(frame, target),
        None => {}
    }
}

fn render_signed_out(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.dev_mode {
        "Restart `goal-focus dev` to load the sample data again."
    } else {
        "Run `goal-focus login` to sign in again."
    };
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "You are signed out.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Error => Color::Red,
    }
}
