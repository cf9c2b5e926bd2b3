use goal_focus::models::Priority;
use goal_focus::view::ViewMode;
use strum::IntoEnumIterator;

use super::utils::goal_color;
use super::*;

fn empty_message(ws: &Workspace) -> &'static str {
    if ws.is_loading() {
        "Loading tasks..."
    } else if ws.view_mode() == ViewMode::Goals && ws.selected_goal().is_some() {
        "No tasks for this goal. Press a to add one."
    } else {
        "No tasks yet. Press a to add one."
    }
}

pub fn render_todos_pane(frame: &mut Frame, area: Rect, app: &App, ws: &Workspace) {
    let focused = app.focused_pane == Pane::Todos;
    let todos = displayed_todos(ws);
    let block = pane_block(format!(" Tasks ({}) ", todos.len()), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(view_tabs(ws.view_mode())), rows[0]);

    if todos.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                empty_message(ws),
                Style::default().fg(Color::DarkGray),
            )),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = todos
        .iter()
        .map(|todo| {
            let (check, title_style) = if todo.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };

            let goal_label = match todo.goal_id.as_ref().and_then(|id| ws.goal(id)) {
                Some(goal) => Span::styled(
                    format!("  {}", goal.title),
                    Style::default().fg(goal_color(&goal.color)),
                ),
                None => Span::styled("  No goal", Style::default().fg(Color::DarkGray)),
            };

            ListItem::new(Line::from(vec![
                Span::styled(check, Style::default().fg(Color::Green)),
                Span::styled(todo.title.as_str(), title_style),
                Span::styled(
                    format!("  {}", todo.priority),
                    Style::default().fg(priority_color(todo.priority)),
                ),
                goal_label,
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.todo_cursor));
    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn view_tabs(current: ViewMode) -> Line<'static> {
    let spans: Vec<Span> = ViewMode::iter()
        .flat_map(|mode| {
            let style = if mode == current {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(mode_label(mode), style), Span::raw("   ")]
        })
        .collect();
    Line::from(spans)
}

fn mode_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::All => "All",
        ViewMode::Goals => "By goal",
        ViewMode::Today => "Today",
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}
