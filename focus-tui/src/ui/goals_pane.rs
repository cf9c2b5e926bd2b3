use super::utils::goal_color;
use super::*;

pub fn render_goals_pane(frame: &mut Frame, area: Rect, app: &App, ws: &Workspace) {
    let focused = app.focused_pane == Pane::Goals;
    let block = pane_block(format!(" Goals ({}) ", ws.goals().len()), focused);

    let selected = ws.selected_goal();
    let all_progress = ws.progress();

    let mut items = vec![goal_row(
        Span::styled("● ", Style::default().fg(Color::White)),
        "All Tasks",
        format!("{} tasks", all_progress.total),
        selected.is_none(),
    )];
    items.extend(ws.goals().iter().map(|goal| {
        let progress = ws.goal_progress(&goal.id);
        goal_row(
            Span::styled("● ", Style::default().fg(goal_color(&goal.color))),
            &goal.title,
            format!(
                "{}/{} ({}%)",
                progress.completed,
                progress.total,
                progress.percentage()
            ),
            selected == Some(&goal.id),
        )
    }));

    let highlight = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.goal_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn goal_row<'a>(dot: Span<'a>, title: &'a str, detail: String, selected: bool) -> ListItem<'a> {
    let title_style = if selected {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    ListItem::new(Line::from(vec![
        dot,
        Span::styled(title, title_style),
        Span::styled(format!("  {}", detail), Style::default().fg(Color::DarkGray)),
    ]))
}
