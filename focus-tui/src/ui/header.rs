use super::utils::progress_bar;
use super::*;

const LOADING_LABEL: &str = " Syncing...";

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App, ws: &Workspace) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(inner);

    let mut spans = vec![Span::styled(
        "Goal Focus",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];
    if app.dev_mode {
        spans.push(Span::styled(" [dev]", Style::default().fg(Color::Yellow)));
    }
    if let Some(session) = ws.session() {
        spans.push(Span::raw(format!("  Hi, {}!", session.greeting_name())));

        let progress = ws.progress();
        spans.push(Span::styled(
            format!(
                "  {} {}/{} tasks ({}%)",
                progress_bar(progress.percentage(), 10),
                progress.completed,
                progress.total,
                progress.percentage()
            ),
            Style::default().fg(Color::Cyan),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), cols[0]);

    if ws.is_loading() || app.busy {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label(LOADING_LABEL)
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, cols[1], &mut app.throbber_state);
    }
}
