use super::*;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("Tab", "pane"),
    ("j/k", "move"),
    ("Enter", "select goal"),
    ("v", "view"),
    ("g", "goal"),
    ("a", "task"),
    ("Space", "toggle"),
    ("r", "reassign"),
    ("d", "delete"),
    ("R", "reload"),
    ("L", "sign out"),
    ("q", "quit"),
];

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, ws: &Workspace) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status: Vec<Span> = app
        .status
        .iter()
        .enumerate()
        .flat_map(|(i, notice)| {
            let separator =
                (i > 0).then(|| Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            separator.into_iter().chain(std::iter::once(Span::styled(
                notice.message.clone(),
                Style::default().fg(notice_color(notice.level)),
            )))
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(status)), rows[0]);

    let hints: Vec<Span> = if ws.session().is_none() {
        key_hint("q", "quit")
    } else {
        BROWSE_HINTS
            .iter()
            .flat_map(|&(key, label)| key_hint(key, label))
            .collect()
    };
    frame.render_widget(Paragraph::new(Line::from(hints)), rows[1]);
}

fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {}  ", label), Style::default().fg(Color::DarkGray)),
    ]
}
