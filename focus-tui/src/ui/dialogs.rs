use super::utils::{centered_rect, goal_color};
use super::*;
use crate::app::{
    DeleteTarget, GoalField, GoalForm, ReassignPicker, TextInput, TodoField, TodoForm,
};

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn text_field<'a>(label: &'a str, input: &'a TextInput, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(format!("{:<13}", label), label_style(focused))];
    if focused {
        let (before, after) = input.split_at_cursor();
        spans.push(Span::styled(before, Style::default().fg(Color::White)));
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(after, Style::default().fg(Color::White)));
    } else {
        spans.push(Span::styled(
            input.value.as_str(),
            Style::default().fg(Color::White),
        ));
    }
    Line::from(spans)
}

fn choice_field<'a>(label: &'a str, value: Span<'a>, focused: bool) -> Line<'a> {
    let arrows = Style::default().fg(if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    });
    Line::from(vec![
        Span::styled(format!("{:<13}", label), label_style(focused)),
        Span::styled("◀ ", arrows),
        value,
        Span::styled(" ▶", arrows),
    ])
}

fn form_footer<'a>(error: Option<&'a str>) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from("")];
    if let Some(err) = error {
        lines.push(Line::from(Span::styled(err, Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Next field  "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(": Change  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Save  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]));
    lines
}

fn render_dialog(frame: &mut Frame, title: &str, lines: Vec<Line>, width: u16) {
    let height = lines.len() as u16 + 2;
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(Color::Magenta),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_goal_form(frame: &mut Frame, form: &GoalForm) {
    let color = form.color();
    let mut lines = vec![
        Line::from(""),
        text_field("Title", &form.title, form.focused == GoalField::Title),
        text_field(
            "Description",
            &form.description,
            form.focused == GoalField::Description,
        ),
        choice_field(
            "Color",
            Span::styled(format!("■ {}", color), Style::default().fg(goal_color(color))),
            form.focused == GoalField::Color,
        ),
    ];
    lines.extend(form_footer(form.error.as_deref()));
    render_dialog(frame, "New Goal", lines, 64);
}

pub fn render_todo_form(frame: &mut Frame, form: &TodoForm) {
    let mut lines = vec![
        Line::from(""),
        text_field("Title", &form.title, form.focused == TodoField::Title),
        text_field(
            "Description",
            &form.description,
            form.focused == TodoField::Description,
        ),
        choice_field(
            "Goal",
            Span::styled(form.goal_label(), Style::default().fg(Color::Cyan)),
            form.focused == TodoField::Goal,
        ),
        choice_field(
            "Priority",
            Span::styled(form.priority.to_string(), Style::default().fg(Color::White)),
            form.focused == TodoField::Priority,
        ),
    ];
    lines.extend(form_footer(form.error.as_deref()));
    render_dialog(frame, "New Task", lines, 64);
}

pub fn render_reassign_picker(frame: &mut Frame, picker: &ReassignPicker) {
    let mut lines = vec![
        Line::from(Span::styled(
            picker.todo_title.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    lines.extend(picker.options.iter().enumerate().map(|(i, (_, title))| {
        if i == picker.selected {
            Line::from(Span::styled(
                format!("▶ {}", title),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}", title),
                Style::default().fg(Color::Gray),
            ))
        }
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Move  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Assign  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]));
    render_dialog(frame, "Move Task to Goal", lines, 56);
}

pub fn render_delete_confirm(frame: &mut Frame, target: &DeleteTarget) {
    let (title, detail) = match target {
        DeleteTarget::Goal { .. } => ("Delete Goal?", "Tasks keep their goal reference."),
        DeleteTarget::Todo { .. } => ("Delete Task?", "This cannot be undone."),
    };

    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(target.title(), Style::default().fg(Color::White))),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
