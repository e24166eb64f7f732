//! Rendering of the single user screen.
//!
//! Rendering is a pure function of the [`App`] state. It returns the clickable
//! areas so the event loop can map mouse releases back to actions.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use userdeck_pager::Pager;

use super::app::{App, Hitboxes};
use super::theme::Theme;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const PREVIOUS_LABEL: &str = " ◀ Prev ";
const NEXT_LABEL: &str = " Next ▶ ";

pub fn render(frame: &mut Frame<'_>, app: &App) -> Hitboxes {
    let theme = Theme::for_mode(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.screen()), area);

    let [header_area, card_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let theme_button = render_header(frame, header_area, app, &theme);
    let (previous, next) = render_card(frame, card_area, app, &theme);

    frame.render_widget(
        Paragraph::new("Swipe left/right or use ←/→ to navigate")
            .style(theme.hint())
            .alignment(Alignment::Center),
        hint_area,
    );

    Hitboxes {
        theme: theme_button,
        previous,
        next,
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) -> Rect {
    let label = if app.theme.is_dark() {
        " ☀ Light "
    } else {
        " ☾ Dark "
    };
    let button_width = (label.chars().count() as u16).min(area.width);
    let [title_area, button_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" User Information", theme.title())))
            .style(theme.screen()),
        title_area,
    );
    frame.render_widget(Paragraph::new(label).style(theme.button(true)), button_area);
    button_area
}

fn render_card(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) -> (Rect, Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.card().fg(theme.border))
        .style(theme.card());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, nav_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let pager = &app.pager;
    let body = if pager.is_loading() {
        skeleton_lines(app.ticks, theme)
    } else if pager.is_errored() {
        message_lines(
            "Failed to load users. Nothing further is possible; press q to quit.",
            theme,
        )
    } else if pager.current_user().is_some() {
        user_lines(pager, theme, body_area.width)
    } else {
        message_lines("No users available", theme)
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), body_area);

    render_navigation(frame, nav_area, pager, theme)
}

fn user_lines(pager: &Pager, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let Some(user) = pager.current_user() else {
        return Vec::new();
    };

    let mut lines = vec![
        Line::from(Span::styled(user.full_name(), theme.title())).alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("User {} of {}", pager.index() + 1, pager.len()),
            theme.label(),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    let fields = user.fields();
    let label_width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = (width as usize).saturating_sub(label_width + 3);
    for (label, value) in fields {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<width$}  ", label, width = label_width), theme.label()),
            Span::styled(truncate(&value, value_width), theme.card()),
        ]));
    }
    lines
}

fn skeleton_lines(ticks: u64, theme: &Theme) -> Vec<Line<'static>> {
    let spinner = SPINNER[(ticks % SPINNER.len() as u64) as usize];
    let bar = |len: usize| Span::styled("▒".repeat(len), theme.card().fg(theme.skeleton));

    let mut lines = vec![
        Line::from(bar(16)).alignment(Alignment::Center),
        Line::from(Span::styled(format!("{} Loading users", spinner), theme.label()))
            .alignment(Alignment::Center),
        Line::default(),
    ];
    for _ in 0..8 {
        lines.push(Line::from(vec![Span::raw(" "), bar(10), Span::raw("  "), bar(24)]));
    }
    lines
}

fn message_lines(message: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(message.to_string(), theme.card())).alignment(Alignment::Center),
    ]
}

fn render_navigation(frame: &mut Frame<'_>, area: Rect, pager: &Pager, theme: &Theme) -> (Rect, Rect) {
    let previous_width = (PREVIOUS_LABEL.chars().count() as u16).min(area.width / 2);
    let next_width = (NEXT_LABEL.chars().count() as u16).min(area.width / 2);
    let [previous_area, _, next_area] = Layout::horizontal([
        Constraint::Length(previous_width),
        Constraint::Min(0),
        Constraint::Length(next_width),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(PREVIOUS_LABEL).style(theme.button(pager.has_previous())),
        previous_area,
    );
    frame.render_widget(
        Paragraph::new(NEXT_LABEL).style(theme.button(pager.has_next())),
        next_area,
    );
    (previous_area, next_area)
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(max - 1).collect();
    out.push('…');
    out
}
