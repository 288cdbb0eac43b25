//! Layout components (header, stepper, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::{App, Focus};
use crate::form::FORM_TITLE;
use crate::state::{FieldKind, Step, StepStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct FormLayout {
    pub title: Rect,
    pub stepper: Rect,
    pub fields: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

/// Split the screen into the form regions
pub fn create_layout(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(3),             // Stepper
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    FormLayout {
        title: chunks[0],
        stepper: chunks[1],
        fields: chunks[2],
        buttons: chunks[3],
        status: chunks[4],
    }
}

pub fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        FORM_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw the step indicator
pub fn draw_stepper(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for step in Step::ALL {
        if step.index() > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = match app.form().step_status(step) {
            StepStatus::Completed => ("✓", Style::default().fg(Color::Green)),
            StepStatus::Active => (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Upcoming => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(
            format!("{marker} {}. {}", step.index() + 1, step.label()),
            style,
        ));
    }

    let stepper = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(stepper, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_focus_hints(app.focused())),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for what has focus
fn get_focus_hints(focus: Option<Focus>) -> String {
    let focus_hint = match focus {
        Some(Focus::Field(field)) => match field.kind() {
            FieldKind::Text if field.is_multiline() => "Enter:newline",
            FieldKind::Text => "type to edit",
            FieldKind::Flag => "Space:toggle",
            FieldKind::Selection => "↑/↓:move  Space:toggle",
            FieldKind::Slider => "←/→:adjust",
            FieldKind::YesNo | FieldKind::Bucket => "←/→:choose",
        },
        Some(Focus::Button(_)) => "Enter:press",
        None => "",
    };
    format!("Tab:next  {focus_hint}  ^N:next step  ^B:back  F1-F3:step  ^S:request demo")
}
