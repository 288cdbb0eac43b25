//! Submission result dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::Severity;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

/// Render the notification overlay centered on the screen
pub fn render_notification_dialog(frame: &mut Frame, message: &str, severity: Severity) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let color = severity_color(severity);
    render_dialog(
        frame,
        DialogConfig {
            title: severity.title(),
            title_color: color,
            border_color: color,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
