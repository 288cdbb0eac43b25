//! Field rendering for every field kind

use crate::form::LeadForm;
use crate::state::{FieldKind, FieldName, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";
const PHONE_PLACEHOLDER: &str = "(000) 000-0000";
const SLIDER_TRACK: usize = 20;

/// Rows a field occupies, borders included
pub fn field_height(form: &LeadForm, field: FieldName) -> u16 {
    match field.kind() {
        FieldKind::Text if field.is_multiline() => 5,
        FieldKind::Flag => 4,
        FieldKind::Selection => form.store().catalog().options(field).len() as u16 + 2,
        _ => 3,
    }
}

/// Format a dollar amount with thousands separators, e.g. `$12,500`
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

/// Draw one field of the form
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &LeadForm,
    field: FieldName,
    is_active: bool,
    option_cursor: usize,
) {
    let is_flagged = form.is_flagged(field);
    let border_style = if is_flagged {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match field.kind() {
        FieldKind::Flag => " Consent ".to_string(),
        _ => format!(" {} ", field.label()),
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if is_flagged {
        block = block.title_bottom(Span::styled(
            format!(" {} ", field.error_message()),
            Style::default().fg(Color::Red),
        ));
    }

    let lines = match form.record().get(field) {
        FieldValue::Text(text) => text_lines(field, &text, is_active),
        FieldValue::Flag(checked) => vec![Line::from(vec![
            Span::styled(checkbox(checked), value_style(is_active)),
            Span::raw(field.label()),
        ])],
        FieldValue::Selection(selected) => form
            .store()
            .catalog()
            .options(field)
            .into_iter()
            .enumerate()
            .map(|(i, option)| {
                let highlighted = is_active && i == option_cursor;
                let marker = if highlighted { "› " } else { "  " };
                let style = if highlighted {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(checkbox(selected.contains(option)), style),
                    Span::styled(option.to_string(), style),
                ])
            })
            .collect(),
        FieldValue::Number(value) => vec![slider_line(form, field, value, is_active)],
        FieldValue::Choice(current) => vec![choice_line(
            form.store().catalog().options(field),
            current.as_deref(),
            is_active,
        )],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x] "
    } else {
        "[ ] "
    }
}

fn text_lines(field: FieldName, text: &str, is_active: bool) -> Vec<Line<'static>> {
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    if text.is_empty() && !is_active {
        let placeholder = if field == FieldName::PhoneNumber {
            PHONE_PLACEHOLDER
        } else {
            "(empty)"
        };
        return vec![Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    // split('\n') keeps a trailing empty line so the cursor lands after a newline
    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style(is_active))))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

fn slider_line(form: &LeadForm, field: FieldName, value: i64, is_active: bool) -> Line<'static> {
    let display = |v: u32| {
        if field == FieldName::EquipmentLossValue {
            format_currency(v)
        } else {
            v.to_string()
        }
    };

    let Some(spec) = form.store().catalog().slider(field) else {
        return Line::from(value.to_string());
    };
    let value = spec.clamp(value);
    let range = u64::from(spec.max.saturating_sub(spec.min)).max(1);
    let filled = (u64::from(value.saturating_sub(spec.min)) * SLIDER_TRACK as u64 / range) as usize;
    let filled = filled.min(SLIDER_TRACK);

    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "░".repeat(SLIDER_TRACK - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" ▶ ", arrow_style),
        Span::styled(
            display(value),
            value_style(is_active).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} - {})", display(spec.min), display(spec.max)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn choice_line(options: Vec<&str>, current: Option<&str>, is_active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for option in options {
        let selected = current == Some(option);
        let (marker, style) = if selected {
            ("(•) ", value_style(is_active).add_modifier(Modifier::BOLD))
        } else {
            ("( ) ", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{marker}{option}"), style));
        spans.push(Span::raw("   "));
    }
    spans.pop();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(500), "$500");
        assert_eq!(format_currency(12_500), "$12,500");
        assert_eq!(format_currency(50_000), "$50,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_text_lines_placeholders() {
        let lines = text_lines(FieldName::PhoneNumber, "", false);
        assert_eq!(lines[0].spans[0].content, PHONE_PLACEHOLDER);

        let lines = text_lines(FieldName::FirstName, "", false);
        assert_eq!(lines[0].spans[0].content, "(empty)");
    }

    #[test]
    fn test_text_lines_cursor_after_newline() {
        let lines = text_lines(FieldName::PainPoints, "a\n", true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans.last().map(|s| s.content.as_ref()), Some(CURSOR));
    }
}
