//! Fields and buttons of the current step

use super::field_renderer::{draw_field, field_height};
use crate::app::{App, Focus, FormButton};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Index of the first field to draw so the focused one stays on screen
pub fn first_visible_field(heights: &[u16], focused: Option<usize>, available: u16) -> usize {
    let Some(focused) = focused else {
        return 0;
    };
    let focused = focused.min(heights.len().saturating_sub(1));
    let mut start = 0;
    while start < focused && heights[start..=focused].iter().sum::<u16>() > available {
        start += 1;
    }
    start
}

/// Draw the current step's fields, scrolled to the focused one
pub fn draw_step_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let fields = form.current_step().fields();
    let heights: Vec<u16> = fields.iter().map(|f| field_height(form, *f)).collect();

    let focused_index = match app.focused() {
        Some(Focus::Field(field)) => fields.iter().position(|f| *f == field),
        // Keep the bottom of the step in view while a button has focus
        Some(Focus::Button(_)) => Some(fields.len().saturating_sub(1)),
        None => None,
    };
    let start = first_visible_field(&heights, focused_index, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, field) in fields.iter().enumerate().skip(start) {
        let mut height = heights[index];
        if y + height > bottom {
            // The first visible field is clipped rather than dropped
            if index != start || y >= bottom {
                break;
            }
            height = bottom - y;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let is_active = app.focused() == Some(Focus::Field(*field));
        draw_field(frame, field_area, form, *field, is_active, app.option_cursor());
        y += height;
    }
}

/// Draw the step's buttons right-aligned in `area`
pub fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = FormButton::for_step(app.form().current_step());

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(
        buttons
            .iter()
            .map(|b| Constraint::Length(button_width(b.label()))),
    );
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(Rect {
            height: BUTTON_HEIGHT.min(area.height),
            ..area
        });

    for (i, button) in buttons.iter().enumerate() {
        let is_selected = app.focused() == Some(Focus::Button(*button));
        let is_primary = *button != FormButton::Back;
        render_button(frame, chunks[i + 1], button.label(), is_selected, is_primary);
    }
}
