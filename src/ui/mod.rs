//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_title(frame, regions.title);
    layout::draw_stepper(frame, regions.stepper, app);
    forms::draw_step_fields(frame, regions.fields, app);
    forms::draw_buttons(frame, regions.buttons, app);
    layout::draw_status_bar(frame, regions.status, app);

    let notification = app.form().notification();
    if notification.is_visible() {
        components::render_notification_dialog(
            frame,
            notification.message(),
            notification.severity(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::host::{mount, MountOptions, MountSurface};
    use crate::state::{FieldName, OptionCatalog};
    use crate::submit::{MockSubmitTransport, SubmitResponse};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    struct Screen;

    impl MountSurface for Screen {
        fn contains_target(&self, _target_id: &str) -> bool {
            true
        }
    }

    fn app_with(mock: MockSubmitTransport) -> App {
        let options = MountOptions::new(OptionCatalog::default(), Arc::new(mock));
        App::new(mount(&Screen, "terminal", &options).unwrap())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        tokio_test::block_on(app.handle_key(KeyEvent::new(code, modifiers)));
    }

    fn focus_field(app: &mut App, field: FieldName) {
        while app.focused() != Some(Focus::Field(field)) {
            press(app, KeyCode::Tab, KeyModifiers::NONE);
        }
    }

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_title_stepper_and_contact_fields() {
        let app = app_with(MockSubmitTransport::new());
        let output = render(&app, 100, 40);
        assert!(output.contains("Request a SeriousERP Demo"));
        assert!(output.contains("1. Contact Info"));
        assert!(output.contains("3. Business Info"));
        assert!(output.contains("First Name"));
        assert!(output.contains("(000) 000-0000"));
        assert!(output.contains("Next"));
        assert!(!output.contains("Back"));
    }

    #[test]
    fn test_consent_error_is_shown() {
        let mut app = app_with(MockSubmitTransport::new());
        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        let output = render(&app, 100, 40);
        assert!(output.contains("Please agree to the terms to continue."));
    }

    #[test]
    fn test_software_step_shows_options_and_currency() {
        let mut app = app_with(MockSubmitTransport::new());
        press(&mut app, KeyCode::F(2), KeyModifiers::NONE);
        focus_field(&mut app, FieldName::EquipmentLossValue);
        for _ in 0..25 {
            press(&mut app, KeyCode::Right, KeyModifiers::NONE);
        }

        let output = render(&app, 120, 60);
        assert!(output.contains("MedFlow Pro"));
        assert!(output.contains("$12,500"));
        assert!(output.contains("Back"));
    }

    #[test]
    fn test_tall_focused_field_is_clipped_on_short_terminal() {
        let mut app = app_with(MockSubmitTransport::new());
        press(&mut app, KeyCode::F(2), KeyModifiers::NONE);
        focus_field(&mut app, FieldName::DmeSoftware);

        // 8 field rows against a 12 row option list
        let output = render(&app, 100, 16);
        assert!(output.contains("What DME software are you using?"));
        assert!(output.contains("MedFlow Pro"));
        assert!(!output.contains("FlexMed Solutions"));
        assert!(output.contains("Next"));
    }

    #[test]
    fn test_business_step_errors_and_request_button() {
        let mut app = app_with(MockSubmitTransport::new());
        press(&mut app, KeyCode::F(3), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        let output = render(&app, 100, 40);
        assert!(output.contains("Request Demo"));
        assert!(output.contains("This field is required."));
    }

    #[test]
    fn test_notification_dialog_is_drawn() {
        let mut mock = MockSubmitTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(SubmitResponse {
                success: true,
                message: None,
            })
        });
        let mut app = app_with(mock);
        press(&mut app, KeyCode::F(3), KeyModifiers::NONE);
        for _ in 0..3 {
            press(&mut app, KeyCode::Right, KeyModifiers::NONE);
            press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        }
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        let output = render(&app, 100, 40);
        assert!(output.contains("Success"));
        assert!(output.contains("Demo request submitted successfully!"));
    }
}
