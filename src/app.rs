//! Application state and key handling for the terminal host

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::LeadForm;
use crate::host::FormHandle;
use crate::state::{mask_phone, Advance, FieldKind, FieldName, FieldValue, Step};

/// Buttons under the fields of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Back,
    Next,
    RequestDemo,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
            Self::RequestDemo => "Request Demo",
        }
    }

    /// Buttons shown on `step`, left to right
    pub fn for_step(step: Step) -> Vec<FormButton> {
        let mut buttons = Vec::with_capacity(2);
        if step.index() > 0 {
            buttons.push(Self::Back);
        }
        if step.is_last() {
            buttons.push(Self::RequestDemo);
        } else {
            buttons.push(Self::Next);
        }
        buttons
    }
}

/// What keyboard input goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Button(FormButton),
}

/// Main application struct
pub struct App {
    handle: FormHandle,
    /// Index into [`App::focus_targets`]
    focus: usize,
    /// Highlighted entry in the software list
    option_cursor: usize,
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    pub fn new(handle: FormHandle) -> Self {
        Self {
            handle,
            focus: 0,
            option_cursor: 0,
            quit: false,
            status_message: None,
        }
    }

    pub fn form(&self) -> &LeadForm {
        self.handle.form()
    }

    fn form_mut(&mut self) -> &mut LeadForm {
        self.handle.form_mut()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Unmount the form
    pub fn into_handle(self) -> FormHandle {
        self.handle
    }

    /// Fields then buttons of the current step, in Tab order
    pub fn focus_targets(&self) -> Vec<Focus> {
        let step = self.form().current_step();
        step.fields()
            .iter()
            .map(|field| Focus::Field(*field))
            .chain(FormButton::for_step(step).into_iter().map(Focus::Button))
            .collect()
    }

    pub fn focused(&self) -> Option<Focus> {
        self.focus_targets().get(self.focus).copied()
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    fn next_focus(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    fn prev_focus(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    fn reset_focus(&mut self) {
        self.focus = 0;
        self.option_cursor = 0;
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Notification is modal
        if self.form().notification().is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.form_mut().dismiss_notification();
            }
            return;
        }

        self.status_message = None;

        match key.code {
            KeyCode::Char('n') if ctrl => self.next_step(),
            KeyCode::Char('b') if ctrl => self.previous_step(),
            KeyCode::Char('s') if ctrl => self.request_demo().await,
            KeyCode::F(n @ 1..=3) => self.jump_to(usize::from(n) - 1),
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.prev_focus(),
            _ => match self.focused() {
                Some(Focus::Field(field)) => self.handle_field_key(field, key),
                Some(Focus::Button(button)) => self.handle_button_key(button, key).await,
                None => {}
            },
        }
    }

    async fn handle_button_key(&mut self, button: FormButton, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.press(button).await,
            KeyCode::Left | KeyCode::Up => self.prev_focus(),
            KeyCode::Right | KeyCode::Down => self.next_focus(),
            _ => {}
        }
    }

    /// Activate a button
    pub async fn press(&mut self, button: FormButton) {
        match button {
            FormButton::Back => self.previous_step(),
            FormButton::Next => self.next_step(),
            FormButton::RequestDemo => self.request_demo().await,
        }
    }

    fn handle_field_key(&mut self, field: FieldName, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match (field.kind(), key.code) {
            (FieldKind::Text, KeyCode::Char(c)) => self.edit_text(field, |text| text.push(c)),
            (FieldKind::Text, KeyCode::Backspace) => self.edit_text(field, |text| {
                text.pop();
            }),
            (FieldKind::Text, KeyCode::Enter) if field.is_multiline() => {
                self.edit_text(field, |text| text.push('\n'))
            }
            (FieldKind::Flag, KeyCode::Char(' ')) => {
                if let FieldValue::Flag(checked) = self.form().record().get(field) {
                    self.apply(field, FieldValue::Flag(!checked));
                }
            }
            (FieldKind::Selection, KeyCode::Up) => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
            }
            (FieldKind::Selection, KeyCode::Down) => {
                let count = self.form().store().catalog().options(field).len();
                if self.option_cursor + 1 < count {
                    self.option_cursor += 1;
                }
            }
            (FieldKind::Selection, KeyCode::Char(' ')) => self.toggle_option(field),
            (FieldKind::Slider, KeyCode::Left) => self.nudge_slider(field, false),
            (FieldKind::Slider, KeyCode::Right) => self.nudge_slider(field, true),
            (FieldKind::YesNo | FieldKind::Bucket, KeyCode::Left) => self.cycle_choice(field, false),
            (FieldKind::YesNo | FieldKind::Bucket, KeyCode::Right) => self.cycle_choice(field, true),
            (_, KeyCode::Enter | KeyCode::Down) => self.next_focus(),
            (_, KeyCode::Up) => self.prev_focus(),
            _ => {}
        }
    }

    fn apply(&mut self, field: FieldName, value: FieldValue) {
        if let Err(e) = self.form_mut().set_field(field, value) {
            tracing::warn!(error = %e, "rejected field input");
            self.status_message = Some(e.to_string());
        }
    }

    fn edit_text(&mut self, field: FieldName, edit: impl FnOnce(&mut String)) {
        let FieldValue::Text(mut text) = self.form().record().get(field) else {
            return;
        };
        edit(&mut text);
        if field == FieldName::PhoneNumber {
            text = mask_phone(&text);
        }
        self.apply(field, FieldValue::Text(text));
    }

    fn toggle_option(&mut self, field: FieldName) {
        let Some(label) = self
            .form()
            .store()
            .catalog()
            .options(field)
            .get(self.option_cursor)
            .map(|label| label.to_string())
        else {
            return;
        };
        let FieldValue::Selection(mut selected) = self.form().record().get(field) else {
            return;
        };
        if !selected.remove(&label) {
            selected.insert(label);
        }
        self.apply(field, FieldValue::Selection(selected));
    }

    fn nudge_slider(&mut self, field: FieldName, up: bool) {
        let Some(spec) = self.form().store().catalog().slider(field) else {
            return;
        };
        let FieldValue::Number(current) = self.form().record().get(field) else {
            return;
        };
        let current = spec.clamp(current);
        let next = if up {
            spec.step_up(current)
        } else {
            spec.step_down(current)
        };
        self.apply(field, FieldValue::Number(i64::from(next)));
    }

    fn cycle_choice(&mut self, field: FieldName, forward: bool) {
        let options: Vec<String> = self
            .form()
            .store()
            .catalog()
            .options(field)
            .into_iter()
            .map(String::from)
            .collect();
        if options.is_empty() {
            return;
        }
        let FieldValue::Choice(current) = self.form().record().get(field) else {
            return;
        };

        let len = options.len();
        let position = current.and_then(|value| options.iter().position(|o| *o == value));
        let index = match (position, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.apply(field, FieldValue::choice(options[index].clone()));
    }

    fn next_step(&mut self) {
        match self.form_mut().next() {
            Advance::Moved(_) => self.reset_focus(),
            Advance::Blocked(validation) => {
                self.status_message = Some(format!(
                    "Please complete the required fields ({} missing)",
                    validation.failing_fields.len()
                ));
            }
            Advance::AtLastStep => {}
        }
    }

    fn previous_step(&mut self) {
        let before = self.form().current_step();
        if self.form_mut().back() != before {
            self.reset_focus();
        }
    }

    fn jump_to(&mut self, index: usize) {
        match self.form_mut().jump_to(index) {
            Ok(_) => self.reset_focus(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    async fn request_demo(&mut self) {
        if !self.form().current_step().is_last() {
            self.status_message = Some("Request Demo is available on the last step".to_string());
            return;
        }
        if self.form_mut().request_demo().await.is_none() {
            self.status_message =
                Some("Please answer the highlighted questions".to_string());
        }
    }
}
