//! Contact page with the form state machine.
//!
//! The form moves from Idle through Submitting to Success or Error.
//! Submission is simulated: a delivery handle is created at submit time and
//! polled from the event loop tick until it resolves. At most one delivery is
//! in flight; submit is refused while one is pending.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

use crate::config::ProfileConfig;
use crate::tui::theme::Palette;

/// Simulated delivery latency.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// A delivery still pending after this long counts as failed. Backstop for a
/// stuck submission; the simulated transport resolves well before this.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Confirmation shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Message shown when a submission fails.
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Field in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Sender name
    Name,
    /// Sender email address
    Email,
    /// Message subject
    Subject,
    /// Message body
    Message,
}

impl FormField {
    /// Get the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Get the previous field.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }

    /// Get the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// Submission state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No submission attempted since the last edit cycle
    Idle,
    /// A delivery is in flight; the submit control is disabled
    Submitting,
    /// Last submission succeeded; fields were cleared
    Success,
    /// Last submission failed; fields were retained
    Error,
}

/// Result of polling a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryStatus {
    Pending,
    Delivered,
    Failed,
}

/// Simulated asynchronous message delivery.
///
/// Stands in for a real transport: resolves after a fixed delay, with the
/// outcome decided at creation. Polled once per event-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelivery {
    started: Instant,
    resolves_at: Instant,
    succeeds: bool,
}

impl SimulatedDelivery {
    /// Begins a delivery that resolves successfully after the simulated delay.
    #[must_use]
    pub fn begin(now: Instant) -> Self {
        Self {
            started: now,
            resolves_at: now + SUBMIT_DELAY,
            succeeds: true,
        }
    }

    /// Begins a delivery that resolves as failed. Exercises the error path.
    #[must_use]
    pub fn begin_failing(now: Instant) -> Self {
        Self {
            succeeds: false,
            ..Self::begin(now)
        }
    }

    fn poll(&self, now: Instant) -> DeliveryStatus {
        if now >= self.resolves_at {
            if self.succeeds {
                DeliveryStatus::Delivered
            } else {
                DeliveryStatus::Failed
            }
        } else if now.duration_since(self.started) >= SUBMIT_TIMEOUT {
            DeliveryStatus::Failed
        } else {
            DeliveryStatus::Pending
        }
    }
}

/// Contact form state machine.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Currently focused field
    pub active_field: FormField,
    /// Name field value
    pub name: String,
    /// Email field value
    pub email: String,
    /// Subject field value
    pub subject: String,
    /// Message field value
    pub message: String,
    status: SubmitStatus,
    delivery: Option<SimulatedDelivery>,
}

impl ContactForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_field: FormField::Name,
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
            delivery: None,
        }
    }

    /// Current submission status.
    #[must_use]
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Whether the submit control is actionable: every field non-empty after
    /// trimming and no delivery in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.status != SubmitStatus::Submitting
    }

    /// Whether all four fields are non-empty after trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Get the value of a field.
    #[must_use]
    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Get a mutable reference to the active field's value.
    pub const fn get_active_field_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Move focus to the next field.
    pub const fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Move focus to the previous field.
    pub const fn previous_field(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Appends a character to the active field. Supersedes a Success/Error
    /// display: any edit returns the machine toward Idle.
    pub fn push_char(&mut self, c: char) {
        if self.status == SubmitStatus::Submitting {
            return;
        }
        self.mark_edited();
        self.get_active_field_mut().push(c);
    }

    /// Removes the last character from the active field.
    pub fn backspace(&mut self) {
        if self.status == SubmitStatus::Submitting {
            return;
        }
        self.mark_edited();
        self.get_active_field_mut().pop();
    }

    fn mark_edited(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Attempts to start a submission. Refused (returns false) when the
    /// validity guard fails or a delivery is already in flight.
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.delivery = Some(SimulatedDelivery::begin(now));
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Starts a submission over a caller-provided delivery. Same guard as
    /// [`Self::submit`]; lets tests drive the failure path.
    pub fn submit_with(&mut self, delivery: SimulatedDelivery) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.delivery = Some(delivery);
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Polls the in-flight delivery, if any. Called once per event-loop
    /// iteration. On success all fields are cleared; on failure they are
    /// retained for resubmission.
    pub fn tick(&mut self, now: Instant) {
        let Some(delivery) = self.delivery else {
            return;
        };
        match delivery.poll(now) {
            DeliveryStatus::Pending => {}
            DeliveryStatus::Delivered => {
                self.delivery = None;
                self.status = SubmitStatus::Success;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.active_field = FormField::Name;
            }
            DeliveryStatus::Failed => {
                self.delivery = None;
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// Handle keyboard input while the form has focus.
    ///
    /// Returns `true` when the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                true
            }
            KeyCode::Char(c) => {
                self.push_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Enter => {
                self.submit(now);
                true
            }
            _ => false,
        }
    }

    /// Render the contact page: intro, contact details, and the form.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        profile: &ProfileConfig,
        focused: bool,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(area);

        self.render_details(f, columns[0], palette, profile);
        self.render_form(f, columns[1], palette, focused);
    }

    fn render_details(&self, f: &mut Frame, area: Rect, palette: &Palette, profile: &ProfileConfig) {
        let label_style = Style::default().fg(palette.primary.main);
        let value_style = Style::default().fg(palette.text.primary);

        let mut lines = vec![
            Line::from(Span::styled(
                "Get In Touch",
                Style::default()
                    .fg(palette.primary.main)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "Have a project in mind or just want to chat? I'd love to hear from you.",
                Style::default().fg(palette.text.secondary),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Email     ", label_style),
                Span::styled(profile.contact_email.clone(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Phone     ", label_style),
                Span::styled(profile.phone.clone(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Location  ", label_style),
                Span::styled(profile.location.clone(), value_style),
            ]),
            Line::raw(""),
        ];

        for (label, url) in profile.social_links() {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<9} "), label_style),
                Span::styled(url.to_string(), Style::default().fg(palette.secondary.main)),
            ]));
        }

        let details = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.divider))
                .style(Style::default().bg(palette.background.paper)),
        );
        f.render_widget(details, area);
    }

    fn render_form(&self, f: &mut Frame, area: Rect, palette: &Palette, focused: bool) {
        let block = Block::default()
            .title(" Send Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                palette.primary.main
            } else {
                palette.divider
            }))
            .style(Style::default().bg(palette.background.paper));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Email
                Constraint::Length(3), // Subject
                Constraint::Min(4),    // Message
                Constraint::Length(2), // Submit row + status
            ])
            .split(inner);

        let fields = [
            FormField::Name,
            FormField::Email,
            FormField::Subject,
            FormField::Message,
        ];
        for (field, row) in fields.iter().zip(rows.iter()) {
            self.render_field(f, *row, palette, *field, focused);
        }

        self.render_submit_row(f, rows[4], palette);
    }

    fn render_field(
        &self,
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        field: FormField,
        focused: bool,
    ) {
        let active = focused && self.active_field == field;
        let border_style = if active {
            Style::default().fg(palette.primary.main)
        } else {
            Style::default().fg(palette.divider)
        };

        let value = self.field_value(field);
        let text = if active {
            format!("{value}\u{2588}") // block cursor
        } else {
            value.to_string()
        };

        let widget = Paragraph::new(text)
            .style(Style::default().fg(palette.text.primary))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(widget, area);
    }

    fn render_submit_row(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let line = match self.status {
            SubmitStatus::Submitting => Line::from(Span::styled(
                "Sending...",
                Style::default().fg(palette.text.secondary),
            )),
            SubmitStatus::Success => Line::from(Span::styled(
                SUCCESS_MESSAGE,
                Style::default().fg(palette.success),
            )),
            SubmitStatus::Error => Line::from(Span::styled(
                ERROR_MESSAGE,
                Style::default().fg(palette.error),
            )),
            SubmitStatus::Idle => {
                if self.can_submit() {
                    Line::from(Span::styled(
                        "Enter: Send Message",
                        Style::default()
                            .fg(palette.primary.main)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        "Fill in all fields to send",
                        Style::default().fg(palette.text.secondary),
                    ))
                }
            }
        };

        f.render_widget(Paragraph::new(line), area);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Jamie".to_string();
        form.email = "jamie@example.com".to_string();
        form.subject = "Hello".to_string();
        form.message = "Nice site!".to_string();
        form
    }

    #[test]
    fn test_empty_form_cannot_submit() {
        let mut form = ContactForm::new();
        assert!(!form.can_submit());
        assert!(!form.submit(Instant::now()));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_whitespace_only_field_fails_guard() {
        let mut form = filled_form();
        form.subject = "   ".to_string();
        assert!(!form.is_valid());
        assert!(!form.submit(Instant::now()));
    }

    #[test]
    fn test_valid_form_submits_once() {
        let mut form = filled_form();
        let now = Instant::now();

        assert!(form.submit(now));
        assert_eq!(form.status(), SubmitStatus::Submitting);

        // Single-flight: a second submit while pending is refused
        assert!(!form.submit(now));
    }

    #[test]
    fn test_delivery_resolves_to_success_and_clears_fields() {
        let mut form = filled_form();
        let now = Instant::now();
        assert!(form.submit(now));

        // Still pending before the delay elapses
        form.tick(now);
        assert_eq!(form.status(), SubmitStatus::Submitting);

        form.tick(now + SUBMIT_DELAY);
        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.subject.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_failed_delivery_retains_fields() {
        let mut form = filled_form();
        let now = Instant::now();
        assert!(form.submit_with(SimulatedDelivery::begin_failing(now)));

        form.tick(now + SUBMIT_DELAY);
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.name, "Jamie");
        assert_eq!(form.message, "Nice site!");
    }

    #[test]
    fn test_stuck_delivery_times_out_to_error() {
        let now = Instant::now();
        let delivery = SimulatedDelivery {
            started: now,
            // A transport that never resolves
            resolves_at: now + Duration::from_secs(3600),
            succeeds: true,
        };

        let mut form = filled_form();
        assert!(form.submit_with(delivery));

        form.tick(now + SUBMIT_TIMEOUT - Duration::from_millis(1));
        assert_eq!(form.status(), SubmitStatus::Submitting);

        form.tick(now + SUBMIT_TIMEOUT);
        assert_eq!(form.status(), SubmitStatus::Error);
    }

    #[test]
    fn test_edit_supersedes_success_display() {
        let mut form = filled_form();
        let now = Instant::now();
        form.submit(now);
        form.tick(now + SUBMIT_DELAY);
        assert_eq!(form.status(), SubmitStatus::Success);

        form.push_char('H');
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.name, "H");
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled_form();
        form.submit(Instant::now());

        form.push_char('x');
        form.backspace();
        assert_eq!(form.name, "Jamie");
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn test_field_cycling() {
        let mut form = ContactForm::new();
        assert_eq!(form.active_field, FormField::Name);
        form.next_field();
        assert_eq!(form.active_field, FormField::Email);
        form.previous_field();
        form.previous_field();
        assert_eq!(form.active_field, FormField::Message);
    }

    #[test]
    fn test_handle_input_typing_and_navigation() {
        use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

        let mut form = ContactForm::new();
        let now = Instant::now();
        let key = |code| KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };

        assert!(form.handle_input(key(KeyCode::Char('J')), now));
        assert!(form.handle_input(key(KeyCode::Char('o')), now));
        assert!(form.handle_input(key(KeyCode::Backspace), now));
        assert_eq!(form.name, "J");

        assert!(form.handle_input(key(KeyCode::Tab), now));
        assert_eq!(form.active_field, FormField::Email);

        // Enter with an invalid form does not start a submission
        assert!(form.handle_input(key(KeyCode::Enter), now));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }
}
