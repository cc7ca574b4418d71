//! Contact form state: fields, live revalidation, and the submit gate

use crate::validate::{is_filled, is_valid_email};

/// Status element texts; shown verbatim in the italic line under the button
pub const STATUS_REQUIRED: &str = "All fields are required";
pub const STATUS_INVALID_EMAIL: &str = "Invalid email address";
pub const STATUS_ERROR: &str = "An error has occurred";
pub const STATUS_SENT: &str = "Sent!";

/// Which check a field runs on revalidation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Filled check only
    Text,
    /// Email pattern plus dot check
    Email,
}

/// A single contact form field
#[derive(Debug, Clone)]
pub struct ContactField {
    /// Wire name used in the submitted form data
    pub name: &'static str,
    /// Label shown as the field's block title
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub is_multiline: bool,
    /// Whether the field has received any input yet
    pub touched: bool,
    /// Verdict from the last revalidation
    pub valid: bool,
}

impl ContactField {
    fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        is_multiline: bool,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            value: String::new(),
            required: true,
            is_multiline,
            touched: false,
            valid: false,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.touched = true;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.touched = true;
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
        self.touched = true;
    }
}

/// Submit button state; the visible labels are part of the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    /// Enabled, "Send"
    Ready,
    /// Disabled, "Fill in"
    Blocked,
    /// Disabled while a request is in flight
    InFlight,
    /// Disabled, "Done"; terminal, never reverts
    Done,
}

impl SubmitControl {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitControl::Ready | SubmitControl::InFlight => "Send",
            SubmitControl::Blocked => "Fill in",
            SubmitControl::Done => "Done",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitControl::Ready)
    }
}

/// Where the last submission attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitOutcome {
    #[default]
    NotAttempted,
    InFlight,
    Succeeded,
    FailedValidation,
    Failed,
}

/// Contact form: three required fields, a gated submit control, and a
/// one-line status element
#[derive(Debug, Clone)]
pub struct ContactState {
    pub fields: Vec<ContactField>,
    pub active_field_index: usize,
    /// Status element text; empty means hidden
    pub status: String,
    pub outcome: SubmitOutcome,
    /// Gate verdict from the last revalidation
    ready: bool,
    in_flight: bool,
    done: bool,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            fields: vec![
                ContactField::new("name", "Name", FieldKind::Text, false),
                ContactField::new("email", "Email", FieldKind::Email, false),
                ContactField::new("message", "Message", FieldKind::Text, true),
            ],
            active_field_index: 0,
            status: String::new(),
            outcome: SubmitOutcome::NotAttempted,
            ready: false,
            in_flight: false,
            done: false,
        }
    }

    pub fn active_field(&self) -> &ContactField {
        &self.fields[self.active_field_index]
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len() - 1);
    }

    /// Type into the active field; runs the live revalidation pass
    pub fn input_char(&mut self, c: char) {
        self.fields[self.active_field_index].push_char(c);
        self.revalidate();
    }

    /// Delete from the active field; runs the live revalidation pass
    pub fn backspace(&mut self) {
        self.fields[self.active_field_index].pop_char();
        self.revalidate();
    }

    /// Empty the active field; runs the live revalidation pass
    pub fn clear_active_field(&mut self) {
        self.fields[self.active_field_index].clear();
        self.revalidate();
    }

    /// Recompute every field verdict and the submit gate, and clear the
    /// status element. Runs on every input event, over all fields, not
    /// just the edited one.
    pub fn revalidate(&mut self) {
        self.status.clear();

        for field in &mut self.fields {
            field.valid = match field.kind {
                FieldKind::Text => is_filled(&field.value),
                FieldKind::Email => is_valid_email(&field.value),
            };
        }

        // The gate is the conjunction over every required field plus the
        // email verdict
        let all_filled = self.required_filled();
        self.ready = all_filled && self.email_valid();
    }

    /// Whether every required field is filled
    pub fn required_filled(&self) -> bool {
        self.fields
            .iter()
            .filter(|f| f.required)
            .all(|f| is_filled(&f.value))
    }

    /// Verdict for the email field from the last revalidation
    pub fn email_valid(&self) -> bool {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::Email)
            .is_some_and(|f| f.valid)
    }

    /// Ordered (wire name, value) pairs captured for dispatch
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.value.clone()))
            .collect()
    }

    /// Derive the submit control. Done wins over everything; edits after a
    /// success never revert it.
    pub fn submit_control(&self) -> SubmitControl {
        if self.done {
            SubmitControl::Done
        } else if self.in_flight {
            SubmitControl::InFlight
        } else if self.ready {
            SubmitControl::Ready
        } else {
            SubmitControl::Blocked
        }
    }

    /// Record a pre-dispatch rejection (required or email check failed)
    pub fn reject_validation(&mut self, status: &str) {
        self.outcome = SubmitOutcome::FailedValidation;
        self.status = status.to_string();
    }

    /// Move to the in-flight state; the control disables until resolution
    pub fn mark_in_flight(&mut self) {
        self.in_flight = true;
        self.outcome = SubmitOutcome::InFlight;
    }

    /// Apply a confirmed 200: status "Sent!", form reset, terminal Done
    pub fn complete_success(&mut self) {
        self.in_flight = false;
        self.done = true;
        self.outcome = SubmitOutcome::Succeeded;
        self.status = STATUS_SENT.to_string();
        for field in &mut self.fields {
            field.value.clear();
            field.touched = false;
            field.valid = false;
        }
        self.active_field_index = 0;
        self.ready = false;
    }

    /// Apply a failed resolution: fields stay as typed, the gate re-opens
    pub fn complete_failure(&mut self) {
        self.in_flight = false;
        self.outcome = SubmitOutcome::Failed;
        self.status = STATUS_ERROR.to_string();
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactState {
        let mut form = ContactState::new();
        form.fields[0].value = "Ada".to_string();
        form.fields[1].value = "ada@example.com".to_string();
        form.fields[2].value = "Hello there".to_string();
        form.revalidate();
        form
    }

    mod submit_control {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_labels() {
            assert_eq!(SubmitControl::Ready.label(), "Send");
            assert_eq!(SubmitControl::InFlight.label(), "Send");
            assert_eq!(SubmitControl::Blocked.label(), "Fill in");
            assert_eq!(SubmitControl::Done.label(), "Done");
        }

        #[test]
        fn test_only_ready_is_enabled() {
            assert!(SubmitControl::Ready.is_enabled());
            assert!(!SubmitControl::Blocked.is_enabled());
            assert!(!SubmitControl::InFlight.is_enabled());
            assert!(!SubmitControl::Done.is_enabled());
        }
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_three_required_fields() {
            let form = ContactState::new();
            assert_eq!(form.fields.len(), 3);
            assert_eq!(form.fields[0].name, "name");
            assert_eq!(form.fields[1].name, "email");
            assert_eq!(form.fields[2].name, "message");
            assert!(form.fields.iter().all(|f| f.required));
        }

        #[test]
        fn test_email_field_kind() {
            let form = ContactState::new();
            assert_eq!(form.fields[1].kind, FieldKind::Email);
            assert_eq!(form.fields[0].kind, FieldKind::Text);
        }

        #[test]
        fn test_message_is_multiline() {
            let form = ContactState::new();
            assert!(form.fields[2].is_multiline);
            assert!(!form.fields[0].is_multiline);
            assert!(!form.fields[1].is_multiline);
        }

        #[test]
        fn test_push_pop_clear_mark_touched() {
            let mut field = ContactField::new("name", "Name", FieldKind::Text, false);
            assert!(!field.touched);

            field.push_char('a');
            assert_eq!(field.value, "a");
            assert!(field.touched);

            field.pop_char();
            assert_eq!(field.value, "");

            field.push_char('b');
            field.clear();
            assert_eq!(field.value, "");
            assert!(field.touched);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactState::new();
            form.next_field();
            assert_eq!(form.active_field_index, 1);
            form.next_field();
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut form = ContactState::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 2);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactState::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
        }
    }

    mod revalidation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_is_blocked() {
            let mut form = ContactState::new();
            form.revalidate();
            assert_eq!(form.submit_control(), SubmitControl::Blocked);
            assert_eq!(form.submit_control().label(), "Fill in");
        }

        #[test]
        fn test_complete_form_is_ready() {
            let form = filled_form();
            assert_eq!(form.submit_control(), SubmitControl::Ready);
            assert_eq!(form.submit_control().label(), "Send");
        }

        #[test]
        fn test_gate_spans_all_fields_not_just_the_last() {
            // Emptying the first field must close the gate even though the
            // later fields are still valid
            let mut form = filled_form();
            form.set_active_field(0);
            form.clear_active_field();
            assert_eq!(form.submit_control(), SubmitControl::Blocked);
        }

        #[test]
        fn test_invalid_email_keeps_gate_closed() {
            let mut form = filled_form();
            form.fields[1].value = "ada@localhost".to_string();
            form.revalidate();
            assert!(form.required_filled());
            assert!(!form.email_valid());
            assert_eq!(form.submit_control(), SubmitControl::Blocked);
        }

        #[test]
        fn test_whitespace_name_counts_as_filled() {
            let mut form = filled_form();
            form.fields[0].value = " ".to_string();
            form.revalidate();
            assert_eq!(form.submit_control(), SubmitControl::Ready);
        }

        #[test]
        fn test_email_verdict_tracks_pattern() {
            let mut form = ContactState::new();
            form.set_active_field(1);
            for c in "ada@example.com".chars() {
                form.input_char(c);
            }
            assert!(form.fields[1].valid);

            // "ada@example.co" still passes; two-letter TLDs are fine
            form.backspace();
            assert!(form.fields[1].valid);

            // "ada@example.c" fails the pattern
            form.backspace();
            assert!(!form.fields[1].valid);
        }

        #[test]
        fn test_status_clears_on_every_input() {
            let mut form = ContactState::new();
            form.status = STATUS_REQUIRED.to_string();
            form.input_char('a');
            assert_eq!(form.status, "");

            form.status = STATUS_INVALID_EMAIL.to_string();
            form.backspace();
            assert_eq!(form.status, "");
        }

        #[test]
        fn test_fields_start_untouched() {
            let form = ContactState::new();
            assert!(form.fields.iter().all(|f| !f.touched));
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_outcome_is_not_attempted() {
            let form = ContactState::new();
            assert_eq!(form.outcome, SubmitOutcome::NotAttempted);
        }

        #[test]
        fn test_reject_validation_sets_status_and_outcome() {
            let mut form = ContactState::new();
            form.reject_validation(STATUS_REQUIRED);
            assert_eq!(form.status, STATUS_REQUIRED);
            assert_eq!(form.outcome, SubmitOutcome::FailedValidation);
        }

        #[test]
        fn test_mark_in_flight_disables_control_keeping_send_label() {
            let mut form = filled_form();
            form.mark_in_flight();
            assert_eq!(form.submit_control(), SubmitControl::InFlight);
            assert_eq!(form.submit_control().label(), "Send");
            assert!(!form.submit_control().is_enabled());
            assert_eq!(form.outcome, SubmitOutcome::InFlight);
        }

        #[test]
        fn test_success_resets_fields_and_locks_done() {
            let mut form = filled_form();
            form.mark_in_flight();
            form.complete_success();

            assert_eq!(form.status, STATUS_SENT);
            assert_eq!(form.outcome, SubmitOutcome::Succeeded);
            assert_eq!(form.submit_control(), SubmitControl::Done);
            assert!(form.fields.iter().all(|f| f.value.is_empty()));
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_done_survives_further_edits() {
            let mut form = filled_form();
            form.mark_in_flight();
            form.complete_success();

            form.input_char('x');
            assert_eq!(form.status, "");
            assert_eq!(form.submit_control(), SubmitControl::Done);

            // Even a fully valid refill leaves the control Done
            form.fields[0].value = "Ada".to_string();
            form.fields[1].value = "ada@example.com".to_string();
            form.fields[2].value = "Again".to_string();
            form.revalidate();
            assert_eq!(form.submit_control(), SubmitControl::Done);
        }

        #[test]
        fn test_failure_keeps_fields_and_reopens_gate() {
            let mut form = filled_form();
            form.mark_in_flight();
            form.complete_failure();

            assert_eq!(form.status, STATUS_ERROR);
            assert_eq!(form.outcome, SubmitOutcome::Failed);
            assert_eq!(form.submit_control(), SubmitControl::Ready);
            assert_eq!(form.fields[0].value, "Ada");
            assert_eq!(form.fields[1].value, "ada@example.com");
            assert_eq!(form.fields[2].value, "Hello there");
        }

        #[test]
        fn test_snapshot_preserves_wire_order() {
            let form = filled_form();
            let snapshot = form.snapshot();
            assert_eq!(
                snapshot,
                vec![
                    ("name".to_string(), "Ada".to_string()),
                    ("email".to_string(), "ada@example.com".to_string()),
                    ("message".to_string(), "Hello there".to_string()),
                ]
            );
        }
    }
}
