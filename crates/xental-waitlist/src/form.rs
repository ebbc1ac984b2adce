//! Waitlist form state: input, submission and user-facing messages.

use tracing::{error, info};

use crate::email;
use crate::store::{StoreError, WaitlistEntry, WaitlistStore};

/// Shown when the email is already on the list.
pub const DUPLICATE_MESSAGE: &str = "This email is already on our waitlist!";
/// Shown for any other failure.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";
/// Shown when the input is not an email address.
pub const INVALID_MESSAGE: &str = "Please enter a valid email address.";
/// Shown once the email is on the list.
pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch soon.";

/// Default submit label.
pub const BUTTON_LABEL: &str = "Join the Waitlist";
/// Submit label while a request is in flight.
pub const BUTTON_BUSY_LABEL: &str = "Joining...";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Waitlist signup form.
#[derive(Debug, Clone)]
pub struct WaitlistForm {
    input: String,
    status: FormStatus,
    error: Option<&'static str>,
    /// Value written to the `source` column.
    source: String,
}

impl WaitlistForm {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            status: FormStatus::Editing,
            error: None,
            source: source.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Current error message, if the last attempt failed.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            FormStatus::Submitting => BUTTON_BUSY_LABEL,
            _ => BUTTON_LABEL,
        }
    }

    /// Input is only editable before success and while idle.
    pub fn is_editable(&self) -> bool {
        self.status == FormStatus::Editing
    }

    pub fn push_char(&mut self, ch: char) {
        if self.is_editable() {
            self.input.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_editable() {
            self.input.pop();
        }
    }

    /// Validate and move to `Submitting`, returning the row to insert.
    ///
    /// `None` when there is nothing to send: empty input, a submission
    /// already in flight, an invalid address (which sets an error), or a
    /// form that already succeeded.
    pub fn begin_submit(&mut self) -> Option<WaitlistEntry> {
        if self.status != FormStatus::Editing || self.input.trim().is_empty() {
            return None;
        }
        let normalized = email::normalize(&self.input);
        if !email::is_valid(&normalized) {
            self.error = Some(INVALID_MESSAGE);
            return None;
        }
        self.error = None;
        self.status = FormStatus::Submitting;
        Some(WaitlistEntry {
            email: normalized,
            source: self.source.clone(),
        })
    }

    /// Apply the store's answer to an in-flight submission.
    pub fn finish_submit(&mut self, result: Result<(), StoreError>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                info!(source = %self.source, "joined waitlist");
                self.status = FormStatus::Submitted;
                self.input.clear();
            }
            Err(StoreError::Conflict { .. }) => {
                info!("email already on waitlist");
                self.status = FormStatus::Editing;
                self.error = Some(DUPLICATE_MESSAGE);
            }
            Err(err) => {
                error!(error = %err, "error submitting email");
                self.status = FormStatus::Editing;
                self.error = Some(GENERIC_MESSAGE);
            }
        }
    }

    /// Submit synchronously against `store`.
    pub fn submit(&mut self, store: &dyn WaitlistStore) {
        if let Some(entry) = self.begin_submit() {
            let result = store.insert(&entry);
            self.finish_submit(result);
        }
    }

    /// The message to show below the form, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Submitted => Some(SUCCESS_MESSAGE),
            _ => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn typed(text: &str) -> WaitlistForm {
        let mut form = WaitlistForm::new("landing_page");
        text.chars().for_each(|c| form.push_char(c));
        form
    }

    #[test]
    fn test_new_email_succeeds_and_clears_input() {
        let store = MemoryStore::new();
        let mut form = typed("  Jane@Example.com ");
        form.submit(&store);
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.input(), "");
        assert_eq!(form.message(), Some(SUCCESS_MESSAGE));
        assert_eq!(
            store.entries(),
            vec![WaitlistEntry {
                email: "jane@example.com".into(),
                source: "landing_page".into(),
            }]
        );
    }

    #[test]
    fn test_duplicate_email_reports_and_stores_once() {
        let store = MemoryStore::new();
        typed("jane@example.com").submit(&store);

        let mut again = typed("JANE@example.com");
        again.submit(&store);
        assert_eq!(again.status(), FormStatus::Editing);
        assert_eq!(again.message(), Some(DUPLICATE_MESSAGE));
        assert_eq!(again.input(), "JANE@example.com");
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn test_other_failures_get_generic_message() {
        let mut form = typed("jane@example.com");
        assert!(form.begin_submit().is_some());
        assert_eq!(form.button_label(), BUTTON_BUSY_LABEL);
        form.finish_submit(Err(StoreError::Rejected {
            status: 500,
            code: None,
            message: "boom".into(),
        }));
        assert_eq!(form.message(), Some(GENERIC_MESSAGE));
        assert_eq!(form.button_label(), BUTTON_LABEL);
    }

    #[test]
    fn test_empty_and_invalid_input() {
        let mut empty = typed("   ");
        assert!(empty.begin_submit().is_none());
        assert_eq!(empty.message(), None);

        let mut invalid = typed("not-an-email");
        assert!(invalid.begin_submit().is_none());
        assert_eq!(invalid.message(), Some(INVALID_MESSAGE));
        assert_eq!(invalid.status(), FormStatus::Editing);
    }

    #[test]
    fn test_no_double_submit_or_edit_in_flight() {
        let mut form = typed("jane@example.com");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.push_char('x');
        assert_eq!(form.input(), "jane@example.com");
    }

    #[test]
    fn test_retry_clears_previous_error() {
        let store = MemoryStore::new();
        let mut form = typed("bad");
        form.submit(&store);
        assert_eq!(form.error(), Some(INVALID_MESSAGE));
        "@x.io".chars().for_each(|c| form.push_char(c));
        form.submit(&store);
        assert_eq!(form.error(), None);
        assert_eq!(form.status(), FormStatus::Submitted);
    }
}
