use std::fmt;

use log::{debug, info, warn};
use thiserror::Error;

use crate::components::toast::{Notice, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Email => write!(f, "email"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("missing required field: {0}")]
    MissingField(RequiredField),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
}

impl RegistrationForm {
    /// First empty field, checked in form order. Whitespace counts as content.
    fn missing_field(&self) -> Option<RequiredField> {
        if self.name.is_empty() {
            Some(RequiredField::Name)
        } else if self.email.is_empty() {
            Some(RequiredField::Email)
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationStatus {
    #[default]
    NotRegistered,
    Registered,
}

/// Tracks the visitor's registration intent for one page session.
///
/// Both form placements on the landing page read and write the same
/// tracker, so typing in one shows up in the other and registering in
/// either flips both to their confirmation view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationTracker {
    form: RegistrationForm,
    status: RegistrationStatus,
}

impl RegistrationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn is_registered(&self) -> bool {
        self.status == RegistrationStatus::Registered
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Validates the held form and records the registration.
    ///
    /// On a missing field the visitor gets a destructive notice and nothing
    /// else changes. On success the status flips, a success notice goes out
    /// and only then is the form cleared.
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Result<(), RegistrationError> {
        if let Some(field) = self.form.missing_field() {
            warn!("Registration rejected, {} is empty", field);
            notifier.notify(Notice::destructive(
                "Please fill in all fields",
                "Both name and email are required for registration.",
            ));
            return Err(RegistrationError::MissingField(field));
        }

        if self.is_registered() {
            debug!("Repeat registration in the same session");
        }
        self.status = RegistrationStatus::Registered;
        info!("Registration recorded");
        notifier.notify(Notice::new(
            "Registration Successful! 🎉",
            "Check your email for webinar details and calendar invite.",
        ));
        self.form.clear();
        Ok(())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn submit_registration(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        notifier: &dyn Notifier,
    ) -> Result<(), RegistrationError> {
        self.set_name(name);
        self.set_email(email);
        self.submit(notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::ToastVariant;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    impl RecordingNotifier {
        fn taken(&self) -> Vec<Notice> {
            self.notices.borrow_mut().drain(..).collect()
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();

        let result = tracker.submit_registration("", "a@b.com", &notifier);

        assert_eq!(result, Err(RegistrationError::MissingField(RequiredField::Name)));
        assert_eq!(tracker.status(), RegistrationStatus::NotRegistered);
        assert_eq!(tracker.form().email, "a@b.com");
        let notices = notifier.taken();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].variant, ToastVariant::Destructive);
        assert_eq!(notices[0].title, "Please fill in all fields");
    }

    #[test]
    fn empty_email_is_rejected_and_form_kept() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();

        let result = tracker.submit_registration("Jane Doe", "", &notifier);

        assert_eq!(result, Err(RegistrationError::MissingField(RequiredField::Email)));
        assert!(!tracker.is_registered());
        assert_eq!(
            tracker.form(),
            &RegistrationForm { name: "Jane Doe".into(), email: String::new() }
        );
        assert_eq!(notifier.taken().len(), 1);
    }

    #[test]
    fn both_empty_reports_name_first() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();

        let err = tracker.submit(&notifier).unwrap_err();

        assert_eq!(err.to_string(), "missing required field: name");
        assert_eq!(tracker.form(), &RegistrationForm::default());
    }

    #[test]
    fn complete_form_registers_and_clears() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();

        tracker
            .submit_registration("Jane Doe", "jane@example.com", &notifier)
            .unwrap();

        assert_eq!(tracker.status(), RegistrationStatus::Registered);
        assert_eq!(tracker.form(), &RegistrationForm::default());
        let notices = notifier.taken();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].variant, ToastVariant::Default);
        assert_eq!(notices[0].title, "Registration Successful! 🎉");
    }

    #[test]
    fn resubmission_after_success_still_succeeds() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();
        tracker
            .submit_registration("Jane Doe", "jane@example.com", &notifier)
            .unwrap();

        tracker
            .submit_registration("Bob", "bob@example.com", &notifier)
            .unwrap();

        assert!(tracker.is_registered());
        assert_eq!(tracker.form(), &RegistrationForm::default());
        assert_eq!(notifier.taken().len(), 2);
    }

    #[test]
    fn failure_after_success_keeps_registered() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();
        tracker
            .submit_registration("Jane Doe", "jane@example.com", &notifier)
            .unwrap();

        assert!(tracker.submit_registration("Bob", "", &notifier).is_err());

        assert!(tracker.is_registered());
        assert_eq!(tracker.form().name, "Bob");
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let notifier = RecordingNotifier::default();
        let mut tracker = RegistrationTracker::new();

        assert!(tracker.submit_registration(" ", " ", &notifier).is_ok());
        assert!(tracker.is_registered());
    }

    #[test]
    fn setters_update_shared_form() {
        let mut tracker = RegistrationTracker::new();
        tracker.set_name("Ja");
        tracker.set_name("Jane");
        tracker.set_email("jane@");

        assert_eq!(tracker.form().name, "Jane");
        assert_eq!(tracker.form().email, "jane@");
        assert_eq!(tracker.status(), RegistrationStatus::NotRegistered);
    }
}
