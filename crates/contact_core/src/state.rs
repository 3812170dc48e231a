use crate::view_model::{ContactBookView, ContactRowView};

/// Validation message shown when either form field is blank after trimming.
pub const ERR_FIELDS_REQUIRED: &str = "Both fields are required.";
/// Validation message shown when the email field lacks an `@`.
pub const ERR_INVALID_EMAIL: &str = "Enter a valid email.";
/// Generic message shown when the create request fails remotely.
pub const ERR_SUBMIT_FAILED: &str = "Something went wrong.";

/// A contact record as held by the client. Identity key is `email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

/// Transient add-form input state.
///
/// `error_message` is a single slot overwritten by each validation or
/// submission attempt; empty string means no error. `submitting` is true only
/// strictly between submission start and its resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub error_message: String,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    contacts: Vec<Contact>,
    form: FormState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ContactBookView {
        ContactBookView {
            contacts: self
                .contacts
                .iter()
                .map(|contact| ContactRowView {
                    name: contact.name.clone(),
                    email: contact.email.clone(),
                })
                .collect(),
            name_input: self.form.name.clone(),
            email_input: self.form.email.clone(),
            error_message: self.form.error_message.clone(),
            submitting: self.form.submitting,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. Used by the render loop to
    /// coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub(crate) fn set_name(&mut self, value: String) {
        self.form.name = value;
        self.dirty = true;
    }

    pub(crate) fn set_email(&mut self, value: String) {
        self.form.email = value;
        self.dirty = true;
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.form.error_message = message.to_string();
        self.dirty = true;
    }

    /// Enters the in-flight submission state: the error slot is cleared and
    /// re-entrant submissions are blocked until resolution.
    pub(crate) fn begin_submission(&mut self) {
        self.form.submitting = true;
        self.form.error_message.clear();
        self.dirty = true;
    }

    /// Successful resolution: form fields and error are cleared.
    pub(crate) fn finish_submission_ok(&mut self) {
        self.form.name.clear();
        self.form.email.clear();
        self.form.error_message.clear();
        self.form.submitting = false;
        self.dirty = true;
    }

    /// Failed resolution: fields are preserved for retry, only the error
    /// slot changes.
    pub(crate) fn finish_submission_err(&mut self, message: &str) {
        self.form.error_message = message.to_string();
        self.form.submitting = false;
        self.dirty = true;
    }

    /// Wholesale snapshot replacement; the only mutation path for the
    /// contact list.
    pub(crate) fn replace_contacts(&mut self, snapshot: Vec<Contact>) {
        self.contacts = snapshot;
        self.dirty = true;
    }
}
