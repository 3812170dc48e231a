use crate::Contact;

/// Transport-agnostic description of a failed remote call. The core only
/// carries it as data; logging happens at the glue layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View became live; triggers the initial list fetch.
    Started,
    /// User edited the name input box.
    NameChanged(String),
    /// User edited the email input box.
    EmailChanged(String),
    /// User clicked Add.
    SubmitClicked,
    /// User clicked delete on a contact row.
    DeleteClicked { email: String },
    /// A list refresh resolved.
    RefreshCompleted {
        result: Result<Vec<Contact>, RequestFailure>,
    },
    /// The in-flight create request resolved.
    SubmitCompleted { result: Result<(), RequestFailure> },
    /// A delete request resolved.
    DeleteCompleted {
        email: String,
        result: Result<(), RequestFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
