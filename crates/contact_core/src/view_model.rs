#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactBookView {
    pub contacts: Vec<ContactRowView>,
    pub name_input: String,
    pub email_input: String,
    pub error_message: String,
    pub submitting: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRowView {
    pub name: String,
    pub email: String,
}
