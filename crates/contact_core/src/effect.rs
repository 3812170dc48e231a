#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-fetch the full contact list and replace the snapshot wholesale.
    RefreshContacts,
    /// Create a contact remotely. Values are sent exactly as typed; trimming
    /// is only applied for the emptiness check.
    CreateContact { name: String, email: String },
    /// Delete a contact remotely, keyed by email.
    DeleteContact { email: String },
}
