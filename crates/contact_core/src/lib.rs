//! Contact book core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, RequestFailure};
pub use state::{AppState, Contact, FormState, ERR_FIELDS_REQUIRED, ERR_INVALID_EMAIL, ERR_SUBMIT_FAILED};
pub use update::update;
pub use view_model::{ContactBookView, ContactRowView};
