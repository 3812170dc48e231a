//! Contact book client: remote API surface and effect execution.
mod api;
mod runtime;
mod types;

pub use api::{encode_path_component, ClientSettings, ContactsApi, ReqwestContactsApi};
pub use runtime::ClientHandle;
pub use types::{ApiError, ApiEvent, Contact};
