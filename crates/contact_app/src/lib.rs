//! Contact book glue: binds the pure core to the client runtime.
pub mod logging;
mod session;

pub use session::ContactSession;
