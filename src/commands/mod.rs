//! REST Command Wrappers
//!
//! Frontend bindings to the school API, organized by concern.

mod http;
mod resource;
mod session;

pub use http::{init_config, HttpTransport};
pub use resource::*;
pub use session::*;
