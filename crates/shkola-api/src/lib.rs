//! АИС ШКОЛА API Layer
//!
//! Platform-neutral half of the dashboard:
//! - domain: wire records, filters and payloads for every resource
//! - client: typed CRUD clients over a pluggable transport
//! - session: login / who-am-i and the role gate
//! - screen: per-resource screen state (rows, edit buffers, notifications)

pub mod config;
pub mod domain;
pub mod error;
pub mod gradebook;
pub mod lookup;
pub mod nav;
pub mod notification;
pub mod query;
pub mod resource;
pub mod screen;
pub mod session;
pub mod transport;

mod client;
mod envelope;

#[cfg(test)]
mod testing;

pub use client::ResourceClient;
pub use config::ClientConfig;
pub use envelope::{DeleteResponse, Envelope};
pub use error::{ApiError, ApiResult};
pub use resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Reference, Resource};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
