//! Core traits for service and session behavior.

mod service;
mod session;

pub use service::Service;
pub use session::Session;
