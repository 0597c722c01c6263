//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod session_storage;

pub use session_storage::SessionStorage;
