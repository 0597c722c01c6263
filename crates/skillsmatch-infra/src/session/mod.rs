//! Session storage implementations - persistent file and in-memory.

mod file;
mod memory;
mod store;

pub use file::FileSessionStorage;
pub use memory::InMemorySessionStorage;
pub use store::{SessionStore, TOKEN_KEY, USER_ID_KEY, USER_TYPE_KEY};
