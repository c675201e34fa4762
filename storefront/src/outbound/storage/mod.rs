//! Session storage adapters.
//!
//! - **memory**: process-local map, used by tests and one-shot tooling
//! - **file**: one file per key inside a capability-scoped directory

mod file;
mod memory;

pub use file::FileSessionStorage;
pub use memory::InMemorySessionStorage;
