//! restash-local - Filesystem and in-memory data providers.

mod memory;
mod provider;
mod store;

pub use memory::MemoryProvider;
pub use provider::FileProvider;
pub use store::FileStore;
