//! Project configuration stores.

mod memory;
mod yaml;

pub use memory::MemoryConfigStore;
pub use yaml::{PROJECT_FILE, YamlConfigStore};
