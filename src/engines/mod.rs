pub mod memory;
pub mod shared;

pub use memory::KvStore;
pub use shared::SharedStore;

use crate::Result;

// set and remove return Result so a disk-backed engine can report I/O errors.
pub trait KvsEngine {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: String, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}
