pub mod config;
pub mod engines;
pub mod error;
pub mod proto;
pub mod session;

pub use config::Config;
pub use engines::{KvStore, KvsEngine, SharedStore};
pub use error::{KvsError, Result};
pub use proto::{Request, Response};
pub use session::Session;
