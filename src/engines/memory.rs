use crate::{KvsEngine, Result};
use log::debug;
use std::collections::HashMap;

/// In-memory store. Entries live for as long as the value does.
#[derive(Debug, Default)]
pub struct KvStore {
    kv: HashMap<String, String>,
}

impl KvStore {
    pub fn new() -> KvStore {
        KvStore { kv: HashMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> KvStore {
        KvStore {
            kv: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.kv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kv.is_empty()
    }
}

impl KvsEngine for KvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.kv.get(key).cloned()
    }

    fn set(&mut self, key: String, value: String) -> Result<()> {
        debug!("set {key}");
        self.kv.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.kv.remove(key).is_none() {
            debug!("remove of absent key {key}");
        }
        Ok(())
    }
}
