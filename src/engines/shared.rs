use crate::{KvsEngine, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one engine, every operation under a single mutex.
#[derive(Debug)]
pub struct SharedStore<E: KvsEngine> {
    inner: Arc<Mutex<E>>,
}

impl<E: KvsEngine> Clone for SharedStore<E> {
    fn clone(&self) -> Self {
        SharedStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: KvsEngine> SharedStore<E> {
    pub fn new(engine: E) -> SharedStore<E> {
        SharedStore {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key)
    }

    pub fn set(&self, key: String, value: String) -> Result<()> {
        self.lock().set(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key)
    }

    pub fn with_engine<T>(&self, f: impl FnOnce(&mut E) -> T) -> T {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    // poisoning is safe to ignore, engine calls are single map operations
    fn lock(&self) -> MutexGuard<'_, E> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: KvsEngine> KvsEngine for SharedStore<E> {
    fn get(&self, key: &str) -> Option<String> {
        SharedStore::get(self, key)
    }

    fn set(&mut self, key: String, value: String) -> Result<()> {
        SharedStore::set(self, key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        SharedStore::remove(self, key)
    }
}
