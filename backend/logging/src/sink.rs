//! Destinations for formatted entries.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;

/// Durable append of one fully formatted entry.
///
/// Implementations serialize their own appends: a logger may be shared across
/// threads, and one entry must never interleave with another.
pub trait Sink: Send + Sync {
    fn append(&self, entry: &str) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn append(&self, entry: &str) -> Result<()> {
        (**self).append(entry)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&self, entry: &str) -> Result<()> {
        (**self).append(entry)
    }
}

/// Keeps every appended entry in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All entries concatenated, as they would appear in a file.
    pub fn contents(&self) -> String {
        self.lock().concat()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn append(&self, entry: &str) -> Result<()> {
        self.lock().push(entry.to_string());
        Ok(())
    }
}
