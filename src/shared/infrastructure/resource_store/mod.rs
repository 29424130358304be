// Port for a collection of versioned records.
//
// Responsibilities
// - Hand out ids that are never reused for the life of the store.
// - Start every record at version 1 and bump it by exactly one per update.
// - Report a missing id as NotFound so the inbound layer can answer 404.
//
// Boundaries
// - Payload validation happens in the caller before create or update.
// - Patch merging is supplied by the caller as a function of the current record.

pub mod in_memory;

use crate::shared::core::primitives::{Page, PageRequest, Record};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("resource not found: {id}")]
    NotFound { id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("version conflict on {id}: expected {expected}, actual {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Builds the next payload from the current record.
pub type Patch<T> = Box<dyn FnOnce(&Record<T>) -> T + Send>;

#[async_trait]
pub trait ResourceStore<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    async fn create(&self, data: T) -> Result<Record<T>, StoreError>;

    async fn get(&self, id: &str) -> Result<Record<T>, StoreError>;

    async fn list(&self, request: &PageRequest) -> Result<Page<T>, StoreError>;

    async fn update(&self, id: &str, patch: Patch<T>) -> Result<Record<T>, StoreError>;

    /// Like `update`, but only when the stored version still equals
    /// `expected_version`.
    async fn update_if_version(
        &self,
        id: &str,
        expected_version: u64,
        patch: Patch<T>,
    ) -> Result<Record<T>, StoreError>;

    async fn delete(&self, id: &str) -> Result<Record<T>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}
