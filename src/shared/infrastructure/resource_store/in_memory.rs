// In memory implementation of the ResourceStore port.
//
// Purpose
// - Back the bookstore service and its tests without a database.
//
// Responsibilities
// - Keep records in a map keyed by id, remembering insertion order.
// - Draw ids from a counter owned by this instance.
// - Run each update as one read-modify-write under the write lock, so two
//   concurrent updates of one id never skip or repeat a version.

use crate::shared::core::primitives::{
    order_records, paginate, Page, PageRequest, Record, SortableFields,
};
use crate::shared::infrastructure::resource_store::{Patch, ResourceStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Entry<T> {
    sequence: u64,
    record: Record<T>,
}

pub struct InMemoryResourceStore<T> {
    records: RwLock<HashMap<String, Entry<T>>>,
    next_id: AtomicU64,
    delay_update_ms: AtomicU64,
    is_offline: bool,
}

impl<T> Default for InMemoryResourceStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            delay_update_ms: AtomicU64::new(0),
            is_offline: false,
        }
    }
}

impl<T> InMemoryResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds the write lock this long between merging a patch and storing it.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Resource store offline".into()));
        }
        Ok(())
    }

    fn not_found(id: &str) -> StoreError {
        StoreError::NotFound { id: id.to_string() }
    }
}

impl<T> InMemoryResourceStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn apply_patch(
        &self,
        id: &str,
        expected_version: Option<u64>,
        patch: Patch<T>,
    ) -> Result<Record<T>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let entry = guard.get_mut(id).ok_or_else(|| Self::not_found(id))?;

        let current = entry.record.version;
        if let Some(expected) = expected_version {
            if expected != current {
                return Err(StoreError::Conflict {
                    id: id.to_string(),
                    expected,
                    actual: current,
                });
            }
        }

        let data = patch(&entry.record);
        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        entry.record = Record {
            id: entry.record.id.clone(),
            version: current + 1,
            data,
        };
        tracing::debug!(id, version = current + 1, "record updated");
        Ok(entry.record.clone())
    }
}

#[async_trait::async_trait]
impl<T> ResourceStore<T> for InMemoryResourceStore<T>
where
    T: SortableFields + Clone + Send + Sync + 'static,
{
    async fn create(&self, data: T) -> Result<Record<T>, StoreError> {
        self.ensure_online()?;
        let sequence = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = Record {
            id: sequence.to_string(),
            version: 1,
            data,
        };
        self.records.write().await.insert(
            record.id.clone(),
            Entry {
                sequence,
                record: record.clone(),
            },
        );
        tracing::debug!(id = %record.id, "record created");
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Record<T>, StoreError> {
        self.ensure_online()?;
        self.records
            .read()
            .await
            .get(id)
            .map(|entry| entry.record.clone())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self, request: &PageRequest) -> Result<Page<T>, StoreError> {
        self.ensure_online()?;
        let mut entries: Vec<(u64, Record<T>)> = {
            let guard = self.records.read().await;
            guard
                .values()
                .map(|entry| (entry.sequence, entry.record.clone()))
                .collect()
        };
        entries.sort_by_key(|(sequence, _)| *sequence);

        let mut records: Vec<Record<T>> = entries.into_iter().map(|(_, r)| r).collect();
        order_records(&mut records, request.order_by.as_ref());
        paginate(records, request)
    }

    async fn update(&self, id: &str, patch: Patch<T>) -> Result<Record<T>, StoreError> {
        self.apply_patch(id, None, patch).await
    }

    async fn update_if_version(
        &self,
        id: &str,
        expected_version: u64,
        patch: Patch<T>,
    ) -> Result<Record<T>, StoreError> {
        self.apply_patch(id, Some(expected_version), patch).await
    }

    async fn delete(&self, id: &str) -> Result<Record<T>, StoreError> {
        self.ensure_online()?;
        let removed = self
            .records
            .write()
            .await
            .remove(id)
            .map(|entry| entry.record)
            .ok_or_else(|| Self::not_found(id))?;
        tracing::debug!(id, "record deleted");
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.len())
    }
}
