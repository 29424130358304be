use crate::modules::books::core::book::{Book, NewBook};
use crate::modules::books::core::book_patch::BookPatch;
use crate::shared::core::primitives::{Page, PageRequest};
use crate::shared::infrastructure::resource_store::{ResourceStore, StoreError};
use std::sync::Arc;

/// Book operations on top of a resource store: validates payloads, picks
/// plain or version-checked updates, and logs the outcome.
pub struct BookHandler<TStore>
where
    TStore: ResourceStore<NewBook> + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> BookHandler<TStore>
where
    TStore: ResourceStore<NewBook> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list_books(&self, request: &PageRequest) -> Result<Page<NewBook>, StoreError> {
        let page = self.store.list(request).await?;
        tracing::debug!(
            count = page.items.len(),
            next_page_token = %page.next_page_token,
            "listed books"
        );
        Ok(page)
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, StoreError> {
        self.store.get(id).await
    }

    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, StoreError> {
        new_book.validate()?;
        let book = self.store.create(new_book).await?;
        tracing::info!(book_id = %book.id, "book created");
        Ok(book)
    }

    pub async fn update_book(&self, id: &str, patch: BookPatch) -> Result<Book, StoreError> {
        patch.validate()?;
        let expected_version = patch.sync_token;
        let result = match expected_version {
            Some(expected) => {
                self.store
                    .update_if_version(id, expected, patch.into_merge())
                    .await
            }
            None => self.store.update(id, patch.into_merge()).await,
        };
        match &result {
            Ok(book) => tracing::info!(book_id = %book.id, version = book.version, "book updated"),
            Err(StoreError::Conflict {
                expected, actual, ..
            }) => tracing::warn!(book_id = id, expected, actual, "stale book update rejected"),
            Err(_) => {}
        }
        result
    }

    pub async fn delete_book(&self, id: &str) -> Result<Book, StoreError> {
        let book = self.store.delete(id).await?;
        tracing::info!(book_id = %book.id, "book deleted");
        Ok(book)
    }

    pub async fn book_count(&self) -> Result<usize, StoreError> {
        self.store.count().await
    }
}
