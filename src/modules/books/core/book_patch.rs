// Partial update of a book. Only the fields present in the request are
// merged over the stored book; the rest are carried over.

use crate::modules::books::core::book::{Book, NewBook};
use crate::shared::infrastructure::resource_store::{Patch, StoreError};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    /// Version the caller last saw. When present the update is rejected if
    /// the stored book has moved on.
    pub sync_token: Option<u64>,
}

impl BookPatch {
    pub fn apply(&self, current: &Book) -> NewBook {
        let data = &current.data;
        NewBook {
            title: self.title.clone().unwrap_or_else(|| data.title.clone()),
            author: self.author.clone().unwrap_or_else(|| data.author.clone()),
            year: self.year.unwrap_or(data.year),
        }
    }

    /// Checks the fields that are supplied; absent fields are always valid.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(StoreError::InvalidInput("title must not be blank".into()));
        }
        if self.author.as_deref().is_some_and(|a| a.trim().is_empty()) {
            return Err(StoreError::InvalidInput("author must not be blank".into()));
        }
        Ok(())
    }

    pub fn into_merge(self) -> Patch<NewBook> {
        Box::new(move |current: &Book| self.apply(current))
    }
}
