use crate::shared::core::primitives::{Record, SortableFields};
use crate::shared::infrastructure::resource_store::StoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub type Book = Record<NewBook>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl NewBook {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::InvalidInput("title must not be blank".into()));
        }
        if self.author.trim().is_empty() {
            return Err(StoreError::InvalidInput("author must not be blank".into()));
        }
        Ok(())
    }
}

impl SortableFields for NewBook {
    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "title" => Some(self.title.cmp(&other.title)),
            "author" => Some(self.author.cmp(&other.author)),
            "year" => Some(self.year.cmp(&other.year)),
            _ => None,
        }
    }
}
