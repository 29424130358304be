// Shared test fixtures for book payloads and stored books.

use crate::modules::books::core::book::{Book, NewBook};

const NEW_BOOK_JSON: &str = include_str!("json/new_book.json");

pub struct NewBookBuilder {
    inner: NewBook,
}

impl Default for NewBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewBookBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(NEW_BOOK_JSON).unwrap(),
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn build(self) -> NewBook {
        self.inner
    }
}

pub fn make_book(id: &str, version: u64) -> Book {
    Book {
        id: id.to_string(),
        version,
        data: NewBookBuilder::new().build(),
    }
}

#[cfg(test)]
mod new_book_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewBookBuilder::default().build();
        assert_eq!(built.title, "Rust for Rustaceans");
        assert_eq!(built.author, "Jon Gjengset");
        assert_eq!(built.year, 2021);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = NewBookBuilder::new()
            .title("Dune")
            .author("Frank Herbert")
            .year(1965)
            .build();
        assert_eq!(built.title, "Dune");
        assert_eq!(built.author, "Frank Herbert");
        assert_eq!(built.year, 1965);
    }
}
