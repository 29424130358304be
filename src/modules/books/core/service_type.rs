use serde::Serialize;

/// Identity of the API that groups the book operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceType {
    pub id: &'static str,
    pub version: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BOOK_SERVICE_TYPE: ServiceType = ServiceType {
    id: "bookstore",
    version: 1,
    title: "Bookstore API",
    description: "API for managing books in a bookstore",
};
