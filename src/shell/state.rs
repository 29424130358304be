use crate::modules::books::core::book::NewBook;
use crate::modules::books::use_cases::book_handler::BookHandler;
use crate::shared::infrastructure::resource_store::in_memory::InMemoryResourceStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookHandler<InMemoryResourceStore<NewBook>>>,
    pub default_page_size: u32,
}

impl AppState {
    pub fn in_memory(default_page_size: u32) -> Self {
        let store = Arc::new(InMemoryResourceStore::<NewBook>::new());
        Self {
            books: Arc::new(BookHandler::new(store)),
            default_page_size,
        }
    }
}
