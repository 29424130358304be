// End to end in memory tests for the book resource store.
//
// Covers the store contract as a routing layer sees it: id allocation,
// versioning, paging, ordering and concurrent updates.

use bookstore::modules::books::core::book::NewBook;
use bookstore::modules::books::core::book_patch::BookPatch;
use bookstore::modules::books::use_cases::book_handler::BookHandler;
use bookstore::shared::core::primitives::{EMPTY_PAGE_TOKEN, OrderBy, PageRequest};
use bookstore::shared::infrastructure::resource_store::in_memory::InMemoryResourceStore;
use bookstore::shared::infrastructure::resource_store::{ResourceStore, StoreError};
use rstest::{fixture, rstest};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::join;

type Store = InMemoryResourceStore<NewBook>;

fn book(title: &str, year: i32) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Anonymous".to_string(),
        year,
    }
}

fn year_patch(year: i32) -> BookPatch {
    BookPatch {
        year: Some(year),
        ..BookPatch::default()
    }
}

#[fixture]
fn store() -> Arc<Store> {
    Arc::new(Store::new())
}

#[rstest]
#[tokio::test]
async fn ids_are_never_reused_across_creates_and_deletes(store: Arc<Store>) {
    let mut seen = HashSet::new();
    for i in 0..20 {
        let record = store.create(book("t", i)).await.unwrap();
        assert_eq!(record.version, 1);
        assert!(seen.insert(record.id.clone()), "id {} reused", record.id);
        if i % 3 == 0 {
            store.delete(&record.id).await.unwrap();
        }
    }
}

#[rstest]
#[tokio::test]
async fn update_increments_the_version_by_one_and_keeps_the_id(store: Arc<Store>) {
    let handler = BookHandler::new(store.clone());
    let created = handler.create_book(book("t", 2000)).await.unwrap();
    let mut previous = created.clone();
    for year in 2001..2006 {
        let updated = handler.update_book(&created.id, year_patch(year)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.version, previous.version + 1);
        previous = updated;
    }
    assert_eq!(previous.version, 6);
}

#[rstest]
#[tokio::test]
async fn operations_on_a_missing_id_fail_with_not_found(store: Arc<Store>) {
    let handler = BookHandler::new(store);
    assert!(matches!(
        handler.get_book("missing").await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        handler.delete_book("missing").await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        handler.update_book("missing", year_patch(1)).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[rstest]
#[tokio::test]
async fn five_items_in_pages_of_two_span_three_pages(store: Arc<Store>) {
    for i in 0..5 {
        store.create(book("t", 2000 + i)).await.unwrap();
    }

    let mut request = PageRequest::first(2);
    let mut sizes = Vec::new();
    loop {
        let page = store.list(&request).await.unwrap();
        if page.items.is_empty() {
            assert_eq!(page.next_page_token, EMPTY_PAGE_TOKEN);
            break;
        }
        sizes.push(page.items.len());
        request = request.with_token(page.next_page_token);
    }
    assert_eq!(sizes, vec![2, 2, 1]);

    let fourth = store
        .list(&PageRequest::first(2).with_token("3"))
        .await
        .unwrap();
    assert!(fourth.items.is_empty());
    assert_eq!(fourth.next_page_token, EMPTY_PAGE_TOKEN);
}

#[rstest]
#[tokio::test]
async fn ordering_by_an_unknown_field_keeps_insertion_order(store: Arc<Store>) {
    for title in ["c", "a", "b"] {
        store.create(book(title, 2000)).await.unwrap();
    }
    let page = store
        .list(&PageRequest::first(10).ordered_by(OrderBy::descending("publisher")))
        .await
        .unwrap();
    let titles: Vec<&str> = page.items.iter().map(|r| r.data.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[rstest]
#[case(OrderBy::ascending("year"), vec![2019, 2020, 2021])]
#[case(OrderBy::descending("year"), vec![2021, 2020, 2019])]
#[tokio::test]
async fn books_order_by_year(
    store: Arc<Store>,
    #[case] order_by: OrderBy,
    #[case] expected: Vec<i32>,
) {
    for year in [2020, 2019, 2021] {
        store.create(book("t", year)).await.unwrap();
    }
    let page = store
        .list(&PageRequest::first(10).ordered_by(order_by))
        .await
        .unwrap();
    let years: Vec<i32> = page.items.iter().map(|r| r.data.year).collect();
    assert_eq!(years, expected);
}

#[rstest]
#[tokio::test]
async fn concurrent_updates_never_skip_a_version(store: Arc<Store>) {
    let handler = Arc::new(BookHandler::new(store.clone()));
    let created = handler.create_book(book("t", 2000)).await.unwrap();
    store.set_delay_update_ms(10);

    let (first, second) = join!(
        handler.update_book(&created.id, year_patch(2001)),
        handler.update_book(&created.id, year_patch(2002))
    );
    let first = first.unwrap();
    let second = second.unwrap();

    let stored = handler.get_book(&created.id).await.unwrap();
    assert_eq!(stored.version, created.version + 2);
    let last = if first.version > second.version {
        first
    } else {
        second
    };
    assert_eq!(stored, last);
    assert!(stored.data.year == 2001 || stored.data.year == 2002);
}

#[rstest]
#[tokio::test]
async fn many_concurrent_updates_leave_a_gapless_version_history(store: Arc<Store>) {
    let created = store.create(book("t", 2000)).await.unwrap();

    let mut tasks = Vec::new();
    for year in 0..16 {
        let store = store.clone();
        let id = created.id.clone();
        tasks.push(tokio::spawn(async move {
            store
                .update(&id, year_patch(year).into_merge())
                .await
                .map(|r| r.version)
        }));
    }

    let mut versions = Vec::new();
    for task in tasks {
        versions.push(task.await.unwrap().unwrap());
    }
    versions.sort();
    assert_eq!(versions, (2..=17).collect::<Vec<u64>>());
    assert_eq!(store.get(&created.id).await.unwrap().version, 17);
}
