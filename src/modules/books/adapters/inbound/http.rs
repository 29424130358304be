use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::books::core::book::{Book, NewBook};
use crate::modules::books::core::book_patch::BookPatch;
use crate::modules::books::core::service_type::{BOOK_SERVICE_TYPE, ServiceType};
use crate::shared::core::primitives::{OrderBy, OrderDirection, Page, PageRequest};
use crate::shared::infrastructure::resource_store::StoreError;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksParams {
    pub page_token: Option<String>,
    pub page_size: Option<u32>,
    pub order_by: Option<String>,
    pub direction: Option<OrderDirection>,
}

impl ListBooksParams {
    fn into_request(self, default_page_size: u32) -> PageRequest {
        let Self {
            page_token,
            page_size,
            order_by,
            direction,
        } = self;
        PageRequest {
            page_token,
            page_size: page_size.unwrap_or(default_page_size),
            order_by: order_by.map(|field| OrderBy {
                field,
                direction: direction.unwrap_or_default(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub book_id: String,
    pub sync_token: u64,
    #[serde(flatten)]
    pub data: NewBook,
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.id,
            sync_token: book.version,
            data: book.data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListView {
    pub next_page_token: String,
    pub items: Vec<BookView>,
}

impl From<Page<NewBook>> for BookListView {
    fn from(page: Page<NewBook>) -> Self {
        Self {
            next_page_token: page.next_page_token,
            items: page.items.into_iter().map(BookView::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            StoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            StoreError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            StoreError::Backend(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "book request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<BookListView>, StoreError> {
    let Query(params) = params.map_err(|e| StoreError::InvalidInput(e.body_text()))?;
    let request = params.into_request(state.default_page_size);
    let page = state.books.list_books(&request).await?;
    Ok(Json(page.into()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookView>, StoreError> {
    let book = state.books.get_book(&book_id).await?;
    Ok(Json(book.into()))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Response {
    let Json(new_book) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.books.create_book(new_book).await {
        Ok(book) => (StatusCode::CREATED, Json(BookView::from(book))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Result<Json<BookPatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.books.update_book(&book_id, patch).await {
        Ok(book) => Json(BookView::from(book)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookView>, StoreError> {
    let book = state.books.delete_book(&book_id).await?;
    Ok(Json(book.into()))
}

pub async fn service_type() -> Json<ServiceType> {
    Json(BOOK_SERVICE_TYPE)
}
