// Building blocks shared by every resource store: the versioned record,
// page requests and page tokens, and field ordering.
//
// The page token is a zero-based page offset written as a decimal integer.
// No token means the first page. An exhausted listing answers with
// EMPTY_PAGE_TOKEN, and sending that sentinel back yields another empty page
// rather than starting over, so a client looping on the token terminates.

use crate::shared::infrastructure::resource_store::StoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const EMPTY_PAGE_TOKEN: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<T> {
    pub id: String,
    pub version: u64,
    pub data: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: OrderDirection,
}

impl OrderBy {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_token: Option<String>,
    pub page_size: u32,
    pub order_by: Option<OrderBy>,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self {
            page_token: None,
            page_size,
            order_by: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    pub fn ordered_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub next_page_token: String,
    pub items: Vec<Record<T>>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_page_token == EMPTY_PAGE_TOKEN
    }
}

/// Field-by-name comparison used by listings.
///
/// Returns `None` for a field the payload does not know; callers treat that
/// as "leave the order as it is".
pub trait SortableFields {
    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering>;
}

/// Returns the page offset, or `None` once the listing is exhausted.
pub fn decode_page_token(token: Option<&str>) -> Result<Option<u64>, StoreError> {
    match token {
        None => Ok(Some(0)),
        Some(t) if t == EMPTY_PAGE_TOKEN => Ok(None),
        Some(t) => t
            .parse::<u64>()
            .map(Some)
            .map_err(|_| StoreError::InvalidInput(format!("invalid page token: {t}"))),
    }
}

pub fn encode_page_token(offset: u64) -> String {
    offset.to_string()
}

/// Sorts records in place. The sort is stable, so ties and unknown fields
/// keep the incoming order.
pub fn order_records<T: SortableFields>(records: &mut [Record<T>], order_by: Option<&OrderBy>) {
    let Some(order_by) = order_by else {
        return;
    };
    records.sort_by(|a, b| {
        let ordering = a
            .data
            .compare_field(&b.data, &order_by.field)
            .unwrap_or(Ordering::Equal);
        match order_by.direction {
            OrderDirection::Ascending => ordering,
            OrderDirection::Descending => ordering.reverse(),
        }
    });
}

/// Slices already ordered records into the page the request points at.
pub fn paginate<T>(records: Vec<Record<T>>, request: &PageRequest) -> Result<Page<T>, StoreError> {
    if request.page_size == 0 {
        return Err(StoreError::InvalidInput(
            "page size must be positive".to_string(),
        ));
    }
    let Some(offset) = decode_page_token(request.page_token.as_deref())? else {
        return Ok(Page {
            next_page_token: EMPTY_PAGE_TOKEN.to_string(),
            items: Vec::new(),
        });
    };
    let size = request.page_size as usize;
    let start = usize::try_from(offset)
        .unwrap_or(usize::MAX)
        .saturating_mul(size);

    let items: Vec<Record<T>> = records.into_iter().skip(start).take(size).collect();
    let next_page_token = if items.is_empty() {
        EMPTY_PAGE_TOKEN.to_string()
    } else {
        encode_page_token(offset + 1)
    };

    Ok(Page {
        next_page_token,
        items,
    })
}
