//! Item id path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ItemError;
use crate::validation::{INVALID_ID, parse_item_id};

/// Extractor for the `{id}` path segment.
///
/// Rejects anything that is not a base-10 integer with
/// `Validation("Invalid item ID")`, before any store lookup happens.
///
/// # Example
/// ```ignore
/// async fn get_item(ItemId(id): ItemId) -> String {
///     format!("Item ID: {}", id)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ItemError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ItemError::Validation(INVALID_ID.to_string()))?;

        parse_item_id(&raw).map(ItemId)
    }
}
