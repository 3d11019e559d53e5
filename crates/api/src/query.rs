//! Shared query parameter types for API handlers.

use serde::Deserialize;
use validator::Validate;

/// Inbox listing parameters (`?unread_only=&limit=&offset=`).
///
/// `limit` and `offset` are clamped in the handler via `clamp_limit` /
/// `clamp_offset`.
#[derive(Debug, Deserialize, Validate)]
pub struct MessageListParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Public project listing filter (`?category=`). `all` or an empty value
/// means no filter.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryParams {
    #[validate(length(max = 50))]
    pub category: Option<String>,
}

/// Body for the `/reorder` endpoints: ids in their new display order.
///
/// The list must name every row the caller wants moved; ids it omits keep
/// their current `sort_order`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReorderRequest {
    #[validate(length(min = 1, max = 1000))]
    pub ids: Vec<folio_core::types::DbId>,
}
