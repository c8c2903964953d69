//! Pagination types for the list endpoint.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::config::PAGINATION_DISABLED;

/// Raw `pageNum`/`pageSize` query parameters.
///
/// Kept as strings so that a malformed value disables pagination instead of
/// failing the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-indexed page number
    pub page_num: Option<String>,
    /// Number of records per page
    pub page_size: Option<String>,
}

impl PageQuery {
    /// Resolve the raw parameters into a page request.
    pub fn resolve(&self) -> PageRequest {
        PageRequest::new(
            parse_positive(self.page_num.as_deref()),
            parse_positive(self.page_size.as_deref()),
        )
    }
}

/// Missing, unparsable, zero and negative values all mean "disabled".
///
/// Values past `i64::MAX` do not parse, so every enabled value also fits the
/// signed integers SQL `LIMIT`/`OFFSET` are bound as.
fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
}

/// Resolved pagination for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRequest {
    /// Every row from the start, no limit
    #[default]
    All,
    /// A 1-indexed page of `size` rows
    Page { num: i64, size: i64 },
}

impl PageRequest {
    /// Pagination applies only when both values are enabled.
    pub fn new(page_num: Option<i64>, page_size: Option<i64>) -> Self {
        match (page_num, page_size) {
            (Some(num), Some(size)) => PageRequest::Page { num, size },
            _ => PageRequest::All,
        }
    }

    /// Calculate offset for database query, capped at `i64::MAX`
    pub fn offset(&self) -> Option<u64> {
        match self {
            PageRequest::All => None,
            PageRequest::Page { num, size } => Some(
                (num - 1)
                    .checked_mul(*size)
                    .unwrap_or(i64::MAX)
                    .unsigned_abs(),
            ),
        }
    }

    /// Row limit for database query
    pub fn limit(&self) -> Option<u64> {
        match self {
            PageRequest::All => None,
            PageRequest::Page { size, .. } => Some(size.unsigned_abs()),
        }
    }

    /// Page number as echoed back to the client
    pub fn page_num(&self) -> i64 {
        match self {
            PageRequest::All => PAGINATION_DISABLED,
            PageRequest::Page { num, .. } => *num,
        }
    }

    /// Page size as echoed back to the client
    pub fn page_size(&self) -> i64 {
        match self {
            PageRequest::All => PAGINATION_DISABLED,
            PageRequest::Page { size, .. } => *size,
        }
    }
}

/// Paginated list payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub list: Vec<T>,
    /// Count of all active rows, independent of pagination
    pub total: u64,
    pub page_num: i64,
    pub page_size: i64,
}

impl<T> Paginated<T> {
    /// Create new paginated payload echoing the applied page request
    pub fn new(list: Vec<T>, total: u64, page: PageRequest) -> Self {
        Self {
            list,
            total,
            page_num: page.page_num(),
            page_size: page.page_size(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(num: Option<&str>, size: Option<&str>) -> PageRequest {
        PageQuery {
            page_num: num.map(String::from),
            page_size: size.map(String::from),
        }
        .resolve()
    }

    #[test]
    fn test_second_page_offset() {
        let page = query(Some("2"), Some("10"));
        assert_eq!(page, PageRequest::Page { num: 2, size: 10 });
        assert_eq!(page.offset(), Some(10));
        assert_eq!(page.limit(), Some(10));
    }

    #[test]
    fn test_first_page_starts_at_zero() {
        assert_eq!(query(Some("1"), Some("2")).offset(), Some(0));
    }

    #[test]
    fn test_missing_params_disable_pagination() {
        let page = query(None, None);
        assert_eq!(page, PageRequest::All);
        assert_eq!(page.offset(), None);
        assert_eq!(page.limit(), None);
        assert_eq!(page.page_num(), -1);
        assert_eq!(page.page_size(), -1);
    }

    #[test]
    fn test_one_disabled_param_disables_both() {
        assert_eq!(query(Some("3"), None), PageRequest::All);
        assert_eq!(query(None, Some("5")), PageRequest::All);
        assert_eq!(query(Some("0"), Some("5")), PageRequest::All);
        assert_eq!(query(Some("2"), Some("abc")), PageRequest::All);
        assert_eq!(query(Some("-1"), Some("5")), PageRequest::All);
    }

    #[test]
    fn test_offset_is_capped_at_i64_max() {
        let page = query(Some("4611686018427387904"), Some("4"));
        assert_eq!(page.offset(), Some(i64::MAX as u64));
        assert_eq!(page.limit(), Some(4));

        let page = PageRequest::new(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(page.offset(), Some(i64::MAX as u64));
    }

    #[test]
    fn test_values_beyond_i64_disable_pagination() {
        assert_eq!(query(Some("1"), Some("9223372036854775808")), PageRequest::All);
        assert_eq!(
            query(Some("1"), Some("9223372036854775807")),
            PageRequest::Page { num: 1, size: i64::MAX }
        );
    }

    #[test]
    fn test_paginated_echoes_resolved_values() {
        let payload = Paginated::new(vec![1, 2], 7, PageRequest::Page { num: 2, size: 2 });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["pageNum"], 2);
        assert_eq!(json["pageSize"], 2);
        assert_eq!(json["total"], 7);
        assert_eq!(json["list"], serde_json::json!([1, 2]));
    }
}
