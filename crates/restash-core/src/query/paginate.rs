//! Pagination over an ordered, filtered collection.

use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::record::Record;

/// One page of a list query, with envelope metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    /// The records on this page.
    pub data: Vec<Record>,
    /// Size of the full filtered collection, before slicing.
    pub total: u64,
    /// Page number, 1-indexed.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
    /// `ceil(total / per_page)`.
    pub total_pages: u32,
}

/// Slice an ordered, filtered collection into one page.
///
/// The slice is `[(page-1)*per_page, page*per_page)`. Requesting a page
/// beyond the end yields empty `data` with `total` and `total_pages`
/// still reflecting the full collection; it is not an error.
pub fn paginate(records: Vec<Record>, pagination: &Pagination) -> ListResult {
    let total = records.len() as u64;
    let per_page = pagination.per_page.max(1);
    let page = pagination.page.max(1);
    let total_pages = total.div_ceil(per_page as u64) as u32;

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let data: Vec<Record> = records
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    ListResult {
        data,
        total,
        page,
        per_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: u64) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new(json!({"id": i})).unwrap())
            .collect()
    }

    fn window(page: u32, per_page: u32) -> Pagination {
        Pagination { page, per_page }
    }

    #[test]
    fn first_page_of_three() {
        let result = paginate(records(3), &window(1, 2));
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn last_partial_page() {
        let result = paginate(records(5), &window(3, 2));
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].id().to_string(), "5");
    }

    #[test]
    fn beyond_last_page_is_empty_not_error() {
        let result = paginate(records(3), &window(9, 2));
        assert!(result.data.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn empty_collection() {
        let result = paginate(Vec::new(), &window(1, 10));
        assert!(result.data.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn page_length_never_exceeds_per_page() {
        for page in 1..5 {
            for per_page in 1..5 {
                let result = paginate(records(7), &window(page, per_page));
                assert!(result.data.len() as u32 <= per_page);
                assert_eq!(result.total_pages, 7u32.div_ceil(per_page));
            }
        }
    }
}
