//! Page-window slicing for question listings.

/// Number of questions served per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice an ordered list into the window for a 1-based page.
///
/// A page past the end of the list yields an empty vec rather than an
/// error; page 0 is treated as page 1. Pure and idempotent.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_returns_at_most_page_size() {
        let items: Vec<i64> = (0..25).collect();
        for page in 1..=4 {
            assert!(paginate(&items, page, QUESTIONS_PER_PAGE).len() <= QUESTIONS_PER_PAGE);
        }
    }

    #[test]
    fn test_pages_concatenate_in_order() {
        let items: Vec<i64> = (0..25).collect();

        let mut collected = Vec::new();
        for page in 1..=3 {
            collected.extend(paginate(&items, page, QUESTIONS_PER_PAGE));
        }
        assert_eq!(collected, items);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<i64> = (0..5).collect();
        assert!(paginate(&items, 2, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 100, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_empty_input_is_empty_for_any_page() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 7, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_page_zero_is_treated_as_page_one() {
        let items: Vec<i64> = (0..15).collect();
        assert_eq!(
            paginate(&items, 0, QUESTIONS_PER_PAGE),
            paginate(&items, 1, QUESTIONS_PER_PAGE)
        );
    }

    #[test]
    fn test_partial_last_page() {
        let items: Vec<i64> = (0..13).collect();
        assert_eq!(paginate(&items, 2, QUESTIONS_PER_PAGE), vec![10, 11, 12]);
    }

    #[test]
    fn test_paginate_is_idempotent() {
        let items: Vec<i64> = (0..30).collect();
        let first = paginate(&items, 2, QUESTIONS_PER_PAGE);
        let second = paginate(&items, 2, QUESTIONS_PER_PAGE);
        assert_eq!(first, second);
    }
}
