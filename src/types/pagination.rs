use std::collections::HashMap;

/// Number of questions served per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Extract the 1-based page index from the query parameters of a request.
///
/// # Example query
/// GET requests against the question listing routes can ask for a specific
/// page of the result set:
/// `/api/questions?page=2`
///
/// Missing, non-numeric, and zero values all fall back to the first page
/// instead of failing the request.
pub fn extract_page(params: &HashMap<String, String>) -> u32 {
    params
        .get("page")
        .and_then(|page| page.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Cut one page out of the full result set.
/// The window is `[(page - 1) * page_size, page * page_size)`, clipped to the
/// input; a page past the end yields an empty vector, not an error.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: usize) -> Vec<T> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size);

    items.into_iter().skip(start).take(page_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: &str) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("page".to_string(), page.to_string());
        params
    }

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(extract_page(&HashMap::new()), 1);
    }

    #[test]
    fn non_numeric_page_defaults_to_first() {
        assert_eq!(extract_page(&params("abc")), 1);
        assert_eq!(extract_page(&params("-3")), 1);
        assert_eq!(extract_page(&params("")), 1);
    }

    #[test]
    fn zero_page_defaults_to_first() {
        assert_eq!(extract_page(&params("0")), 1);
    }

    #[test]
    fn numeric_page_is_used() {
        assert_eq!(extract_page(&params("3")), 3);
    }

    #[test]
    fn returns_the_requested_window() {
        let items: Vec<i32> = (1..=25).collect();

        assert_eq!(paginate(items.clone(), 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), 2, 10), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(items, 3, 10), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn never_returns_more_than_page_size() {
        let items: Vec<i32> = (1..=100).collect();
        assert_eq!(paginate(items, 4, 7).len(), 7);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        assert_eq!(paginate(items, 9, 10), Vec::<i32>::new());
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(paginate(Vec::<i32>::new(), 1, 10), Vec::<i32>::new());
    }
}
