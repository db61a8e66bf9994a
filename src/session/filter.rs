use crate::models::Product;

/// Products from `page` whose name contains `query`, ignoring case.
///
/// An empty query returns the whole page. Only the page passed in is searched.
pub fn filter_by_name(page: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return page.to_vec();
    }
    let needle = query.to_uppercase();
    page.iter()
        .filter(|p| p.name.to_uppercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;

    fn page() -> Vec<Product> {
        vec![
            Product::new(ProductId::Number(1), "Arroz"),
            Product::new(ProductId::Number(2), "Feijão"),
        ]
    }

    #[test]
    fn matches_regardless_of_case() {
        for query in ["ar", "AR", "aR"] {
            let hits = filter_by_name(&page(), query);
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].name, "Arroz");
        }
    }

    #[test]
    fn matches_non_ascii_names() {
        for query in ["jão", "JÃO"] {
            let hits = filter_by_name(&page(), query);
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].name, "Feijão");
        }
    }

    #[test]
    fn empty_query_returns_whole_page() {
        assert_eq!(filter_by_name(&page(), ""), page());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_by_name(&page(), "macarrão").is_empty());
    }
}
