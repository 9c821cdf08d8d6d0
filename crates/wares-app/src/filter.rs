//! Search filtering for the product list.
//!
//! A pure view over the store: no stored state, recomputed on every render
//! from the current collection and query.

use wares_core::Product;

/// Filter products by case-insensitive substring match against the title.
///
/// An empty query returns the full collection unchanged. Order is always
/// the store's order; matching never re-ranks.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price: 0.0,
            brand: None,
            category: None,
            thumbnail: None,
            rating: None,
            stock: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "iPhone 9"),
            product(2, "Galaxy S9"),
            product(3, "Phone Case"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let products = sample();
        let visible = filter_products(&products, "");
        assert_eq!(visible.len(), 3);
        let ids: Vec<u64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let products = sample();
        let visible = filter_products(&products, "phone");
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["iPhone 9", "Phone Case"]);
    }

    #[test]
    fn test_uppercase_query_matches_too() {
        let products = sample();
        let visible = filter_products(&products, "PHONE");
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let products = sample();
        assert!(filter_products(&products, "laptop").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = sample();
        let first = filter_products(&products, "galaxy");
        let second = filter_products(&products, "galaxy");
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, 2);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let products = sample();
        let _ = filter_products(&products, "9");
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].title, "iPhone 9");
    }
}
