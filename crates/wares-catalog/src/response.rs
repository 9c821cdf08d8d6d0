//! Wire format for the catalog API
//!
//! The endpoint returns a JSON envelope with the product array under a
//! `products` field plus paging metadata we don't act on:
//!
//! ```json
//! { "products": [ ... ], "total": 100, "skip": 0, "limit": 30 }
//! ```

use serde::Deserialize;
use wares_core::prelude::*;
use wares_core::{Product, FETCH_FAILED_MSG, MAX_PRODUCTS};

/// The catalog response envelope.
///
/// Paging fields are decoded for logging but never drive behavior; the app
/// always takes the first page and caps it at [`MAX_PRODUCTS`].
#[derive(Debug, Deserialize)]
pub(crate) struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Decode a catalog response body and apply the display cap.
///
/// A malformed body or a missing `products` field maps to the single
/// user-facing fetch error; the decode detail is logged only. Order is
/// preserved as returned by the server -- no re-sorting.
pub fn decode_products(body: &str) -> Result<Vec<Product>> {
    let response: ProductsResponse = serde_json::from_str(body).map_err(|err| {
        warn!("failed to decode catalog response: {err}");
        Error::fetch(FETCH_FAILED_MSG)
    })?;

    if let Some(total) = response.total {
        debug!(
            "catalog returned {} products (total advertised: {total})",
            response.products.len()
        );
    }

    let mut products = response.products;
    products.truncate(MAX_PRODUCTS);
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with_n_products(n: usize) -> String {
        let items: Vec<String> = (1..=n)
            .map(|i| format!(r#"{{"id": {i}, "title": "Product {i}", "price": {i}.5}}"#))
            .collect();
        format!(
            r#"{{"products": [{}], "total": {n}, "skip": 0, "limit": {n}}}"#,
            items.join(",")
        )
    }

    #[test]
    fn test_decode_preserves_server_order() {
        let products = decode_products(&body_with_n_products(5)).unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_decode_truncates_to_cap() {
        // 25 items in -> exactly 20 out, in original server order
        let products = decode_products(&body_with_n_products(25)).unwrap();
        assert_eq!(products.len(), MAX_PRODUCTS);
        assert_eq!(products.first().unwrap().id, 1);
        assert_eq!(products.last().unwrap().id, 20);
    }

    #[test]
    fn test_decode_short_batch_is_kept_whole() {
        let products = decode_products(&body_with_n_products(3)).unwrap();
        assert_eq!(products.len(), 3);
    }

    #[test]
    fn test_decode_empty_product_array() {
        let products = decode_products(r#"{"products": []}"#).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_decode_missing_products_field_is_fetch_error() {
        let err = decode_products(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
        assert_eq!(err.user_message(), FETCH_FAILED_MSG);
    }

    #[test]
    fn test_decode_malformed_json_is_fetch_error() {
        let err = decode_products("not json at all").unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
