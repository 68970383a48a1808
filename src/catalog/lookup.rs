//! Code resolution and autocomplete over a [`Catalog`].
//!
//! Both operations are case-insensitive and side-effect free. Callers are
//! expected to trim their input; see [`crate::session::normalize_query`].

use super::{Catalog, ResolvedProduct};
use crate::error::PricetagError;

/// Upper bound on the number of autocomplete candidates.
pub const MAX_SUGGESTIONS: usize = 5;

impl Catalog {
    /// Resolve a user-entered code to a single product.
    ///
    /// An exact primary-key match wins. Otherwise the first record in
    /// catalog order whose WID matches is returned.
    pub fn resolve(&self, code: &str) -> Result<ResolvedProduct, PricetagError> {
        if code.is_empty() {
            return Err(PricetagError::NotFound(String::new()));
        }

        if let Some(product) = self.get(code) {
            tracing::debug!(code, wsn = %product.wsn, "resolved by key");
            return Ok(product);
        }

        let folded = code.to_uppercase();
        let by_wid = self
            .entries
            .iter()
            .position(|(_, record)| record.wid.to_uppercase() == folded);

        match by_wid {
            Some(idx) => {
                let product = self.resolved_at(idx);
                tracing::debug!(code, wsn = %product.wsn, "resolved by wid");
                Ok(product)
            }
            None => {
                tracing::debug!(code, "no match");
                Err(PricetagError::NotFound(code.to_string()))
            }
        }
    }

    /// Autocomplete candidates for a partial query.
    ///
    /// A record matches when its key, WID or title contains the query.
    /// Results keep catalog order and are capped at [`MAX_SUGGESTIONS`].
    /// A blank query returns nothing. Vertical and brand are not searched.
    pub fn suggest(&self, query: &str) -> Vec<ResolvedProduct> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_uppercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, (key, record))| {
                key.to_uppercase().contains(&needle)
                    || record.wid.to_uppercase().contains(&needle)
                    || record.title.to_uppercase().contains(&needle)
            })
            .take(MAX_SUGGESTIONS)
            .map(|(idx, _)| self.resolved_at(idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductRecord;
    use pretty_assertions::assert_eq;

    fn product(wid: &str, title: &str) -> ProductRecord {
        ProductRecord {
            wid: wid.to_string(),
            fsn: "FSN0000000000000".to_string(),
            title: title.to_string(),
            mrp: 100,
            fsp: 90,
            vertical: "widget".to_string(),
            brand: "Acme".to_string(),
        }
    }

    fn keys(products: &[ResolvedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.wsn.as_str()).collect()
    }

    #[test]
    fn test_resolve_every_key() {
        let catalog = Catalog::sample();
        for (key, record) in catalog.iter() {
            let product = catalog.resolve(key).unwrap();
            assert_eq!(product.wsn, key);
            assert_eq!(&product.record, record);
        }
    }

    #[test]
    fn test_resolve_by_wid_any_case() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.resolve("xifkjoq").unwrap().wsn, "WSN001");
        assert_eq!(catalog.resolve("XIFKJOQ").unwrap().wsn, "WSN001");
        assert_eq!(catalog.resolve("xI4dS29").unwrap().wsn, "WSN002");
    }

    #[test]
    fn test_resolve_key_lowercase() {
        let catalog = Catalog::sample();
        let product = catalog.resolve("wsn001").unwrap();
        assert_eq!(product.wsn, "WSN001");
        assert_eq!(product.record.title, "EVEREADY 10 W Round B22 LED Bulb");
        assert_eq!(product.record.mrp, 199);
        assert_eq!(product.record.fsp, 119);
    }

    #[test]
    fn test_resolve_not_found() {
        let catalog = Catalog::sample();
        assert!(matches!(catalog.resolve(""), Err(PricetagError::NotFound(_))));
        assert!(matches!(
            catalog.resolve("NOPE_NOT_A_CODE"),
            Err(PricetagError::NotFound(code)) if code == "NOPE_NOT_A_CODE"
        ));
    }

    #[test]
    fn test_resolve_prefers_key_over_wid() {
        // "B" is both a key and another record's WID.
        let catalog = Catalog::from_entries([
            ("A", product("B", "first")),
            ("B", product("Z", "second")),
        ])
        .unwrap();
        assert_eq!(catalog.resolve("b").unwrap().record.title, "second");
    }

    #[test]
    fn test_resolve_duplicate_wid_returns_first() {
        let catalog = Catalog::from_entries([
            ("K1", product("SAME", "first")),
            ("K2", product("SAME", "second")),
        ])
        .unwrap();
        assert_eq!(catalog.resolve("same").unwrap().wsn, "K1");
    }

    #[test]
    fn test_suggest_blank_query() {
        let catalog = Catalog::sample();
        assert!(catalog.suggest("").is_empty());
        assert!(catalog.suggest("   ").is_empty());
    }

    #[test]
    fn test_suggest_caps_at_five() {
        let catalog = Catalog::sample();
        let all = catalog.suggest("WSN");
        assert_eq!(keys(&all), vec!["WSN001", "WSN002", "WSN003", "WSN004", "WSN005"]);

        let many = Catalog::from_entries(
            (0..12).map(|i| (format!("P{:02}", i), product(&format!("W{}", i), "Gadget"))),
        )
        .unwrap();
        let matches = many.suggest("gadget");
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
        assert_eq!(keys(&matches), vec!["P00", "P01", "P02", "P03", "P04"]);
    }

    #[test]
    fn test_suggest_matches_wid_and_title() {
        let catalog = Catalog::sample();
        assert_eq!(keys(&catalog.suggest("XID")), vec!["WSN003", "WSN005"]);
        assert_eq!(keys(&catalog.suggest("oppo")), vec!["WSN005"]);
        assert_eq!(keys(&catalog.suggest("GOLD MEDAL")), vec!["WSN003"]);
    }

    #[test]
    fn test_suggest_title_is_case_folded() {
        let catalog = Catalog::sample();
        assert_eq!(
            keys(&catalog.suggest("BULB")),
            vec!["WSN001", "WSN002", "WSN003", "WSN004"]
        );
    }

    #[test]
    fn test_suggest_ignores_vertical_and_brand_only_terms() {
        let catalog = Catalog::sample();
        // Only present in the vertical field.
        assert!(catalog.suggest("CASES_COVERS").is_empty());

        let catalog = Catalog::from_entries([("K1", product("W1", "Thing"))]).unwrap();
        // "ACME" is the brand, "WIDGET" the vertical.
        assert!(catalog.suggest("ACME").is_empty());
        assert!(catalog.suggest("WIDGET").is_empty());
    }
}
