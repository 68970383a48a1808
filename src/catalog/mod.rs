//! # Product Catalog
//!
//! An immutable, insertion-ordered mapping from a primary key (WSN) to a
//! [`ProductRecord`]. The catalog is built once and then passed by reference
//! to lookup and rendering; nothing mutates it afterwards.
//!
//! ## Sources
//!
//! | Constructor | Input |
//! |-------------|-------|
//! | [`Catalog::sample`] | The five built-in reference products |
//! | [`Catalog::from_json_str`] / [`Catalog::load`] | JSON object keyed by WSN, or an array of rows |
//! | [`Catalog::from_entries`] | Any iterator of `(key, record)` pairs |
//!
//! ## Example
//!
//! ```
//! use pricetag::catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! let product = catalog.resolve("wsn001").unwrap();
//! assert_eq!(product.record.wid, "XIFKJOQ");
//! ```

pub mod lookup;

pub use lookup::MAX_SUGGESTIONS;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::PricetagError;

/// One product as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Free-form alphanumeric secondary code
    #[serde(alias = "WID")]
    pub wid: String,
    /// 16-character product identifier (drawn under the bar pattern)
    #[serde(alias = "FSN")]
    pub fsn: String,
    #[serde(alias = "ProductTitle")]
    pub title: String,
    /// List price
    #[serde(alias = "MRP")]
    pub mrp: u32,
    /// Sale price, expected (not enforced) to be <= `mrp`
    #[serde(alias = "FSP")]
    pub fsp: u32,
    /// Category tag
    #[serde(alias = "Vertical")]
    pub vertical: String,
    #[serde(alias = "Brand")]
    pub brand: String,
}

/// A record joined with its primary key. This is what the renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProduct {
    pub wsn: String,
    #[serde(flatten)]
    pub record: ProductRecord,
}

/// Array-form catalog row: `{ "wsn": "...", ...record fields }`.
#[derive(Deserialize)]
struct CatalogRow {
    #[serde(alias = "WSN")]
    wsn: String,
    #[serde(flatten)]
    record: ProductRecord,
}

/// Immutable product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, ProductRecord)>,
    /// Upper-cased key → index into `entries`
    by_key: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from `(key, record)` pairs, keeping their order.
    ///
    /// Keys must be unique ignoring letter case, since lookup by key is
    /// case-insensitive.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, PricetagError>
    where
        I: IntoIterator<Item = (K, ProductRecord)>,
        K: Into<String>,
    {
        let mut catalog = Catalog::default();
        for (key, record) in entries {
            let key = key.into();
            let folded = key.to_uppercase();
            if catalog.by_key.contains_key(&folded) {
                return Err(PricetagError::Catalog(format!("duplicate key '{}'", key)));
            }
            catalog.by_key.insert(folded, catalog.entries.len());
            catalog.entries.push((key, record));
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    ///
    /// Accepts either an object keyed by WSN (entry order is kept) or an
    /// array of rows carrying a `wsn` field. Field names may use either the
    /// snake_case form or the original spreadsheet headers (`WID`,
    /// `ProductTitle`, ...).
    pub fn from_json_str(json: &str) -> Result<Self, PricetagError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| PricetagError::Catalog(format!("invalid JSON: {}", e)))?;

        match value {
            serde_json::Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, raw) in map {
                    let record: ProductRecord = serde_json::from_value(raw)
                        .map_err(|e| PricetagError::Catalog(format!("entry '{}': {}", key, e)))?;
                    entries.push((key, record));
                }
                Self::from_entries(entries)
            }
            serde_json::Value::Array(_) => {
                let rows: Vec<CatalogRow> = serde_json::from_value(value)
                    .map_err(|e| PricetagError::Catalog(format!("invalid row: {}", e)))?;
                Self::from_entries(rows.into_iter().map(|row| (row.wsn, row.record)))
            }
            _ => Err(PricetagError::Catalog(
                "expected a JSON object or array at the top level".to_string(),
            )),
        }
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PricetagError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The five reference products.
    pub fn sample() -> Self {
        let rows = [
            ("WSN001", "XIFKJOQ", "BLBF5JCWCST3FVGY", "EVEREADY 10 W Round B22 LED Bulb", 199, 119, "bulb", "EVEREADY"),
            ("WSN002", "XI4DS29", "BLBDYGA8BFAHFZFU", "EVEREADY 7 W Standard B22 LED Bulb", 449, 426, "bulb", "EVEREADY"),
            ("WSN003", "XIDPT7X", "BLBGGZRM4S62HPNK", "Gold Medal 9 W Standard B22 LED Bulb", 168, 149, "bulb", "Gold Medal"),
            ("WSN004", "XI42BUN", "BLBEFYBHZFSEKZG8", "Syska Led Lights 9 W Standard B22 LED Bulb", 359, 180, "bulb", "Syska Led Lights"),
            ("WSN005", "XIDJ65V", "ACCGH4GACGHGZ3FX", "Flipkart SmartBuy Back Cover for Oppo K10", 399, 249, "cases_covers", "Flipkart SmartBuy"),
        ];

        let entries = rows.into_iter().map(|(wsn, wid, fsn, title, mrp, fsp, vertical, brand)| {
            (
                wsn,
                ProductRecord {
                    wid: wid.to_string(),
                    fsn: fsn.to_string(),
                    title: title.to_string(),
                    mrp,
                    fsp,
                    vertical: vertical.to_string(),
                    brand: brand.to_string(),
                },
            )
        });
        // The sample keys are distinct, so construction cannot fail.
        Self::from_entries(entries).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Exact key lookup, ignoring letter case.
    pub fn get(&self, key: &str) -> Option<ResolvedProduct> {
        self.by_key
            .get(&key.to_uppercase())
            .map(|&idx| self.resolved_at(idx))
    }

    fn resolved_at(&self, idx: usize) -> ResolvedProduct {
        let (wsn, record) = &self.entries[idx];
        ResolvedProduct {
            wsn: wsn.clone(),
            record: record.clone(),
        }
    }
}
