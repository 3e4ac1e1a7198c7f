use models::Product;

use crate::errors::StoreError;

/// Catalog bundled into the binary at compile time.
const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

/// In-memory product catalog, loaded once at startup and read-only after.
///
/// All queries answer from the cached collection in original catalog order;
/// nothing here ever touches the filesystem after `load`.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    items: Vec<Product>,
}

impl ProductCatalog {
    /// Parse the bundled catalog. An error here means the binary shipped with
    /// a broken data file and the process cannot serve product routes.
    pub fn load() -> Result<Self, StoreError> {
        let items: Vec<Product> =
            serde_json::from_str(BUNDLED_CATALOG).map_err(|e| StoreError::Catalog(e.to_string()))?;
        Ok(Self { items })
    }

    /// Build a catalog from an explicit item list.
    pub fn from_items(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// All products, optionally capped to the first `limit` entries.
    /// `None` (the caller's "absent, non-numeric, or non-positive" case)
    /// returns the full catalog.
    pub fn list(&self, limit: Option<usize>) -> &[Product] {
        match limit {
            Some(n) if n > 0 => &self.items[..n.min(self.items.len())],
            _ => &self.items,
        }
    }

    /// First product whose id matches.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// All products whose specialty matches, compared case-insensitively.
    pub fn by_specialty(&self, specialty: &str) -> Vec<&Product> {
        let wanted = specialty.to_lowercase();
        self.items
            .iter()
            .filter(|p| p.specialty.to_lowercase() == wanted)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
