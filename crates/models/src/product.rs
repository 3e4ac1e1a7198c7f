use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog product. Loaded once from the bundled catalog and never written
/// back; `id` and `specialty` are the only fields the query service reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub specialty: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
