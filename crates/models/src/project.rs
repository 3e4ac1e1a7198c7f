use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A portfolio project persisted in the projects JSON file.
///
/// Only `id` and `likes` are interpreted; everything else on a record
/// (title, description, links, ...) is carried opaquely so a rewrite of the
/// file never drops fields this service does not know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preserves_unknown_fields_across_rewrite() {
        let raw = json!({
            "id": "weather-app",
            "likes": 3,
            "title": "Weather App",
            "tags": ["rust", "wasm"]
        });
        let project: Project = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(project.id, "weather-app");
        assert_eq!(project.likes, 3);
        assert_eq!(serde_json::to_value(&project).unwrap(), raw);
    }

    #[test]
    fn likes_defaults_to_zero() {
        let project: Project = serde_json::from_value(json!({"id": "p1"})).unwrap();
        assert_eq!(project.likes, 0);
    }
}
