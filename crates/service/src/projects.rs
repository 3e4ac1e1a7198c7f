use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use models::Project;

use crate::errors::StoreError;

/// File-backed store for the projects collection.
///
/// The whole collection lives in one JSON array. Every operation re-reads
/// the file from disk and mutations rewrite it in full; there is no cache
/// and no lock, so two concurrent like increments can lose one update.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the full collection. A missing file is a read error,
    /// not an empty collection; records are seeded out-of-band.
    pub async fn read_all(&self) -> Result<Vec<Project>, StoreError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Read(e.to_string()))
    }

    /// Overwrite the file with the full collection, pretty-printed so the
    /// file stays hand-editable.
    async fn write_all(&self, projects: &[Project]) -> Result<(), StoreError> {
        let data =
            serde_json::to_vec_pretty(projects).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, data)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }

    /// Current collection, fresh from disk.
    pub async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.read_all().await
    }

    /// Increment the likes counter of the project whose id equals `id`
    /// exactly, persist the collection, and return the updated record.
    /// `Ok(None)` means no such project; the file is left untouched.
    pub async fn increment_likes(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let mut projects = self.read_all().await?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        project.likes += 1;
        let updated = project.clone();
        self.write_all(&projects).await?;
        debug!(project = %updated.id, likes = updated.likes, "likes persisted");
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    async fn seeded_store(seed: serde_json::Value) -> anyhow::Result<ProjectStore> {
        let tmp = std::env::temp_dir().join(format!("projects_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&seed)?).await?;
        Ok(ProjectStore::new(tmp))
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let store = ProjectStore::new(std::env::temp_dir().join(format!("absent_{}.json", Uuid::new_v4())));
        assert!(matches!(store.list().await, Err(StoreError::Read(_))));
    }

    #[tokio::test]
    async fn invalid_json_is_a_read_error() -> anyhow::Result<()> {
        let tmp = std::env::temp_dir().join(format!("projects_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, b"not json").await?;
        let store = ProjectStore::new(&tmp);
        assert!(matches!(store.list().await, Err(StoreError::Read(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn increment_bumps_by_one_and_persists() -> anyhow::Result<()> {
        let store = seeded_store(json!([
            {"id": "p1", "likes": 0, "title": "First"},
            {"id": "p2", "likes": 7}
        ]))
        .await?;

        let updated = store.increment_likes("p1").await?.unwrap();
        assert_eq!(updated.likes, 1);

        let updated = store.increment_likes("p1").await?.unwrap();
        assert_eq!(updated.likes, 2);

        // Reload through a fresh store: the write went to disk, and the
        // untouched record kept all its fields.
        let reloaded = ProjectStore::new(store.path.clone()).list().await?;
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].likes, 2);
        assert_eq!(reloaded[0].extra["title"], "First");
        assert_eq!(reloaded[1].likes, 7);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_leaves_file_unchanged() -> anyhow::Result<()> {
        let store = seeded_store(json!([{"id": "p1", "likes": 4}])).await?;
        let before = tokio::fs::read(&store.path).await?;

        assert!(store.increment_likes("nope").await?.is_none());

        let after = tokio::fs::read(&store.path).await?;
        assert_eq!(before, after);
        Ok(())
    }

    #[tokio::test]
    async fn id_match_is_exact() -> anyhow::Result<()> {
        let store = seeded_store(json!([{"id": "P1", "likes": 0}])).await?;
        assert!(store.increment_likes("p1").await?.is_none());
        assert!(store.increment_likes("P1").await?.is_some());
        Ok(())
    }
}
