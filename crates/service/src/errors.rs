use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Projects file missing, unreadable, or not valid JSON.
    #[error("failed to read projects file: {0}")]
    Read(String),
    /// Rewriting the projects file failed (disk full, permissions).
    #[error("failed to write projects file: {0}")]
    Write(String),
    /// The bundled product catalog did not parse. Fatal at startup.
    #[error("invalid product catalog: {0}")]
    Catalog(String),
}
