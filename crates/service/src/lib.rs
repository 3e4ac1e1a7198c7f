pub mod catalog;
pub mod errors;
pub mod projects;

pub use catalog::ProductCatalog;
pub use projects::ProjectStore;
