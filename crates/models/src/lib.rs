pub mod product;
pub mod project;

pub use product::Product;
pub use project::Project;
