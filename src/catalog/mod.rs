pub mod loader;
pub mod source;
pub mod types;

pub use loader::spawn_catalog_loads;
pub use source::{CatalogError, CatalogSource, JsonFileSource};
pub use types::{Exercise, Lesson, LessonLevel, Position, Scale};
