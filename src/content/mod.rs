pub mod model;
pub mod repository;

pub use model::{Content, ContentPatch, NewContent, ValidationErrors};
pub use repository::{ContentRepository, InMemoryContentRepository, RepositoryError};
