pub mod common;
pub mod file_task;
pub mod marker;
pub mod project_config;
pub mod render_context;
pub mod resource;
pub mod universe;

pub use crate::domain::DomainError;
pub use file_task::{FileTask, TemplateId};
pub use project_config::ProjectConfig;
pub use resource::Resource;
pub use universe::Universe;
