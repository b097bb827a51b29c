pub mod database;
pub mod errors;
pub mod project;
pub mod storage;
pub mod traits;
pub mod types;
pub mod web_space;

pub use database::Database;
pub use errors::ResourceError;
pub use project::Project;
pub use storage::Storage;
pub use traits::Resource;
pub use types::{FieldSpec, HostType, Language, ResourceKind};
pub use web_space::WebSpace;
