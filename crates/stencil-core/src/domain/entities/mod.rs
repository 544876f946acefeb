pub mod plan;
pub mod template;

pub use plan::{AssetLayer, CopyStep, GenerationPlan};
pub use template::{ProjectTemplate, SHARED_DIRECTORY_NAME};
