pub mod insights;
pub mod models;
pub mod prompt;

pub use insights::InsightFetcher;
pub use models::{create_model, ClaudeModel, DummyModel, NarrativeModel};

pub mod prelude {
    pub use super::models::{create_model, NarrativeModel};
    pub use super::InsightFetcher;
    pub use digest_core::{Article, Error, Result};
}
