pub mod completion;
pub mod config;
pub mod engine;
pub mod models;
pub mod normalize;
pub mod prompt;

pub use completion::{CompletionClient, SharedCompletionClient};
pub use config::VerdictThresholds;
pub use engine::Analyzer;
pub use models::{AnalysisResult, BiasAnalysis, SourceCheck};
pub use normalize::normalize;
pub use prompt::build_prompt;
