mod analyzer;
pub mod error;

pub use analyzer::{AnalyzerRegistry, DependencyAnalyzer};
pub use error::AnalysisError;

#[cfg(test)]
pub use analyzer::MockDependencyAnalyzer;
