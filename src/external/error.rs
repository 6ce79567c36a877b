use thiserror::Error;

use crate::parser::ConlluError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Text to analyze is empty")]
    EmptyText,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Dependency analyzer error: {0}")]
    Analyzer(anyhow::Error),

    #[error(transparent)]
    Conllu(#[from] ConlluError),
}
