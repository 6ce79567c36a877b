use anyhow::Result;
use std::collections::HashMap;

#[cfg(test)]
use mockall::automock;

/// A dependency-analysis backend for one language.
///
/// Implementations wrap whatever model produces the analysis and return it
/// as a CoNLL-U document.
#[cfg_attr(test, automock)]
pub trait DependencyAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<String>;
}

/// Analyzer handles keyed by language code
#[derive(Default)]
pub struct AnalyzerRegistry {
    analyzers: HashMap<String, Box<dyn DependencyAnalyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `analyzer` for `language`, replacing any previous one
    pub fn register(
        &mut self,
        language: impl Into<String>,
        analyzer: Box<dyn DependencyAnalyzer>,
    ) -> &mut Self {
        self.analyzers.insert(language.into(), analyzer);
        self
    }

    pub fn get(&self, language: &str) -> Option<&dyn DependencyAnalyzer> {
        self.analyzers.get(language).map(|a| &**a)
    }

    /// Registered language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.analyzers.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}
