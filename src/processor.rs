use tracing::{debug, info, warn};

use crate::analysis::{analyze_sentence, SentenceAnalysis};
use crate::external::{AnalysisError, AnalyzerRegistry};
use crate::graph::{build_graph, DocumentGraph};
use crate::parser::{parse_document, ConlluError};
use crate::table::strip_comments;

/// Turn a CoNLL-U document into one arc graph.
///
/// Each sentence block is built on its own and the fragments are merged in
/// document order. A single malformed token line rejects the document.
pub fn conllu_to_graph(document: &str) -> Result<DocumentGraph, ConlluError> {
    let sentences = parse_document(document)?;
    let graph: DocumentGraph = sentences.iter().map(build_graph).collect();

    info!(
        sentences = sentences.len(),
        words = graph.len(),
        arcs = graph.arcs().len(),
        "built dependency graph"
    );
    Ok(graph)
}

/// Validate a CoNLL-U document and return it, without comment lines unless
/// `keep_comments` is set
pub fn conllu_to_table(document: &str, keep_comments: bool) -> Result<String, ConlluError> {
    parse_document(document)?;

    if keep_comments {
        Ok(document.to_string())
    } else {
        Ok(strip_comments(document))
    }
}

/// Look for question cues in every sentence of a CoNLL-U document.
///
/// Sentences without tokens produce no result.
pub fn analyze_conllu(document: &str) -> Result<Vec<SentenceAnalysis>, ConlluError> {
    let analyses: Vec<SentenceAnalysis> = parse_document(document)?
        .iter()
        .filter(|sentence| !sentence.is_empty())
        .map(analyze_sentence)
        .collect();

    info!(
        sentences = analyses.len(),
        questions = analyses
            .iter()
            .filter(|a| a.has_question_words() || a.has_question_syntax())
            .count(),
        "analyzed sentences"
    );
    Ok(analyses)
}

/// Runs raw text through a registered analyzer and the graph core
#[derive(Debug, Default)]
pub struct TextProcessor {
    analyzers: AnalyzerRegistry,
}

impl TextProcessor {
    pub fn new(analyzers: AnalyzerRegistry) -> Self {
        Self { analyzers }
    }

    pub fn analyzers(&self) -> &AnalyzerRegistry {
        &self.analyzers
    }

    /// Dependency analysis of `text` as a CoNLL-U document
    pub fn text_to_conllu(
        &self,
        text: &str,
        language: &str,
        keep_comments: bool,
    ) -> Result<String, AnalysisError> {
        let conllu = self.analyze(text, language)?;
        if keep_comments {
            Ok(conllu)
        } else {
            Ok(strip_comments(&conllu))
        }
    }

    /// Dependency analysis of `text` as an arc graph
    pub fn text_to_graph(&self, text: &str, language: &str) -> Result<DocumentGraph, AnalysisError> {
        let conllu = self.analyze(text, language)?;
        Ok(conllu_to_graph(&conllu)?)
    }

    /// Question cues of every sentence in `text`.
    ///
    /// Runs of whitespace collapse to one space before analysis. Blank text,
    /// or an analyzer returning a blank table, gives no results.
    pub fn analyze_text(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<SentenceAnalysis>, AnalysisError> {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let conllu = self.analyze(&text, language)?;
        if conllu.trim().is_empty() {
            warn!(language, "analyzer returned an empty table");
            return Ok(Vec::new());
        }
        Ok(analyze_conllu(&conllu)?)
    }

    fn analyze(&self, text: &str, language: &str) -> Result<String, AnalysisError> {
        if text.is_empty() {
            warn!("rejecting empty text");
            return Err(AnalysisError::EmptyText);
        }

        let analyzer = self.analyzers.get(language).ok_or_else(|| {
            warn!(language, "no analyzer registered");
            AnalysisError::UnsupportedLanguage(language.to_string())
        })?;

        debug!(language, chars = text.chars().count(), "running dependency analysis");
        analyzer.analyze(text).map_err(AnalysisError::Analyzer)
    }
}
