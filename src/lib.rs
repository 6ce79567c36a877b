pub mod analysis;
pub mod config;
pub mod external;
pub mod graph;
pub mod parser;
pub mod processor;
pub mod table;

pub use analysis::{analyze_sentence, SentenceAnalysis};
pub use config::Config;
pub use external::{AnalysisError, AnalyzerRegistry, DependencyAnalyzer};
pub use graph::{build_graph, Arc, ArcDirection, DocumentGraph, GraphError, Word};
pub use parser::{parse_document, parse_file, parse_sentence, ConlluError};
pub use processor::{analyze_conllu, conllu_to_graph, conllu_to_table, TextProcessor};
pub use table::{split_sentences, strip_comments, Sentence, Token, TokenId};
