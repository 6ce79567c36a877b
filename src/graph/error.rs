use thiserror::Error;

/// Inconsistencies found while turning a sentence into arcs.
///
/// None of these are fatal: the builder drops the offending arc.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Token {id} has no plain word id")]
    NotAWord { id: String },

    #[error("Word id {id} occurs more than once in the sentence")]
    DuplicateId { id: usize },

    #[error("Dangling reference: token {id} points at head {head}")]
    DanglingReference { id: String, head: String },
}
