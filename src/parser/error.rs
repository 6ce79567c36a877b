use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConlluError {
    #[error("CoNLL-U input is empty")]
    EmptyInput,

    #[error(
        "Malformed CoNLL-U table: sentence {sentence}, line {line} has {fields} fields, expected 10"
    )]
    MalformedTable {
        /// 0-based index of the sentence block
        sentence: usize,
        /// 1-based line number within the block
        line: usize,
        fields: usize,
    },
}

impl ConlluError {
    /// Re-attribute a block-level error to its position in the document
    pub(crate) fn in_sentence(self, index: usize) -> Self {
        match self {
            ConlluError::MalformedTable { line, fields, .. } => ConlluError::MalformedTable {
                sentence: index,
                line,
                fields,
            },
            other => other,
        }
    }
}
