use serde::{Deserialize, Serialize};

use crate::table::Token;

/// A word of the rendered graph, addressed by its position in the word list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    /// Surface form
    pub text: String,
    /// Universal part-of-speech tag
    pub tag: String,
}

impl Word {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

impl From<&Token> for Word {
    fn from(token: &Token) -> Self {
        Self::new(token.form.as_str(), token.upos.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_from_token() {
        let token = Token::from_fields([
            "1", "This", "this", "DET", "DT", "_", "2", "nsubj", "_", "_",
        ]);
        assert_eq!(Word::from(&token), Word::new("This", "DET"));
    }

    #[test]
    fn test_word_json() {
        let json = serde_json::to_value(Word::new("is", "AUX")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "is", "tag": "AUX"}));
    }
}
