use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used by CoNLL-U for an absent value
pub const EMPTY_FIELD: &str = "_";

/// Relation label of the token attached to the artificial root
pub const ROOT_RELATION: &str = "root";

/// Identifier column of a token line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TokenId {
    /// Ordinary syntactic word, 1-based
    Word(usize),
    /// Multiword token spanning `first-last`
    Range(usize, usize),
    /// Empty node such as `8.1`
    Empty(usize, usize),
    /// Anything else, kept verbatim
    Other(String),
}

impl TokenId {
    /// The 1-based word number, if this id can take part in an arc
    pub fn word(&self) -> Option<usize> {
        match self {
            TokenId::Word(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for TokenId {
    fn from(raw: &str) -> Self {
        let pair = |sep: char| -> Option<(usize, usize)> {
            let (left, right) = raw.split_once(sep)?;
            Some((left.parse().ok()?, right.parse().ok()?))
        };

        if let Ok(n) = raw.parse() {
            TokenId::Word(n)
        } else if let Some((first, last)) = pair('-') {
            TokenId::Range(first, last)
        } else if let Some((word, sub)) = pair('.') {
            TokenId::Empty(word, sub)
        } else {
            TokenId::Other(raw.to_string())
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenId::Word(n) => write!(f, "{}", n),
            TokenId::Range(first, last) => write!(f, "{}-{}", first, last),
            TokenId::Empty(word, sub) => write!(f, "{}.{}", word, sub),
            TokenId::Other(raw) => f.write_str(raw),
        }
    }
}

/// One token line of a CoNLL-U table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    /// Morphological features, never decomposed
    pub feats: String,
    /// Raw head column; `None` when the column holds `_`
    pub head: Option<String>,
    pub deprel: String,
    pub deps: String,
    pub misc: String,
}

impl Token {
    /// Number of tab-separated columns in a token line
    pub const FIELD_COUNT: usize = 10;

    /// Build a token from the ten columns in file order
    pub fn from_fields(fields: [&str; Token::FIELD_COUNT]) -> Self {
        let [id, form, lemma, upos, xpos, feats, head, deprel, deps, misc] = fields;
        Self {
            id: TokenId::from(id),
            form: form.to_string(),
            lemma: lemma.to_string(),
            upos: upos.to_string(),
            xpos: xpos.to_string(),
            feats: feats.to_string(),
            head: (head != EMPTY_FIELD).then(|| head.to_string()),
            deprel: deprel.to_string(),
            deps: deps.to_string(),
            misc: misc.to_string(),
        }
    }

    /// Whether this token is attached to the artificial root
    pub fn is_root(&self) -> bool {
        self.deprel == ROOT_RELATION
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.id,
            self.form,
            self.lemma,
            self.upos,
            self.xpos,
            self.feats,
            self.head.as_deref().unwrap_or(EMPTY_FIELD),
            self.deprel,
            self.deps,
            self.misc
        )
    }
}
