//! Question cues in parsed German sentences.
//!
//! Two independent detectors run over each sentence: a lexical one that looks
//! for question words in the sentence text, and a syntactic one that looks
//! for a verb placed before its subject.

use serde::{Deserialize, Serialize};

use crate::graph::{build_graph, ArcDirection};
use crate::table::{token::EMPTY_FIELD, Sentence, Token, TokenId};

/// Words and word combinations that mark a German question
pub const QUESTION_WORDS: &[&str] = &[
    "gibt es", "mit wem", "seit wann", "wann", "warum", "weshalb", "weswegen", "wieso", "was",
    "welche", "welchen", "welchem", "welcher", "welches", "wem", "wen", "wer", "wessen", "wie",
    "wieweit", "wie viel", "wie lange", "wie viele", "wo", "wogegen", "wodurch", "wofür", "wozu",
    "womit", "worum", "worüber", "wobei", "wovon", "woraus", "wohin", "wohinter", "woher",
    "woran", "worin", "worauf", "worunter", "wovor", "woneben",
];

/// Relation label of a subject in the TIGER scheme
pub const SUBJECT_RELATION: &str = "sb";

const VERB_TAG_PREFIX: char = 'V';
const NO_SPACE_AFTER: &str = "SpaceAfter=No";

/// Question cues found in one sentence
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceAnalysis {
    /// Sentence text recovered from its tokens
    pub text: String,
    pub question_words: Vec<String>,
    /// `"<i>. <verb> -> <j>. <subject>"` for every verb preceding its subject
    pub question_phrases: Vec<String>,
}

impl SentenceAnalysis {
    pub fn has_question_words(&self) -> bool {
        !self.question_words.is_empty()
    }

    pub fn has_question_syntax(&self) -> bool {
        !self.question_phrases.is_empty()
    }
}

/// Run both detectors over `sentence`
pub fn analyze_sentence(sentence: &Sentence) -> SentenceAnalysis {
    let text = sentence_text(sentence);
    SentenceAnalysis {
        question_words: question_words(&text),
        question_phrases: question_phrases(sentence),
        text,
    }
}

/// Surface text of a sentence.
///
/// Multiword tokens stand in for the words they span, empty nodes are left
/// out, and `SpaceAfter=No` in the misc column suppresses the following space.
pub fn sentence_text(sentence: &Sentence) -> String {
    let mut text = String::new();
    let mut covered = 0;

    for token in sentence {
        let surface = match &token.id {
            TokenId::Range(_, last) => {
                covered = *last;
                true
            }
            TokenId::Word(n) => *n > covered,
            _ => false,
        };
        if !surface {
            continue;
        }

        text.push_str(&token.form);
        if !token.misc.split('|').any(|entry| entry == NO_SPACE_AFTER) {
            text.push(' ');
        }
    }

    text.truncate(text.trim_end().len());
    text
}

/// Every known question word contained in `text`, ignoring case.
///
/// Matching is by substring, so `"wie viele"` also reports `"wie"` and
/// `"wie viel"`.
pub fn question_words(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    QUESTION_WORDS
        .iter()
        .filter(|word| text.contains(**word))
        .map(|word| word.to_string())
        .collect()
}

/// Verbs that precede their own subject, in subject order
pub fn question_phrases(sentence: &Sentence) -> Vec<String> {
    build_graph(sentence)
        .arcs()
        .iter()
        .filter(|arc| arc.label == SUBJECT_RELATION && arc.direction == ArcDirection::Left)
        .filter_map(|arc| {
            let verb = sentence.tokens.get(arc.head())?;
            let subject = sentence.tokens.get(arc.dependent())?;
            is_verb(verb).then(|| format!("{} -> {}", numbered(verb), numbered(subject)))
        })
        .collect()
}

/// Fine-grained tag when present, universal tag otherwise
fn is_verb(token: &Token) -> bool {
    let tag = if token.xpos == EMPTY_FIELD {
        &token.upos
    } else {
        &token.xpos
    };
    tag.starts_with(VERB_TAG_PREFIX)
}

fn numbered(token: &Token) -> String {
    format!("{}. {}", token.id, token.form)
}
