pub mod error;

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::table::{split_sentences, text::COMMENT_MARKER, Sentence, Token};

pub use error::ConlluError;

/// Parse a CoNLL-U file into its sentences
pub fn parse_file(path: &Path) -> Result<Vec<Sentence>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_document(&content)?)
}

/// Parse a multi-sentence CoNLL-U document.
///
/// Any malformed token line aborts the whole document.
pub fn parse_document(content: &str) -> Result<Vec<Sentence>, ConlluError> {
    let blocks = split_sentences(content);
    if blocks.is_empty() {
        return Err(ConlluError::EmptyInput);
    }

    let sentences = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| parse_block(block).map_err(|e| e.in_sentence(index)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(sentences = sentences.len(), "parsed CoNLL-U document");
    Ok(sentences)
}

/// Parse the text of a single sentence block
pub fn parse_sentence(block: &str) -> Result<Sentence, ConlluError> {
    if block.trim().is_empty() {
        return Err(ConlluError::EmptyInput);
    }
    parse_block(block)
}

/// Parse one block; a blank block yields a sentence without tokens
fn parse_block(block: &str) -> Result<Sentence, ConlluError> {
    let mut sentence = Sentence::default();

    for (number, line) in block.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.starts_with(COMMENT_MARKER) {
            sentence.comments.push(line.to_string());
            continue;
        }

        // Blank lines and anything not opening with a digit carry no token
        if !line.chars().next().map_or(false, char::is_numeric) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let fields: [&str; Token::FIELD_COUNT] =
            fields
                .try_into()
                .map_err(|fields: Vec<&str>| ConlluError::MalformedTable {
                    sentence: 0,
                    line: number + 1,
                    fields: fields.len(),
                })?;

        sentence.tokens.push(Token::from_fields(fields));
    }

    Ok(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TokenId;

    const SENTENCE: &str = "# sent_id 1
# text = This is a sentence.
1\tThis\tthis\tDET\tDT\t_\t2\tnsubj\t_\t_
2\tis\tbe\tAUX\tVBZ\t_\t0\troot\t_\t_
3\ta\ta\tDET\tDT\t_\t4\tdet\t_\t_
4\tsentence\tsentence\tNOUN\tNN\t_\t2\tattr\t_\tSpaceAfter=No
5\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_";

    #[test]
    fn test_parse_sentence() {
        let sentence = parse_sentence(SENTENCE).unwrap();

        assert_eq!(sentence.comments.len(), 2);
        assert_eq!(sentence.len(), 5);
        assert_eq!(sentence.tokens[3].form, "sentence");
        assert_eq!(sentence.tokens[3].misc, "SpaceAfter=No");
        assert_eq!(sentence.tokens[4].id, TokenId::Word(5));
    }

    #[test]
    fn test_parse_sentence_round_trips_text() {
        let sentence = parse_sentence(SENTENCE).unwrap();
        assert_eq!(sentence.to_string(), format!("{}\n", SENTENCE));
    }

    #[test]
    fn test_short_line_is_malformed() {
        let block = "1\tThis\tthis\tDET\tDT\t_\t2\tnsubj\n2\tis\tbe\tAUX\tVBZ\t_\t0\troot\t_\t_";

        assert_eq!(
            parse_sentence(block),
            Err(ConlluError::MalformedTable {
                sentence: 0,
                line: 1,
                fields: 8
            })
        );
    }

    #[test]
    fn test_long_line_is_malformed() {
        let block = "1\tThis\tthis\tDET\tDT\t_\t0\troot\t_\t_\textra";
        assert!(matches!(
            parse_sentence(block),
            Err(ConlluError::MalformedTable { fields: 11, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_sentence(""), Err(ConlluError::EmptyInput));
        assert_eq!(parse_sentence("  \n "), Err(ConlluError::EmptyInput));
        assert_eq!(parse_document("\n\n"), Err(ConlluError::EmptyInput));
    }

    #[test]
    fn test_non_numeric_lines_are_skipped() {
        let block = "\nnot a token line\n1\tGo\tgo\tVERB\tVB\t_\t0\troot\t_\t_\n";
        let sentence = parse_sentence(block).unwrap();

        assert_eq!(sentence.len(), 1);
        assert!(sentence.comments.is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let block = "1\tGo\tgo\tVERB\tVB\t_\t0\troot\t_\t_\r\n2\t!\t!\tPUNCT\t.\t_\t1\tpunct\t_\t_\r\n";
        let sentence = parse_sentence(block).unwrap();

        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence.tokens[1].misc, "_");
    }

    #[test]
    fn test_multiword_range_is_a_token_line() {
        let block = "1-2\tdon't\t_\t_\t_\t_\t_\t_\t_\t_\n\
                     1\tdo\tdo\tAUX\tVBP\t_\t3\taux\t_\t_\n\
                     2\tn't\tnot\tPART\tRB\t_\t3\tadvmod\t_\t_\n\
                     3\tgo\tgo\tVERB\tVB\t_\t0\troot\t_\t_";
        let sentence = parse_sentence(block).unwrap();

        assert_eq!(sentence.len(), 4);
        assert_eq!(sentence.tokens[0].id, TokenId::Range(1, 2));
    }

    #[test]
    fn test_parse_document_reports_sentence() {
        let document = format!("{}\n\n1\tbroken\tline", SENTENCE);

        assert_eq!(
            parse_document(&document),
            Err(ConlluError::MalformedTable {
                sentence: 1,
                line: 1,
                fields: 3
            })
        );
    }

    #[test]
    fn test_blank_block_inside_document() {
        let document = format!("{}\n\n\n\n{}", SENTENCE, SENTENCE);
        let sentences = parse_document(&document).unwrap();

        assert_eq!(sentences.len(), 3);
        assert!(sentences[1].is_empty());
    }

    #[test]
    fn test_parse_document() {
        let document = format!("{}\n\n{}\n", SENTENCE, SENTENCE);
        let sentences = parse_document(&document).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], sentences[1]);
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.conllu");
        std::fs::write(&path, SENTENCE).unwrap();

        let sentences = parse_file(&path).unwrap();
        assert_eq!(sentences.len(), 1);
        assert!(parse_file(&dir.path().join("missing.conllu")).is_err());
    }
}
