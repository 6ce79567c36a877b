//! Plain-text transforms over the CoNLL-U layout.

/// Marker that opens a comment line
pub const COMMENT_MARKER: char = '#';


/// Drop every comment line, terminating each kept line with a newline
pub fn strip_comments(table: &str) -> String {
    table
        .lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .fold(String::with_capacity(table.len()), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

/// Split a document into its sentence blocks, in order.
///
/// Blocks keep their own comment lines. A blank line ends a block whether
/// lines end in `\n` or `\r\n`. A document that is empty after trimming has
/// no blocks.
pub fn split_sentences(document: &str) -> Vec<&str> {
    let document = document.trim();
    if document.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut rest = document;
    while let Some((block, tail)) = split_at_blank_line(rest) {
        blocks.push(block);
        rest = tail;
    }
    blocks.push(rest);
    blocks
}

/// Split around the first line break that is directly followed by an empty
/// line. The block loses the `\r` of its last line ending.
fn split_at_blank_line(text: &str) -> Option<(&str, &str)> {
    text.match_indices('\n').find_map(|(at, _)| {
        let tail = &text[at + 1..];
        let tail = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix('\n'))?;
        let block = &text[..at];
        Some((block.strip_suffix('\r').unwrap_or(block), tail))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SENTENCES: &str = "# sent_id 1
1\tThis\tthis\tDET\tDT\t_\t2\tnsubj\t_\t_
2\tis\tbe\tAUX\tVBZ\t_\t0\troot\t_\t_

# sent_id 2
1\tGo\tgo\tVERB\tVB\t_\t0\troot\t_\t_
";

    #[test]
    fn test_strip_comments() {
        let stripped = strip_comments(TWO_SENTENCES);

        assert!(!stripped.contains('#'));
        assert_eq!(
            stripped,
            "1\tThis\tthis\tDET\tDT\t_\t2\tnsubj\t_\t_\n\
             2\tis\tbe\tAUX\tVBZ\t_\t0\troot\t_\t_\n\
             \n\
             1\tGo\tgo\tVERB\tVB\t_\t0\troot\t_\t_\n"
        );
    }

    #[test]
    fn test_strip_comments_is_idempotent() {
        for input in [TWO_SENTENCES, "", "# only\n# comments", "a\n\n\nb", "x"] {
            let once = strip_comments(input);
            assert_eq!(strip_comments(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_strip_keeps_hash_inside_line() {
        assert_eq!(strip_comments("1\t#\t#\tSYM"), "1\t#\t#\tSYM\n");
    }

    #[test]
    fn test_split_sentences() {
        let blocks = split_sentences(TWO_SENTENCES);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("# sent_id 1"));
        assert!(blocks[1].starts_with("# sent_id 2"));
        assert!(blocks[1].ends_with("root\t_\t_"));
    }

    #[test]
    fn test_split_empty_document() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n\t\n").is_empty());
    }

    #[test]
    fn test_split_crlf_document() {
        let crlf = TWO_SENTENCES.replace('\n', "\r\n");
        let blocks = split_sentences(&crlf);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("# sent_id 1\r\n"));
        assert!(blocks[0].ends_with("root\t_\t_"));
        assert!(blocks[1].starts_with("# sent_id 2"));
    }

    #[test]
    fn test_split_keeps_blank_blocks() {
        assert_eq!(split_sentences("a\n\n\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_sentences("a\r\n\r\n\r\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_sentences("a\n\n\nb"), vec!["a", "\nb"]);
    }

    #[test]
    fn test_split_single_block() {
        assert_eq!(split_sentences("\n\n1\ta\n2\tb\n\n"), vec!["1\ta\n2\tb"]);
    }
}
