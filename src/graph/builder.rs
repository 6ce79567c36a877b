use std::collections::HashMap;
use tracing::debug;

use crate::graph::{
    document_graph::DocumentGraph,
    edge::Arc,
    error::GraphError,
    node::Word,
};
use crate::table::{Sentence, Token};

/// Build the arc graph of one sentence.
///
/// Every token becomes a word, multiword ranges and empty nodes included.
/// Arcs are emitted in token order; arcs whose endpoints cannot be resolved
/// are dropped. A plain id used by more than one token resolves to nothing.
pub fn build_graph(sentence: &Sentence) -> DocumentGraph {
    let words: Vec<Word> = sentence.iter().map(Word::from).collect();
    let positions = word_positions(sentence);

    let arcs = sentence
        .iter()
        .filter_map(|token| match token_arc(token, &positions) {
            Ok(arc) => arc,
            Err(e) => {
                debug!(error = %e, "skipping arc");
                None
            }
        })
        .collect();

    DocumentGraph::from_parts(words, arcs)
}

/// Output position of each plain word id; `None` marks a duplicated id
fn word_positions(sentence: &Sentence) -> HashMap<usize, Option<usize>> {
    let mut positions = HashMap::with_capacity(sentence.len());
    for (position, token) in sentence.iter().enumerate() {
        if let Some(id) = token.id.word() {
            positions
                .entry(id)
                .and_modify(|slot| *slot = None)
                .or_insert(Some(position));
        }
    }
    positions
}

/// The arc contributed by `token`, if it has one.
///
/// Root attachments, missing heads and self-loops contribute nothing.
fn token_arc(
    token: &Token,
    positions: &HashMap<usize, Option<usize>>,
) -> Result<Option<Arc>, GraphError> {
    let head = match token.head.as_deref() {
        Some(head) if !token.is_root() => head,
        _ => return Ok(None),
    };

    let id = token.id.word().ok_or_else(|| GraphError::NotAWord {
        id: token.id.to_string(),
    })?;
    let dependent = positions
        .get(&id)
        .copied()
        .flatten()
        .ok_or(GraphError::DuplicateId { id })?;

    let head_position = head
        .parse::<usize>()
        .ok()
        .and_then(|id| positions.get(&id).copied().flatten())
        .ok_or_else(|| GraphError::DanglingReference {
            id: token.id.to_string(),
            head: head.to_string(),
        })?;

    Ok(Arc::between(dependent, head_position, token.deprel.as_str()))
}
