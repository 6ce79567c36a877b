use petgraph::{
    graph::{DiGraph, NodeIndex},
    Direction,
};
use serde::{Deserialize, Serialize};

use crate::graph::{edge::Arc, node::Word};

/// Words and arcs of one or more sentences, in the layout renderers consume
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentGraph {
    words: Vec<Word>,
    arcs: Vec<Arc>,
}

impl DocumentGraph {
    /// Create a new empty document graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph from already indexed words and arcs
    pub fn from_parts(words: Vec<Word>, arcs: Vec<Arc>) -> Self {
        Self { words, arcs }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn into_parts(self) -> (Vec<Word>, Vec<Arc>) {
        (self.words, self.arcs)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Append `other` after this graph, shifting its arcs past our words
    pub fn append(self, other: DocumentGraph) -> DocumentGraph {
        let offset = self.words.len();
        let Self {
            mut words,
            mut arcs,
        } = self;

        arcs.extend(other.arcs.into_iter().map(|arc| arc.offset(offset)));
        words.extend(other.words);

        Self { words, arcs }
    }

    /// Concatenate per-sentence graphs into one document graph.
    ///
    /// Order is preserved: sentence order first, emission order within a
    /// sentence. No fragments give an empty graph.
    pub fn merge<I>(fragments: I) -> DocumentGraph
    where
        I: IntoIterator<Item = DocumentGraph>,
    {
        fragments
            .into_iter()
            .fold(DocumentGraph::new(), DocumentGraph::append)
    }

    /// Whether every arc is a non-loop between two existing words
    pub fn is_consistent(&self) -> bool {
        self.arcs
            .iter()
            .all(|arc| arc.start < arc.end && arc.end < self.words.len())
    }

    /// Project the graph into a petgraph digraph.
    ///
    /// Node `i` is word `i`; edges run from head to dependent and carry the
    /// relation label. Arcs with an endpoint past the last word are left out.
    pub fn dependency_graph(&self) -> DiGraph<&Word, &str> {
        let len = self.words.len();
        let mut graph = DiGraph::with_capacity(len, self.arcs.len());
        for word in &self.words {
            graph.add_node(word);
        }
        for arc in self.arcs.iter().filter(|arc| arc.start < len && arc.end < len) {
            graph.add_edge(
                NodeIndex::new(arc.head()),
                NodeIndex::new(arc.dependent()),
                arc.label.as_str(),
            );
        }
        graph
    }

    /// Indices of the words that depend on no other word
    pub fn roots(&self) -> Vec<usize> {
        let graph = self.dependency_graph();
        graph
            .node_indices()
            .filter(|idx| {
                graph
                    .neighbors_directed(*idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| idx.index())
            .collect()
    }

    /// Indices of the direct dependents of `head`, in ascending order
    pub fn dependents(&self, head: usize) -> Vec<usize> {
        if head >= self.words.len() {
            return Vec::new();
        }

        let graph = self.dependency_graph();
        let mut dependents: Vec<usize> = graph
            .neighbors_directed(NodeIndex::new(head), Direction::Outgoing)
            .map(|idx| idx.index())
            .collect();
        dependents.sort_unstable();
        dependents
    }

    /// Serialize for a displaCy-style renderer
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl FromIterator<DocumentGraph> for DocumentGraph {
    fn from_iter<I: IntoIterator<Item = DocumentGraph>>(iter: I) -> Self {
        DocumentGraph::merge(iter)
    }
}
