pub mod builder;
pub mod document_graph;
pub mod edge;
pub mod error;
pub mod node;

pub use builder::build_graph;
pub use document_graph::DocumentGraph;
pub use edge::{Arc, ArcDirection};
pub use error::GraphError;
pub use node::Word;
