pub mod sentence;
pub mod text;
pub mod token;

pub use sentence::Sentence;
pub use text::{split_sentences, strip_comments};
pub use token::{Token, TokenId};
