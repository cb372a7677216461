//! Core domain types

pub mod engine;
pub mod lexicon;
pub mod matrix;
pub mod normalize;

pub use engine::{ScoredWord, WordIndex};
pub use lexicon::Lexicon;
pub use matrix::EmbeddingMatrix;
pub use normalize::{Normalizer, Stemmer};
