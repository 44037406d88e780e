//! Text normalization, skill matching, and similarity scoring

pub mod analyzer;
pub mod embeddings;
pub mod normalizer;
pub mod skills;
