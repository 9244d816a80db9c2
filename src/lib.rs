//! # Emovec Library
//!
//! Builds emoji embeddings by blending GloVe word vectors with
//! inverse-frequency keyword weights, then matches free text against
//! the result.

pub mod blend;
pub mod cli;
pub mod config;
pub mod glove;
pub mod keywords;
pub mod logger;
pub mod matcher;
pub mod types;
pub mod weights;
