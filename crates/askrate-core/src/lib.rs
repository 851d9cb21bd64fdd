//! askrate-core — data model, question parsing, and scoring.
//!
//! This crate defines the answer and question types, the TOML question-set
//! parser, and the rating math that the rest of askrate builds on.

pub mod answer;
pub mod questions;
pub mod scoring;
