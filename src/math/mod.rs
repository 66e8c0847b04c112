//! Mathematical utilities for generation and ordering

/// Cell distances and distance-ordered sorting
pub mod distance;
/// Random sources for procedural generation
pub mod probability;
