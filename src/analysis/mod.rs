//! Structural analysis of generated dungeons

/// Coverage statistics for single dungeons and seed surveys
pub mod coverage;
/// Reciprocity, linkage and distance checks over the cell graph
pub mod topology;
