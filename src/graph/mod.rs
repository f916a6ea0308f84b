//! Filtergraph composition: chains of nodes and the statements that carry them.

/// Graph/stream chain composer.
pub mod chain;
/// Filter-set container.
pub mod set;
