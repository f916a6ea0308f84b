//! Filter node expressions.

/// Typed wrappers for common filters.
pub mod library;
/// Generic node serializer.
pub mod node;
