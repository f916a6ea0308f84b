//! Flat `-option value` command-line model.

/// Ordered argument list with unique-by-key replacement.
pub mod list;
