//! Option values and their canonical text form.

/// Enumerated-constant to wire-token resolution.
pub mod alias;
/// Enumerated option catalogs.
pub mod constants;
/// Value normalization.
pub mod normalize;
