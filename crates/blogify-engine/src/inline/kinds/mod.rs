//! # Inline Kinds
//!
//! One module per transformation step. Each owns the command names and
//! patterns it rewrites; the pipeline in `inline::transform_markup` only
//! fixes their order.

pub mod citation;
pub mod fallback;
pub mod footnote;
pub mod spans;
pub mod typography;
