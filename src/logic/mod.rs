//! Logic modules — turns selections and offers into numbers.
//!
//! # Modules
//!
//! - `resolver` — Variant key derivation and fallback-chain value resolution
//! - `trade` — Trade offer totals and fairness verdicts

pub mod resolver;
pub mod trade;
