//! trade-values library
//!
//! Resolves the displayed value of Roblox trading items (Adopt Me, MM2, SAB)
//! from their stored variant prices and a potion selection, and values trade
//! offers built from those items.

pub mod catalog;
pub mod cli;
pub mod config_file;
pub mod error;
pub mod format;
pub mod item;
pub mod logic;
pub mod selection;
pub mod types;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use config_file::AppConfig;
pub use error::TradeValueError;
pub use item::{Item, coerce_price};
pub use selection::SelectionState;
pub use types::{Game, Tier, VariantKey};

// Variant resolver
pub use logic::resolver::{Resolution, fallback_chain, resolve, resolve_key};

// Trade valuation
pub use logic::trade::{TradeEntry, TradeOffer, TradeSummary, TradeVerdict, ValuedEntry, evaluate};
