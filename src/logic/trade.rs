//! Trade offer valuation
//!
//! Values both sides of an offer with the variant resolver and compares the
//! totals. The verdict is from the point of view of the trader making the
//! offer: `Win` means they receive noticeably more than they give.

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{Result, TradeValueError};
use crate::logic::resolver::{Resolution, resolve};
use crate::selection::SelectionState;
use crate::types::Game;

/// One line of a trade offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEntry {
    /// Item id or name, looked up in the catalog
    pub item_id: String,
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl TradeEntry {
    pub fn new(item_id: impl Into<String>, selection: SelectionState) -> Self {
        Self {
            item_id: item_id.into(),
            selection,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Both sides of a proposed trade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeOffer {
    /// What the trader gives away
    pub offering: Vec<TradeEntry>,
    /// What the trader asks for
    pub requesting: Vec<TradeEntry>,
}

impl TradeOffer {
    /// Load an offer from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read trade offer from {:?}", path.as_ref()))?;

        let offer: Self =
            serde_json::from_str(&content).context("Failed to parse trade offer JSON")?;

        Ok(offer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeVerdict {
    Win,
    Fair,
    Lose,
}

/// A resolved trade line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedEntry {
    pub item_id: String,
    pub name: String,
    pub resolution: Resolution,
    pub quantity: u32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub offering: Vec<ValuedEntry>,
    pub requesting: Vec<ValuedEntry>,
    pub offering_total: f64,
    pub requesting_total: f64,
    /// `requesting_total - offering_total`
    pub difference: f64,
    pub verdict: TradeVerdict,
}

/// Value every entry of `offer` and compare the two sides.
///
/// # Errors
///
/// - `ItemNotFound` when an entry names an item missing from the catalog
/// - `Validation` for a zero quantity, a margin outside `[0, 1)`, or a side
///   whose total is not a finite number
pub fn evaluate(
    offer: &TradeOffer,
    catalog: &Catalog,
    game: Option<Game>,
    fair_margin: f64,
) -> Result<TradeSummary> {
    if !fair_margin.is_finite() || !(0.0..1.0).contains(&fair_margin) {
        return Err(TradeValueError::validation(format!(
            "fair margin must be at least 0 and below 1, got {}",
            fair_margin
        )));
    }

    let offering = value_side(&offer.offering, catalog, game)?;
    let requesting = value_side(&offer.requesting, catalog, game)?;

    let offering_total: f64 = offering.iter().map(|e| e.total).sum();
    let requesting_total: f64 = requesting.iter().map(|e| e.total).sum();
    if !offering_total.is_finite() || !requesting_total.is_finite() {
        return Err(TradeValueError::validation(format!(
            "trade totals overflow: offering {}, requesting {}",
            offering_total, requesting_total
        )));
    }
    let verdict = verdict(offering_total, requesting_total, fair_margin);

    tracing::debug!(offering_total, requesting_total, ?verdict, "trade evaluated");

    Ok(TradeSummary {
        offering,
        requesting,
        offering_total,
        requesting_total,
        difference: requesting_total - offering_total,
        verdict,
    })
}

/// Compare finite totals. Differences within `fair_margin` of the larger side
/// are fair.
pub fn verdict(offering_total: f64, requesting_total: f64, fair_margin: f64) -> TradeVerdict {
    let larger = offering_total.max(requesting_total);
    let difference = requesting_total - offering_total;

    if difference.abs() <= larger * fair_margin {
        TradeVerdict::Fair
    } else if difference > 0.0 {
        TradeVerdict::Win
    } else {
        TradeVerdict::Lose
    }
}

fn value_side(
    entries: &[TradeEntry],
    catalog: &Catalog,
    game: Option<Game>,
) -> Result<Vec<ValuedEntry>> {
    entries
        .iter()
        .map(|entry| {
            if entry.quantity == 0 {
                return Err(TradeValueError::validation(format!(
                    "quantity for {} must be at least 1",
                    entry.item_id
                )));
            }
            let item = catalog.get(&entry.item_id, game)?;
            let resolution = resolve(item, &entry.selection);
            Ok(ValuedEntry {
                item_id: item.id.clone(),
                name: item.name.clone(),
                resolution,
                quantity: entry.quantity,
                total: resolution.value * f64::from(entry.quantity),
            })
        })
        .collect()
}
