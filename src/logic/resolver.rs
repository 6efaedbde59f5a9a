//! Variant value resolver
//!
//! Turns a potion selection plus an item's stored prices into the single
//! number a trader sees next to the item.
//!
//! # Resolution Rules
//!
//! 1. The selection picks a canonical key (`Base`, `F`, ... `MFR`).
//! 2. The key's own field wins if it holds a positive number.
//! 3. Otherwise the key's fallback chain is walked in order and the first
//!    positive field supplies the value.
//! 4. If nothing in the chain is positive the value is `0`.
//!
//! The label is always the key from step 1. A fallback changes the number,
//! never what the user asked for.
//!
//! | Key  | Chain                     |
//! |------|---------------------------|
//! | MFR  | MFR, M, FR, Base          |
//! | MF   | MF, MFR, M, F, Base       |
//! | MR   | MR, MFR, M, R, Base       |
//! | M    | M, MFR, Base              |
//! | NFR  | NFR, N, FR, Base          |
//! | NF   | NF, NFR, F, N, Base       |
//! | NR   | NR, NFR, R, N, Base       |
//! | N    | N, NFR, Base              |
//! | FR   | FR, F, R, Base            |
//! | F    | F, FR, Base               |
//! | R    | R, FR, Base               |
//! | Base | Base                      |
//!
//! Neon fly/ride combos try the plain potion before plain Neon; Mega combos
//! try plain Mega first. Both orders are deliberate and must stay as listed.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::selection::SelectionState;
use crate::types::VariantKey;

/// Outcome of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Key derived from the selection, shown to the user
    pub label: VariantKey,
    /// Displayed price, never negative
    pub value: f64,
    /// Field that supplied `value`, `None` when nothing in the chain was set
    pub source: Option<VariantKey>,
}

impl Resolution {
    /// Whether the value came from a field other than the label's own
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, Some(source) if source != self.label)
    }
}

/// Candidate fields for `key`, most specific first. Always starts with `key`.
pub fn fallback_chain(key: VariantKey) -> &'static [VariantKey] {
    use VariantKey::*;

    match key {
        MegaFlyRide => &[MegaFlyRide, Mega, FlyRide, Base],
        MegaFly => &[MegaFly, MegaFlyRide, Mega, Fly, Base],
        MegaRide => &[MegaRide, MegaFlyRide, Mega, Ride, Base],
        Mega => &[Mega, MegaFlyRide, Base],
        NeonFlyRide => &[NeonFlyRide, Neon, FlyRide, Base],
        NeonFly => &[NeonFly, NeonFlyRide, Fly, Neon, Base],
        NeonRide => &[NeonRide, NeonFlyRide, Ride, Neon, Base],
        Neon => &[Neon, NeonFlyRide, Base],
        FlyRide => &[FlyRide, Fly, Ride, Base],
        Fly => &[Fly, FlyRide, Base],
        Ride => &[Ride, FlyRide, Base],
        Base => &[Base],
    }
}

/// Resolve the displayed value of `item` for `selection`.
///
/// Never fails: absent, zero, negative and non-finite fields are all skipped
/// the same way. Callers that need to tell "priced at zero" from "no data"
/// must look at [`Item::value`] themselves.
pub fn resolve(item: &Item, selection: &SelectionState) -> Resolution {
    resolve_key(item, selection.key())
}

/// Resolve the displayed value of `item` for an already derived key
pub fn resolve_key(item: &Item, key: VariantKey) -> Resolution {
    let found = fallback_chain(key)
        .iter()
        .find_map(|&candidate| item.positive_value(candidate).map(|v| (candidate, v)));

    match found {
        Some((source, value)) => {
            if source != key {
                tracing::trace!(item = %item.id, %key, %source, value, "variant resolved via fallback");
            }
            Resolution {
                label: key,
                value,
                source: Some(source),
            }
        }
        None => {
            tracing::trace!(item = %item.id, %key, "no positive value in fallback chain");
            Resolution {
                label: key,
                value: 0.0,
                source: None,
            }
        }
    }
}
