//! Modifier selection state
//!
//! Mirrors the potion toggles a trader clicks when pricing a pet: Fly and Ride
//! flip independently, Neon and Mega replace each other.

use serde::{Deserialize, Serialize};

use crate::types::{Tier, VariantKey};

/// Currently toggled modifiers for one resolution request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub fly: bool,
    pub ride: bool,
    pub tier: Tier,
}

impl SelectionState {
    pub fn new(fly: bool, ride: bool, tier: Tier) -> Self {
        Self { fly, ride, tier }
    }

    /// Canonical variant key for this selection
    pub fn key(&self) -> VariantKey {
        VariantKey::from_parts(self.fly, self.ride, self.tier)
    }

    pub fn toggle_fly(&mut self) {
        self.fly = !self.fly;
    }

    pub fn toggle_ride(&mut self) {
        self.ride = !self.ride;
    }

    /// Select Neon, clearing Mega. Toggling an active Neon returns to no tier.
    pub fn toggle_neon(&mut self) {
        self.tier = match self.tier {
            Tier::Neon => Tier::None,
            _ => Tier::Neon,
        };
    }

    /// Select Mega, clearing Neon. Toggling an active Mega returns to no tier.
    pub fn toggle_mega(&mut self) {
        self.tier = match self.tier {
            Tier::Mega => Tier::None,
            _ => Tier::Mega,
        };
    }

    /// Every selection, one per variant key, in table order
    pub fn all() -> impl Iterator<Item = SelectionState> {
        VariantKey::all().map(|key| key.selection())
    }
}

impl From<VariantKey> for SelectionState {
    fn from(key: VariantKey) -> Self {
        key.selection()
    }
}
