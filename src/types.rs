//! Type-safe identifiers for games, tiers and variant keys
//!
//! Every price field an item can carry is named by a closed enum instead of a
//! free-form field string, so lookups are checked exhaustively at compile time
//! and a typo can never silently resolve to "absent".

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::selection::SelectionState;

/// Game an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum Game {
    #[strum(
        to_string = "adopt_me",
        serialize = "adoptme",
        serialize = "adopt-me",
        serialize = "adopt me"
    )]
    AdoptMe,
    #[strum(to_string = "mm2", serialize = "murder mystery 2", serialize = "murder_mystery_2")]
    Mm2,
    #[strum(to_string = "sab", serialize = "steal a brainrot", serialize = "steal_a_brainrot")]
    Sab,
}

impl Game {
    /// Human readable game title
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AdoptMe => "Adopt Me",
            Self::Mm2 => "Murder Mystery 2",
            Self::Sab => "Steal a Brainrot",
        }
    }
}

impl TryFrom<String> for Game {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<Game> for String {
    fn from(game: Game) -> Self {
        game.to_string()
    }
}

/// Potion tier. Neon and Mega are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    #[default]
    #[strum(to_string = "none", serialize = "normal", serialize = "")]
    None,
    #[strum(to_string = "neon", serialize = "n")]
    Neon,
    #[strum(to_string = "mega", serialize = "m", serialize = "mega neon")]
    Mega,
}

impl TryFrom<String> for Tier {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        tier.to_string()
    }
}

/// One of the twelve priced variant combinations.
///
/// `Display` yields the short code shown to users (`Base`, `F`, `NFR`, ...).
/// Parsing accepts the short code in any case as well as the external field
/// name (`rap_value`, `value_nfr`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, EnumCount)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum VariantKey {
    #[strum(to_string = "Base", serialize = "rap_value", serialize = "rap")]
    Base,
    #[strum(to_string = "F", serialize = "value_f")]
    Fly,
    #[strum(to_string = "R", serialize = "value_r")]
    Ride,
    #[strum(to_string = "FR", serialize = "value_fr")]
    FlyRide,
    #[strum(to_string = "N", serialize = "value_n")]
    Neon,
    #[strum(to_string = "NF", serialize = "value_nf")]
    NeonFly,
    #[strum(to_string = "NR", serialize = "value_nr")]
    NeonRide,
    #[strum(to_string = "NFR", serialize = "value_nfr")]
    NeonFlyRide,
    #[strum(to_string = "M", serialize = "value_m")]
    Mega,
    #[strum(to_string = "MF", serialize = "value_mf")]
    MegaFly,
    #[strum(to_string = "MR", serialize = "value_mr")]
    MegaRide,
    #[strum(to_string = "MFR", serialize = "value_mfr")]
    MegaFlyRide,
}

impl VariantKey {
    /// Canonical key for a fly/ride/tier combination.
    ///
    /// Total over all twelve inputs: tier picks the family, fly and ride pick
    /// the member.
    pub fn from_parts(fly: bool, ride: bool, tier: Tier) -> Self {
        match (tier, fly, ride) {
            (Tier::Mega, true, true) => Self::MegaFlyRide,
            (Tier::Mega, true, false) => Self::MegaFly,
            (Tier::Mega, false, true) => Self::MegaRide,
            (Tier::Mega, false, false) => Self::Mega,
            (Tier::Neon, true, true) => Self::NeonFlyRide,
            (Tier::Neon, true, false) => Self::NeonFly,
            (Tier::Neon, false, true) => Self::NeonRide,
            (Tier::Neon, false, false) => Self::Neon,
            (Tier::None, true, true) => Self::FlyRide,
            (Tier::None, true, false) => Self::Fly,
            (Tier::None, false, true) => Self::Ride,
            (Tier::None, false, false) => Self::Base,
        }
    }

    /// Field name used by the external item data source
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Base => "rap_value",
            Self::Fly => "value_f",
            Self::Ride => "value_r",
            Self::FlyRide => "value_fr",
            Self::Neon => "value_n",
            Self::NeonFly => "value_nf",
            Self::NeonRide => "value_nr",
            Self::NeonFlyRide => "value_nfr",
            Self::Mega => "value_m",
            Self::MegaFly => "value_mf",
            Self::MegaRide => "value_mr",
            Self::MegaFlyRide => "value_mfr",
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Self::Base | Self::Fly | Self::Ride | Self::FlyRide => Tier::None,
            Self::Neon | Self::NeonFly | Self::NeonRide | Self::NeonFlyRide => Tier::Neon,
            Self::Mega | Self::MegaFly | Self::MegaRide | Self::MegaFlyRide => Tier::Mega,
        }
    }

    pub fn has_fly(&self) -> bool {
        matches!(
            self,
            Self::Fly
                | Self::FlyRide
                | Self::NeonFly
                | Self::NeonFlyRide
                | Self::MegaFly
                | Self::MegaFlyRide
        )
    }

    pub fn has_ride(&self) -> bool {
        matches!(
            self,
            Self::Ride
                | Self::FlyRide
                | Self::NeonRide
                | Self::NeonFlyRide
                | Self::MegaRide
                | Self::MegaFlyRide
        )
    }

    /// The selection whose canonical key is `self`
    pub fn selection(&self) -> SelectionState {
        SelectionState {
            fly: self.has_fly(),
            ride: self.has_ride(),
            tier: self.tier(),
        }
    }

    /// All twelve keys in table order (Base, F, R, FR, N, ... MFR)
    pub fn all() -> impl Iterator<Item = VariantKey> {
        Self::iter()
    }
}

impl TryFrom<String> for VariantKey {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<VariantKey> for String {
    fn from(key: VariantKey) -> Self {
        key.to_string()
    }
}
