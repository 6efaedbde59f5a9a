//! Item records as served by the marketplace item API.
//!
//! Price fields arrive as numbers, numeric strings, `null`, or not at all,
//! depending on which tool last edited the row. Decoding never fails on a
//! price field: anything that is not a finite number becomes `None`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::logic::resolver::{Resolution, resolve};
use crate::selection::SelectionState;
use crate::types::{Game, VariantKey};

/// A tradeable item with its stored variant prices.
///
/// Stored prices are kept as decoded. A stored `Some(0.0)` or a negative
/// number is not a price; [`Item::positive_value`] and the resolver treat it
/// exactly like `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    pub game: Game,

    /// Value with no modifiers applied (RAP)
    #[serde(
        rename = "rap_value",
        alias = "base_value",
        alias = "baseValue",
        default,
        deserialize_with = "lenient::price"
    )]
    pub base_value: Option<f64>,

    #[serde(default, deserialize_with = "lenient::price")]
    pub value_f: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_r: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_fr: Option<f64>,

    #[serde(default, deserialize_with = "lenient::price")]
    pub value_n: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_nf: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_nr: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_nfr: Option<f64>,

    #[serde(default, deserialize_with = "lenient::price")]
    pub value_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_mf: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_mr: Option<f64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub value_mfr: Option<f64>,
}

impl Item {
    /// Create an item with no prices set
    pub fn new(id: impl Into<String>, name: impl Into<String>, game: Game) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            game,
            base_value: None,
            value_f: None,
            value_r: None,
            value_fr: None,
            value_n: None,
            value_nf: None,
            value_nr: None,
            value_nfr: None,
            value_m: None,
            value_mf: None,
            value_mr: None,
            value_mfr: None,
        }
    }

    /// Builder-style setter, mostly for fixtures
    pub fn with_value(mut self, key: VariantKey, value: impl Into<Option<f64>>) -> Self {
        *self.slot_mut(key) = value.into();
        self
    }

    pub fn set_value(&mut self, key: VariantKey, value: Option<f64>) {
        *self.slot_mut(key) = value;
    }

    /// Stored number for `key`, as decoded
    pub fn value(&self, key: VariantKey) -> Option<f64> {
        match key {
            VariantKey::Base => self.base_value,
            VariantKey::Fly => self.value_f,
            VariantKey::Ride => self.value_r,
            VariantKey::FlyRide => self.value_fr,
            VariantKey::Neon => self.value_n,
            VariantKey::NeonFly => self.value_nf,
            VariantKey::NeonRide => self.value_nr,
            VariantKey::NeonFlyRide => self.value_nfr,
            VariantKey::Mega => self.value_m,
            VariantKey::MegaFly => self.value_mf,
            VariantKey::MegaRide => self.value_mr,
            VariantKey::MegaFlyRide => self.value_mfr,
        }
    }

    /// Stored number for `key` if it is usable as a price (finite and > 0)
    pub fn positive_value(&self, key: VariantKey) -> Option<f64> {
        self.value(key).filter(|v| v.is_finite() && *v > 0.0)
    }

    /// Resolution for every one of the twelve selections, in table order
    pub fn variant_table(&self) -> Vec<Resolution> {
        SelectionState::all().map(|selection| resolve(self, &selection)).collect()
    }

    fn slot_mut(&mut self, key: VariantKey) -> &mut Option<f64> {
        match key {
            VariantKey::Base => &mut self.base_value,
            VariantKey::Fly => &mut self.value_f,
            VariantKey::Ride => &mut self.value_r,
            VariantKey::FlyRide => &mut self.value_fr,
            VariantKey::Neon => &mut self.value_n,
            VariantKey::NeonFly => &mut self.value_nf,
            VariantKey::NeonRide => &mut self.value_nr,
            VariantKey::NeonFlyRide => &mut self.value_nfr,
            VariantKey::Mega => &mut self.value_m,
            VariantKey::MegaFly => &mut self.value_mf,
            VariantKey::MegaRide => &mut self.value_mr,
            VariantKey::MegaFlyRide => &mut self.value_mfr,
        }
    }
}

/// Coerce a raw JSON price into a finite number.
///
/// Numbers pass through, strings are trimmed and parsed, everything else
/// (null, booleans, arrays, objects, unparsable text, NaN, infinities) is
/// absent.
pub fn coerce_price(raw: &serde_json::Value) -> Option<f64> {
    let parsed = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

mod lenient {
    use super::*;

    pub fn price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(coerce_price))
    }

    /// Database ids show up as either strings or integers
    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("invalid item id: {}", other))),
        }
    }
}
