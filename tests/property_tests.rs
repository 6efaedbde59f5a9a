//! Property-Based Tests for trade-values
//!
//! Uses proptest over the whole selection space and arbitrary stored prices.
//!
//! These tests verify:
//! - Resolution is total, non-negative and labelled with the derived key
//! - The returned value always comes from the key's fallback chain
//! - The first positive candidate in the chain wins
//! - String and number encodings of a price resolve identically

use proptest::prelude::*;
use serde_json::json;
use strum::IntoEnumIterator;
use trade_values::{
    Game, Item, SelectionState, Tier, VariantKey, fallback_chain, resolve,
};

// =============================================================================
// Strategies
// =============================================================================

fn tier_strategy() -> impl Strategy<Value = Tier> {
    prop_oneof![Just(Tier::None), Just(Tier::Neon), Just(Tier::Mega)]
}

fn selection_strategy() -> impl Strategy<Value = SelectionState> {
    (any::<bool>(), any::<bool>(), tier_strategy())
        .prop_map(|(fly, ride, tier)| SelectionState::new(fly, ride, tier))
}

/// Stored price: mostly absent, zero, negative or positive
fn price_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        (-1_000_000.0..0.0f64).prop_map(Some),
        (0.01..10_000_000.0f64).prop_map(Some),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    prop::collection::vec(price_strategy(), 12).prop_map(|prices| {
        let mut item = Item::new("prop", "Property Pet", Game::AdoptMe);
        for (key, price) in VariantKey::iter().zip(prices) {
            item.set_value(key, price);
        }
        item
    })
}

// =============================================================================
// Resolution Invariants
// =============================================================================

proptest! {
    /// Label is the derived key and value is never negative
    #[test]
    fn resolve_is_total_and_non_negative(item in item_strategy(), selection in selection_strategy()) {
        let result = resolve(&item, &selection);
        prop_assert_eq!(result.label, selection.key());
        prop_assert!(result.value >= 0.0);
        prop_assert!(result.value.is_finite());
    }

    /// Same input, same output
    #[test]
    fn resolve_is_idempotent(item in item_strategy(), selection in selection_strategy()) {
        prop_assert_eq!(resolve(&item, &selection), resolve(&item, &selection));
    }

    /// The value equals the first positive candidate of the chain, or 0
    #[test]
    fn resolve_picks_first_positive_candidate(item in item_strategy(), selection in selection_strategy()) {
        let key = selection.key();
        let expected = fallback_chain(key)
            .iter()
            .filter_map(|&k| item.value(k))
            .find(|v| *v > 0.0)
            .unwrap_or(0.0);

        let result = resolve(&item, &selection);
        prop_assert_eq!(result.value, expected);
        if let Some(source) = result.source {
            prop_assert!(fallback_chain(key).contains(&source));
            prop_assert_eq!(item.value(source), Some(result.value));
        }
    }

    /// A positive primary field always wins outright
    #[test]
    fn positive_primary_wins(item in item_strategy(), selection in selection_strategy(), price in 0.01..1e9f64) {
        let mut item = item;
        item.set_value(selection.key(), Some(price));
        let result = resolve(&item, &selection);
        prop_assert_eq!(result.value, price);
        prop_assert!(!result.is_fallback());
    }

    /// Base never looks at variant fields
    #[test]
    fn base_reads_only_base(item in item_strategy()) {
        let result = resolve(&item, &SelectionState::default());
        let expected = item.value(VariantKey::Base).filter(|v| *v > 0.0).unwrap_or(0.0);
        prop_assert_eq!(result.value, expected);
    }

    /// Mega selections never derive a Neon key
    #[test]
    fn mega_tier_excludes_neon(fly in any::<bool>(), ride in any::<bool>()) {
        let key = SelectionState::new(fly, ride, Tier::Mega).key();
        prop_assert_eq!(key.tier(), Tier::Mega);
        prop_assert!(!fallback_chain(key).iter().any(|k| k.tier() == Tier::Neon));
    }
}

// =============================================================================
// Decoding Invariants
// =============================================================================

proptest! {
    /// A price encoded as a JSON string resolves like the number itself
    #[test]
    fn string_price_matches_number(price in 0.01..1e9f64, selection in selection_strategy()) {
        let field = selection.key().field_name();
        let mut as_number = json!({"id": "1", "name": "Owl", "game": "adopt_me"});
        let mut as_string = as_number.clone();
        as_number[field] = json!(price);
        as_string[field] = json!(price.to_string());

        let a: Item = serde_json::from_value(as_number).unwrap();
        let b: Item = serde_json::from_value(as_string).unwrap();
        prop_assert_eq!(resolve(&a, &selection), resolve(&b, &selection));
    }

    /// Arbitrary text in a price field never fails decoding
    #[test]
    fn garbage_price_never_fails(text in ".*") {
        let value = json!({"id": "1", "name": "Owl", "game": "mm2", "value_nfr": text});
        let item: Result<Item, _> = serde_json::from_value(value);
        prop_assert!(item.is_ok());
    }

    /// Variant codes round-trip through Display and FromStr
    #[test]
    fn variant_key_roundtrip(index in 0usize..12) {
        let key = VariantKey::iter().nth(index).unwrap();
        let parsed: VariantKey = key.to_string().parse().unwrap();
        prop_assert_eq!(key, parsed);
        let by_field: VariantKey = key.field_name().parse().unwrap();
        prop_assert_eq!(key, by_field);
    }
}
