//! Item catalog loaded from an item API dump.
//!
//! Accepts either the bare array returned by `GET /api/items?game=<name>` or
//! an object wrapping it under `items`. A single bad record never sinks the
//! whole catalog: it is logged and skipped.

use anyhow::{Context, Result as AnyResult};
use std::fs;
use std::path::Path;

use crate::error::{Result, TradeValueError};
use crate::item::Item;
use crate::types::Game;

/// Items available for valuation
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    skipped: usize,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, skipped: 0 }
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(root)
    }

    pub fn from_json_value(root: serde_json::Value) -> Result<Self> {
        let records = match root {
            serde_json::Value::Array(records) => records,
            serde_json::Value::Object(mut map) => match map.remove("items") {
                Some(serde_json::Value::Array(records)) => records,
                _ => {
                    return Err(TradeValueError::catalog(
                        "expected an array of items or an object with an `items` array",
                    ));
                }
            },
            _ => {
                return Err(TradeValueError::catalog(
                    "expected an array of items or an object with an `items` array",
                ));
            }
        };

        let total = records.len();
        let mut items = Vec::with_capacity(total);
        let mut skipped = 0;

        for (index, record) in records.into_iter().enumerate() {
            if !record.is_object() {
                tracing::warn!(index, "skipping catalog record that is not an object");
                skipped += 1;
                continue;
            }
            match serde_json::from_value::<Item>(record) {
                Ok(item) => items.push(item),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping invalid catalog record");
                    skipped += 1;
                }
            }
        }

        tracing::debug!(total, loaded = items.len(), skipped, "catalog parsed");
        Ok(Self { items, skipped })
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse catalog {:?}", path.as_ref()))?;

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records dropped while loading
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn by_game(&self, game: Game) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.game == game)
    }

    /// Look an item up by exact id, then by case-insensitive name.
    ///
    /// With `game` set, only items of that game are considered.
    pub fn find(&self, query: &str, game: Option<Game>) -> Option<&Item> {
        let query = query.trim();
        let in_game = |item: &&Item| game.is_none_or(|g| item.game == g);

        self.items
            .iter()
            .filter(in_game)
            .find(|item| item.id == query)
            .or_else(|| {
                self.items
                    .iter()
                    .filter(in_game)
                    .find(|item| item.name.trim().eq_ignore_ascii_case(query))
            })
    }

    /// Like [`Catalog::find`], but a miss is an error
    pub fn get(&self, query: &str, game: Option<Game>) -> Result<&Item> {
        self.find(query, game)
            .ok_or_else(|| TradeValueError::item_not_found(query.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": "1", "name": "Shadow Dragon", "game": "adopt_me", "rap_value": 1000, "value_nfr": "5000"},
        {"id": 2, "name": "Chroma Lightbringer", "game": "mm2", "rap_value": 300},
        {"id": "3", "name": "Bat Dragon", "game": "adopt_me"},
        "not an item",
        {"name": "No Id", "game": "sab"},
        {"id": "5", "name": "Unknown Game", "game": "pet_sim"}
    ]"#;

    #[test]
    fn test_parse_skips_bad_records() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.skipped(), 3);
    }

    #[test]
    fn test_parse_wrapped_items() {
        let catalog =
            Catalog::from_json_str(r#"{"items": [{"id": "1", "name": "Owl", "game": "adopt_me"}]}"#)
                .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = Catalog::from_json_str(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, TradeValueError::Catalog(_)));

        let err = Catalog::from_json_str("42").unwrap_err();
        assert!(matches!(err, TradeValueError::Catalog(_)));

        let err = Catalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, TradeValueError::Json(_)));
    }

    #[test]
    fn test_find_by_id_then_name() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.find("2", None).unwrap().name, "Chroma Lightbringer");
        assert_eq!(catalog.find("shadow dragon", None).unwrap().id, "1");
        assert_eq!(catalog.find("  Bat Dragon ", None).unwrap().id, "3");
        assert!(catalog.find("Frost Dragon", None).is_none());
    }

    #[test]
    fn test_find_respects_game() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert!(catalog.find("Shadow Dragon", Some(Game::Mm2)).is_none());
        assert!(catalog.find("Shadow Dragon", Some(Game::AdoptMe)).is_some());
    }

    #[test]
    fn test_get_reports_missing_item() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let err = catalog.get("Frost Dragon", None).unwrap_err();
        assert!(matches!(err, TradeValueError::ItemNotFound(q) if q == "Frost Dragon"));
    }

    #[test]
    fn test_by_game() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.by_game(Game::AdoptMe).count(), 2);
        assert_eq!(catalog.by_game(Game::Sab).count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = Catalog::load_from_file("/nonexistent/items.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
