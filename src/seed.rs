//! Initial store contents from `--seed` files and `--sample`.

use crate::store::InvestmentStore;
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub value: i64,
}

pub fn parse_seed(json: &str) -> Result<Vec<SeedEntry>> {
    serde_json::from_str(json).wrap_err("Seed file must be a JSON array of {\"name\", \"value\"} objects")
}

pub fn read_seed_file(path: &Path) -> Result<Vec<SeedEntry>> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed(&json).wrap_err_with(|| format!("Invalid seed file {}", path.display()))
}

pub fn sample_entries() -> Vec<SeedEntry> {
    [("CDB", 100), ("Tesouro Selic", 500), ("LCI", 250)]
        .into_iter()
        .map(|(name, value)| SeedEntry {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Adds every entry with a non-blank name. Returns how many were added.
pub fn load_into(store: &dyn InvestmentStore, entries: &[SeedEntry]) -> usize {
    let mut added = 0;
    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            tracing::warn!(value = entry.value, "seed: skipping entry with empty name");
            continue;
        }
        store.add(name, entry.value);
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_valid_array() {
        let entries = parse_seed(r#"[{"name": "CDB", "value": 100}, {"name": "LCI", "value": -3}]"#)
            .unwrap();
        assert_eq!(
            entries,
            vec![
                SeedEntry { name: "CDB".to_string(), value: 100 },
                SeedEntry { name: "LCI".to_string(), value: -3 },
            ]
        );
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_fractional_value() {
        assert!(parse_seed(r#"[{"name": "CDB", "value": 10.5}]"#).is_err());
    }

    #[test]
    fn parse_rejects_missing_field() {
        assert!(parse_seed(r#"[{"name": "CDB"}]"#).is_err());
    }

    #[test]
    fn read_missing_file_errors() {
        let err = read_seed_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(format!("{err}").contains("Failed to read seed file"));
    }

    #[test]
    fn load_skips_blank_names_and_trims() {
        let store = MemoryStore::new();
        let entries = vec![
            SeedEntry { name: "  CDB ".to_string(), value: 100 },
            SeedEntry { name: "   ".to_string(), value: 1 },
        ];
        assert_eq!(load_into(&store, &entries), 1);
        let items = store.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "CDB");
    }

    #[test]
    fn sample_loads_in_order() {
        let store = MemoryStore::new();
        assert_eq!(load_into(&store, &sample_entries()), 3);
        let names: Vec<String> = store.snapshot().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["CDB", "Tesouro Selic", "LCI"]);
    }
}
