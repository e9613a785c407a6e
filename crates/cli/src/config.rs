//! Runtime configuration read from the environment.

use std::path::PathBuf;

use gildedrose_core::{DomainError, DomainResult};

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const ITEMS_VAR: &str = "GILDED_ROSE_ITEMS";

const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Days to simulate after the initial listing.
    pub days: u32,
    /// JSON item list to load instead of the standard inventory.
    pub items_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            items_path: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let days = match lookup(DAYS_VAR) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                DomainError::validation(format!("{DAYS_VAR}={raw:?} is not a day count: {e}"))
            })?,
            None => {
                tracing::info!(days = DEFAULT_DAYS, "{DAYS_VAR} not set; using default");
                DEFAULT_DAYS
            }
        };

        let items_path = lookup(ITEMS_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { days, items_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SimulationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.days, 2);
        assert!(config.items_path.is_none());
    }

    #[test]
    fn reads_days_and_items_path() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            (DAYS_VAR, " 30 "),
            (ITEMS_VAR, "stock.json"),
        ]))
        .unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.items_path, Some(PathBuf::from("stock.json")));
    }

    #[test]
    fn zero_days_is_allowed() {
        let config = SimulationConfig::from_lookup(lookup_from(&[(DAYS_VAR, "0")])).unwrap();
        assert_eq!(config.days, 0);
    }

    #[test]
    fn blank_items_path_means_standard_inventory() {
        let config = SimulationConfig::from_lookup(lookup_from(&[(ITEMS_VAR, "  ")])).unwrap();
        assert!(config.items_path.is_none());
    }

    #[test]
    fn rejects_non_numeric_days() {
        let err = SimulationConfig::from_lookup(lookup_from(&[(DAYS_VAR, "-3")])).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains(DAYS_VAR)),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
