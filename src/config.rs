//! Runtime configuration
//!
//! Read once from the environment at startup:
//! - `NUTRILENS_DATABASE_PATH`: SQLite file (default `<project>/data/nutrilens.db`)
//! - `NUTRILENS_WEIGHT_POLICY`: `adaptive` (default) or `fixed`
//! - `NUTRILENS_PROTEIN_BAND`: `standard` (default, 10-35%) or `strict` (20-35%)

use std::path::PathBuf;

use crate::scoring::{IdealMacros, ProteinBand, ScoringConfig, ScoringWeights, WeightPolicy};

pub const DATABASE_PATH_VAR: &str = "NUTRILENS_DATABASE_PATH";
pub const WEIGHT_POLICY_VAR: &str = "NUTRILENS_WEIGHT_POLICY";
pub const PROTEIN_BAND_VAR: &str = "NUTRILENS_PROTEIN_BAND";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup(DATABASE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let policy = match lookup(WEIGHT_POLICY_VAR) {
            Some(raw) => WeightPolicy::from_str(&raw).unwrap_or_else(|| {
                tracing::warn!("Unknown {} '{}', using adaptive", WEIGHT_POLICY_VAR, raw);
                WeightPolicy::default()
            }),
            None => WeightPolicy::default(),
        };

        let protein_band = match lookup(PROTEIN_BAND_VAR) {
            Some(raw) => ProteinBand::from_str(&raw).unwrap_or_else(|| {
                tracing::warn!("Unknown {} '{}', using standard", PROTEIN_BAND_VAR, raw);
                ProteinBand::default()
            }),
            None => ProteinBand::default(),
        };

        Self {
            database_path,
            scoring: ScoringConfig {
                weights: ScoringWeights::BASE,
                ideal_macros: IdealMacros::for_band(protein_band),
                policy,
            },
        }
    }
}

/// `data/nutrilens.db` next to the project root, or the current directory
pub fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("nutrilens.db");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.scoring, ScoringConfig::default());
        assert!(cfg.database_path.ends_with("data/nutrilens.db"));
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            (DATABASE_PATH_VAR, "/tmp/meals.db"),
            (WEIGHT_POLICY_VAR, "fixed"),
            (PROTEIN_BAND_VAR, "strict"),
        ]);
        assert_eq!(cfg.database_path, PathBuf::from("/tmp/meals.db"));
        assert_eq!(cfg.scoring.policy, WeightPolicy::Fixed);
        assert_eq!(cfg.scoring.ideal_macros.protein.min, 20.0);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let cfg = config(&[(WEIGHT_POLICY_VAR, "weird"), (PROTEIN_BAND_VAR, "loose")]);
        assert_eq!(cfg.scoring.policy, WeightPolicy::Adaptive);
        assert_eq!(cfg.scoring.ideal_macros, IdealMacros::default());
    }
}
