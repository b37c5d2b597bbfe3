//! Impact metric normalization
//!
//! Authors label metrics freely ("Trees", "Trees Planted", "hectares").
//! Views look values up by a small set of canonical keys, so labels are
//! canonicalized and mapped through a synonym table first.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::content::models::MetricEntry;

pub const TREES_PLANTED: &str = "trees_planted";
pub const HECTARES_RESTORED: &str = "hectares_restored";
pub const FARMERS_TRAINED: &str = "farmers_trained";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9_]").unwrap();
}

/// Canonical forms that map onto a shared key
const SYNONYMS: &[(&str, &str)] = &[
    ("trees", TREES_PLANTED),
    ("trees_planted", TREES_PLANTED),
    ("hectares", HECTARES_RESTORED),
    ("hectares_restored", HECTARES_RESTORED),
    ("farmers", FARMERS_TRAINED),
    ("farmers_trained", FARMERS_TRAINED),
];

/// Lowercase, collapse whitespace runs to `_`, drop anything outside `[a-z0-9_]`
pub fn canonical_label(label: &str) -> String {
    let lower = label.to_lowercase();
    let underscored = WHITESPACE.replace_all(&lower, "_");
    DISALLOWED.replace_all(&underscored, "").into_owned()
}

/// The output key for a label: its synonym target, or the canonical form
pub fn metric_key(label: &str) -> String {
    let canonical = canonical_label(label);
    SYNONYMS
        .iter()
        .find(|(from, _)| *from == canonical)
        .map(|(_, to)| to.to_string())
        .unwrap_or(canonical)
}

/// Two metrics that landed on the same key; the later one won
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCollision {
    pub key: String,
    pub previous: f64,
    pub replacement: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedMetrics {
    pub values: IndexMap<String, f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collisions: Vec<MetricCollision>,
}

impl NormalizedMetrics {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn trees_planted(&self) -> Option<f64> {
        self.get(TREES_PLANTED)
    }

    pub fn hectares_restored(&self) -> Option<f64> {
        self.get(HECTARES_RESTORED)
    }

    pub fn farmers_trained(&self) -> Option<f64> {
        self.get(FARMERS_TRAINED)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Map metric entries to canonical keys.
///
/// Entries without a label or value are skipped; zero is a value. When two
/// entries share a key the later one wins and the collision is recorded.
pub fn normalize(metrics: &[MetricEntry]) -> NormalizedMetrics {
    let mut out = NormalizedMetrics::default();

    for metric in metrics {
        let (Some(label), Some(value)) = (metric.label.as_deref(), metric.value) else {
            continue;
        };
        let key = metric_key(label);
        if key.is_empty() {
            tracing::debug!("Skipping metric with unusable label {:?}", label);
            continue;
        }

        if let Some(previous) = out.values.insert(key.clone(), value) {
            tracing::debug!(
                "Metric `{}` overwritten: {} -> {} (label {:?})",
                key,
                previous,
                value,
                label
            );
            out.collisions.push(MetricCollision {
                key,
                previous,
                replacement: value,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label() {
        assert_eq!(canonical_label("Trees Planted"), "trees_planted");
        assert_eq!(canonical_label("  CO2   Captured (t) "), "_co2_captured_t_");
        assert_eq!(canonical_label("Schools\tReached"), "schools_reached");
        assert_eq!(canonical_label("!!!"), "");
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(metric_key("Trees"), TREES_PLANTED);
        assert_eq!(metric_key("HECTARES"), HECTARES_RESTORED);
        assert_eq!(metric_key("Farmers Trained"), FARMERS_TRAINED);
        assert_eq!(metric_key("Nurseries built"), "nurseries_built");
    }

    #[test]
    fn test_last_write_wins() {
        let metrics = vec![
            MetricEntry::new("Trees", 10.0),
            MetricEntry::new("trees_planted", 20.0),
        ];
        let normalized = normalize(&metrics);
        assert_eq!(normalized.values.len(), 1);
        assert_eq!(normalized.trees_planted(), Some(20.0));
        assert_eq!(
            normalized.collisions,
            vec![MetricCollision {
                key: TREES_PLANTED.to_string(),
                previous: 10.0,
                replacement: 20.0,
            }]
        );
    }

    #[test]
    fn test_edge_whitespace_is_not_a_synonym() {
        assert_eq!(canonical_label(" Trees"), "_trees");
        assert_eq!(metric_key("Trees "), "trees_");

        let metrics = vec![
            MetricEntry::new(" Trees", 5.0),
            MetricEntry::new("Trees ", 7.0),
            MetricEntry::new("Trees", 9.0),
        ];
        let normalized = normalize(&metrics);
        assert_eq!(normalized.get("_trees"), Some(5.0));
        assert_eq!(normalized.get("trees_"), Some(7.0));
        assert_eq!(normalized.trees_planted(), Some(9.0));
        assert!(normalized.collisions.is_empty());
    }

    #[test]
    fn test_zero_is_kept() {
        let normalized = normalize(&[MetricEntry::new("Hectares", 0.0)]);
        assert_eq!(normalized.hectares_restored(), Some(0.0));
    }

    #[test]
    fn test_incomplete_entries_skipped() {
        let metrics = vec![
            MetricEntry {
                label: None,
                value: Some(5.0),
            },
            MetricEntry {
                label: Some("Farmers".to_string()),
                value: None,
            },
            MetricEntry::new("???", 3.0),
            MetricEntry::new("Seedlings", 1200.0),
        ];
        let normalized = normalize(&metrics);
        assert_eq!(normalized.farmers_trained(), None);
        assert_eq!(normalized.get("seedlings"), Some(1200.0));
        assert_eq!(normalized.values.len(), 1);
        assert!(normalized.collisions.is_empty());
    }
}
