//! Metric card view models.
//!
//! A [`MetricEntry`] pairs a label with a displayed value inside a tinted
//! card. Entries are created per render from the literal configuration list
//! below and never mutated.

use crate::theme::{Rgb, Theme};

/// Caption shown on every metric card between label and value.
pub const METRIC_CAPTION: &str = "Current Value";

/// A single labeled value displayed in a tinted card.
///
/// Pure display data. Empty labels or values render as empty text; no
/// validation beyond presence of the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricEntry {
    pub label: String,
    pub value: String,
    /// Card background tint.
    pub accent: Rgb,
}

impl MetricEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>, accent: Rgb) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            accent,
        }
    }
}

/// The cluster status summary row: four literal entries tinted from the
/// theme's metric accents.
pub fn cluster_status_row(theme: &Theme) -> Vec<MetricEntry> {
    let [memory, cpu, node, deployment] = theme.metric_accents;
    vec![
        MetricEntry::new("Memory", "10%", memory),
        MetricEntry::new("CPU", "50%", cpu),
        MetricEntry::new("Node Status", "Online", node),
        MetricEntry::new("Deployment Status", "70%", deployment),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_status_row_has_four_entries() {
        let row = cluster_status_row(&Theme::light());
        assert_eq!(row.len(), 4);
        let labels: Vec<&str> = row.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Memory", "CPU", "Node Status", "Deployment Status"]
        );
    }

    #[test]
    fn test_cluster_status_entries_are_non_empty() {
        for entry in cluster_status_row(&Theme::light()) {
            assert!(!entry.label.is_empty());
            assert!(!entry.value.is_empty());
        }
    }

    #[test]
    fn test_cluster_status_accents_are_pairwise_distinct() {
        let row = cluster_status_row(&Theme::light());
        for (i, a) in row.iter().enumerate() {
            for b in &row[i + 1..] {
                assert_ne!(a.accent, b.accent, "{} and {} share a tint", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_entries_allow_empty_fields() {
        // Absent text renders as empty, never an error.
        let entry = MetricEntry::new("", "", Rgb::new(0, 0, 0));
        assert!(entry.label.is_empty());
        assert!(entry.value.is_empty());
    }
}
