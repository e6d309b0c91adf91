//! Similarity tier metadata for the demo legend.

use plagcheck::SimilarityTier;
use serde::Serialize;

/// Serializable description of one similarity tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub name: &'static str,
    /// Scores strictly above this fall in the tier (or a higher one).
    pub lower_bound: f64,
    pub message: &'static str,
    pub colour: &'static str,
}

/// All tiers, highest first.
pub static TIERS: &[(&str, f64, SimilarityTier)] = &[
    ("High", 70.0, SimilarityTier::High),
    ("Moderate", 40.0, SimilarityTier::Moderate),
    ("Low", 15.0, SimilarityTier::Low),
    ("Very low", f64::NEG_INFINITY, SimilarityTier::VeryLow),
];

pub fn tier_infos() -> Vec<TierInfo> {
    TIERS
        .iter()
        .map(|&(name, lower_bound, tier)| TierInfo {
            name,
            lower_bound: lower_bound.max(0.0),
            message: tier.message(),
            colour: tier.colour(),
        })
        .collect()
}
