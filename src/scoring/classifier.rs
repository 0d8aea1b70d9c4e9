//! Nearest-target classification
//!
//! Maps a trait vector onto a category: the override rule is checked first,
//! otherwise the closest ordinary profile under a weighted squared distance
//! wins. Ties keep the earliest profile in list order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::category::{CategoryKey, CategoryProfile, OVERRIDE_CATEGORY};
use super::override_rule::OverrideRule;
use super::vector::{Axis, TraitVector};
use crate::error::ScoringError;

/// Per-axis distance weights. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Axis, f64>", into = "BTreeMap<Axis, f64>")]
pub struct AxisWeights([f64; 5]);

impl Default for AxisWeights {
    /// Energy and bitterness dominate, chaos counts for less.
    fn default() -> Self {
        Self([1.2, 1.0, 1.1, 1.0, 0.6])
    }
}

impl AxisWeights {
    /// Every axis weighted 1.0.
    pub fn uniform() -> Self {
        Self([1.0; 5])
    }

    /// Build from a partial map; axes not listed get weight 1.0.
    pub fn from_partial<I>(weights: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = (Axis, f64)>,
    {
        weights
            .into_iter()
            .try_fold(Self::uniform(), |acc, (axis, weight)| acc.with(axis, weight))
    }

    pub fn with(mut self, axis: Axis, weight: f64) -> Result<Self, ScoringError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ScoringError::InvalidWeight { axis, value: weight });
        }
        self.0[axis.index()] = weight;
        Ok(self)
    }

    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }
}

impl TryFrom<BTreeMap<Axis, f64>> for AxisWeights {
    type Error = ScoringError;

    fn try_from(map: BTreeMap<Axis, f64>) -> Result<Self, Self::Error> {
        Self::from_partial(map)
    }
}

impl From<AxisWeights> for BTreeMap<Axis, f64> {
    fn from(weights: AxisWeights) -> Self {
        Axis::ALL.iter().map(|&axis| (axis, weights.get(axis))).collect()
    }
}

/// `Σ weight[axis] * (a[axis] - b[axis])²`
pub fn weighted_distance(a: &TraitVector, b: &TraitVector, weights: &AxisWeights) -> f64 {
    Axis::ALL
        .iter()
        .map(|&axis| {
            let diff = a.get(axis) - b.get(axis);
            weights.get(axis) * diff * diff
        })
        .sum()
}

/// Stateless classifier configuration. Cheap to clone, safe to share.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    weights: AxisWeights,
    override_key: CategoryKey,
    rule: OverrideRule,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(OVERRIDE_CATEGORY)
    }
}

impl Classifier {
    pub fn new(override_key: CategoryKey) -> Self {
        Self {
            weights: AxisWeights::default(),
            override_key,
            rule: OverrideRule::default(),
        }
    }

    pub fn with_weights(mut self, weights: AxisWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_rule(mut self, rule: OverrideRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn weights(&self) -> &AxisWeights {
        &self.weights
    }

    /// Classify `vector` against `profiles`.
    ///
    /// The vector is clamped first, so out-of-range or NaN axes score as
    /// their nearest bound. The override profile is never a distance
    /// candidate, even if listed.
    pub fn classify(&self, vector: &TraitVector, profiles: &[CategoryProfile]) -> Result<CategoryKey, ScoringError> {
        let vector = &vector.clamp();
        if self.rule.evaluate(vector) {
            debug!(key = %self.override_key, "override rule fired");
            return Ok(self.override_key);
        }

        let mut best: Option<(CategoryKey, f64)> = None;
        for profile in profiles.iter().filter(|p| p.key != self.override_key) {
            let score = weighted_distance(vector, &profile.target, &self.weights);
            // strict comparison: an equal later score never displaces the current best
            let is_better = best.map_or(true, |(_, best_score)| score < best_score);
            if is_better {
                best = Some((profile.key, score));
            }
        }

        match best {
            Some((key, score)) => {
                debug!(key = %key, distance = score, "nearest profile selected");
                Ok(key)
            }
            None => Err(ScoringError::EmptyCandidateSet { override_key: self.override_key }),
        }
    }
}

/// Classify with the default override rule.
pub fn classify(
    vector: &TraitVector,
    profiles: &[CategoryProfile],
    weights: &AxisWeights,
    override_key: CategoryKey,
) -> Result<CategoryKey, ScoringError> {
    Classifier::new(override_key)
        .with_weights(*weights)
        .classify(vector, profiles)
}
