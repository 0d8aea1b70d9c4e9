//! Override rule: a chaotic-conflict profile that bypasses distance search.
//!
//! The rule fires when the gate holds AND at least one conflict pair holds,
//! each pair being a conjunction of two axis tests:
//!
//! ```text
//! chaos >= CHAOS_GATE && (
//!       (energy >= HIGH_THRESHOLD && social <= LOW_THRESHOLD)
//!    || (bitter >= HIGH_THRESHOLD && trendy >= HIGH_THRESHOLD)
//!    || (energy <= LOW_THRESHOLD  && trendy >= HIGH_THRESHOLD)
//! )
//! ```

use serde::{Deserialize, Serialize};

use super::vector::{Axis, TraitVector};

/// Minimum chaos for the rule to be considered at all.
pub const CHAOS_GATE: f64 = 8.0;
/// An axis at or above this counts as "high" in a conflict pair.
pub const HIGH_THRESHOLD: f64 = 8.0;
/// An axis at or below this counts as "low" in a conflict pair.
pub const LOW_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    AtLeast,
    AtMost,
}

impl Comparator {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::AtLeast => value >= threshold,
            Comparator::AtMost => value <= threshold,
        }
    }
}

/// A single `(axis, comparator, threshold)` test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub axis: Axis,
    pub comparator: Comparator,
    pub threshold: f64,
}

impl Condition {
    pub const fn at_least(axis: Axis, threshold: f64) -> Self {
        Self { axis, comparator: Comparator::AtLeast, threshold }
    }

    pub const fn at_most(axis: Axis, threshold: f64) -> Self {
        Self { axis, comparator: Comparator::AtMost, threshold }
    }

    pub fn holds(&self, vector: &TraitVector) -> bool {
        self.comparator.holds(vector.get(self.axis), self.threshold)
    }
}

/// Two tests on distinct axes that must both hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub first: Condition,
    pub second: Condition,
}

impl Conflict {
    pub const fn new(first: Condition, second: Condition) -> Self {
        Self { first, second }
    }

    pub fn holds(&self, vector: &TraitVector) -> bool {
        self.first.holds(vector) && self.second.holds(vector)
    }
}

/// Gate AND any conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub gate: Condition,
    pub conflicts: Vec<Conflict>,
}

impl Default for OverrideRule {
    fn default() -> Self {
        Self {
            gate: Condition::at_least(Axis::Chaos, CHAOS_GATE),
            conflicts: vec![
                // wired but antisocial
                Conflict::new(
                    Condition::at_least(Axis::Energy, HIGH_THRESHOLD),
                    Condition::at_most(Axis::Social, LOW_THRESHOLD),
                ),
                // bitter purist chasing trends
                Conflict::new(
                    Condition::at_least(Axis::Bitter, HIGH_THRESHOLD),
                    Condition::at_least(Axis::Trendy, HIGH_THRESHOLD),
                ),
                // drained but trendy
                Conflict::new(
                    Condition::at_most(Axis::Energy, LOW_THRESHOLD),
                    Condition::at_least(Axis::Trendy, HIGH_THRESHOLD),
                ),
            ],
        }
    }
}

impl OverrideRule {
    /// Thresholds are tested against the clamped vector.
    pub fn evaluate(&self, vector: &TraitVector) -> bool {
        let vector = &vector.clamp();
        self.gate.holds(vector) && self.conflicts.iter().any(|c| c.holds(vector))
    }
}

/// Evaluate the default rule.
pub fn is_override(vector: &TraitVector) -> bool {
    OverrideRule::default().evaluate(vector)
}
