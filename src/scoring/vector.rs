//! Trait space: the five scoring axes, the bounded trait vector and the
//! sparse per-option deltas that move it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower bound of every axis.
pub const AXIS_MIN: f64 = 0.0;
/// Upper bound of every axis.
pub const AXIS_MAX: f64 = 10.0;

/// The fixed scoring dimensions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Energy,
    Trendy,
    Bitter,
    Social,
    Chaos,
}

impl Axis {
    pub const ALL: [Axis; 5] = [Axis::Energy, Axis::Trendy, Axis::Bitter, Axis::Social, Axis::Chaos];

    pub fn index(&self) -> usize {
        match self {
            Axis::Energy => 0,
            Axis::Trendy => 1,
            Axis::Bitter => 2,
            Axis::Social => 3,
            Axis::Chaos => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Energy => "energy",
            Axis::Trendy => "trendy",
            Axis::Bitter => "bitter",
            Axis::Social => "social",
            Axis::Chaos => "chaos",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A point in trait space.
///
/// Values handed out by the builder and accepted as profile targets are
/// always within `[AXIS_MIN, AXIS_MAX]`. Fields are public and unchecked, so
/// the classifier and override rule clamp whatever they are given. Axes
/// missing from serialized input default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitVector {
    pub energy: f64,
    pub trendy: f64,
    pub bitter: f64,
    pub social: f64,
    pub chaos: f64,
}

impl TraitVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Energy => self.energy,
            Axis::Trendy => self.trendy,
            Axis::Bitter => self.bitter,
            Axis::Social => self.social,
            Axis::Chaos => self.chaos,
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::Energy => &mut self.energy,
            Axis::Trendy => &mut self.trendy,
            Axis::Bitter => &mut self.bitter,
            Axis::Social => &mut self.social,
            Axis::Chaos => &mut self.chaos,
        }
    }

    /// Returns a copy with `axis` set to `value` (unclamped).
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        *self.slot_mut(axis) = value;
        self
    }

    /// Clamp every axis into `[AXIS_MIN, AXIS_MAX]`. NaN collapses to the lower bound.
    pub fn clamp(&self) -> Self {
        let mut out = *self;
        for axis in Axis::ALL {
            *out.slot_mut(axis) = clamp_score(self.get(axis));
        }
        out
    }

    /// One accumulation step: add the delta, then clamp.
    pub fn apply(&self, delta: &ChoiceDelta) -> Self {
        let mut raw = *self;
        for (axis, amount) in delta.iter() {
            *raw.slot_mut(axis) += amount;
        }
        raw.clamp()
    }

    pub fn is_bounded(&self) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| (AXIS_MIN..=AXIS_MAX).contains(&self.get(axis)))
    }
}

fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        AXIS_MIN
    } else {
        value.clamp(AXIS_MIN, AXIS_MAX)
    }
}

/// Free-function form of [`TraitVector::clamp`].
pub fn clamp(vector: &TraitVector) -> TraitVector {
    vector.clamp()
}

/// Sparse signed adjustment carried by an answer option.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceDelta(BTreeMap<Axis, f64>);

impl ChoiceDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, axis: Axis, amount: f64) -> Self {
        self.0.insert(axis, amount);
        self
    }

    /// Adjustment for `axis`; absent axes contribute nothing.
    pub fn get(&self, axis: Axis) -> f64 {
        self.0.get(&axis).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        self.0.iter().map(|(axis, amount)| (*axis, *amount))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Axis, f64)> for ChoiceDelta {
    fn from_iter<I: IntoIterator<Item = (Axis, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds_every_axis() {
        let v = TraitVector::zero()
            .with(Axis::Energy, 14.0)
            .with(Axis::Trendy, -3.5)
            .with(Axis::Bitter, 4.25)
            .with(Axis::Chaos, f64::NAN);

        let clamped = clamp(&v);
        assert_eq!(clamped.energy, 10.0);
        assert_eq!(clamped.trendy, 0.0);
        assert_eq!(clamped.bitter, 4.25);
        assert_eq!(clamped.social, 0.0);
        assert_eq!(clamped.chaos, 0.0);
        assert!(clamped.is_bounded());
        assert!(!v.is_bounded());
    }

    #[test]
    fn test_apply_only_touches_listed_axes() {
        let start = TraitVector::zero().with(Axis::Social, 5.0);
        let delta = ChoiceDelta::new().with(Axis::Energy, 3.0).with(Axis::Chaos, -2.0);

        let next = start.apply(&delta);
        assert_eq!(next.energy, 3.0);
        assert_eq!(next.social, 5.0);
        assert_eq!(next.chaos, 0.0);
    }

    #[test]
    fn test_partial_vector_deserializes_with_zero_defaults() {
        let v: TraitVector = serde_json::from_str(r#"{"energy": 7, "chaos": 2.5}"#).unwrap();
        assert_eq!(v, TraitVector::zero().with(Axis::Energy, 7.0).with(Axis::Chaos, 2.5));
    }

    #[test]
    fn test_delta_serializes_as_axis_map() {
        let delta = ChoiceDelta::new().with(Axis::Trendy, 2.0).with(Axis::Bitter, -1.0);
        let json = serde_json::to_string(&delta).unwrap();
        assert_eq!(json, r#"{"trendy":2.0,"bitter":-1.0}"#);

        let back: ChoiceDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(Axis::Trendy), 2.0);
        assert_eq!(back.get(Axis::Energy), 0.0);
    }

    #[test]
    fn test_axis_order_is_canonical() {
        let names: Vec<&str> = Axis::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["energy", "trendy", "bitter", "social", "chaos"]);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }
}
