use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::vector::TraitVector;
use crate::error::UnknownCategoryKey;

/// Outcome categories. `SecretChair` is reserved for the override rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    MatchaLatte,
    IcedMilkCoffee,
    HotBlack,
    Americano,
    Cappuccino,
    Espresso,
    IcedWater,
    BreakfastSandwich,
    Chai,
    AvocadoToast,
    Croissant,
    SecretChair,
}

/// Category returned when the override rule fires.
pub const OVERRIDE_CATEGORY: CategoryKey = CategoryKey::SecretChair;
/// Category shown when a shared link carries nothing usable.
pub const DEFAULT_CATEGORY: CategoryKey = CategoryKey::MatchaLatte;

impl CategoryKey {
    pub const ALL: [CategoryKey; 12] = [
        CategoryKey::MatchaLatte,
        CategoryKey::IcedMilkCoffee,
        CategoryKey::HotBlack,
        CategoryKey::Americano,
        CategoryKey::Cappuccino,
        CategoryKey::Espresso,
        CategoryKey::IcedWater,
        CategoryKey::BreakfastSandwich,
        CategoryKey::Chai,
        CategoryKey::AvocadoToast,
        CategoryKey::Croissant,
        CategoryKey::SecretChair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::MatchaLatte => "matcha_latte",
            CategoryKey::IcedMilkCoffee => "iced_milk_coffee",
            CategoryKey::HotBlack => "hot_black",
            CategoryKey::Americano => "americano",
            CategoryKey::Cappuccino => "cappuccino",
            CategoryKey::Espresso => "espresso",
            CategoryKey::IcedWater => "iced_water",
            CategoryKey::BreakfastSandwich => "breakfast_sandwich",
            CategoryKey::Chai => "chai",
            CategoryKey::AvocadoToast => "avocado_toast",
            CategoryKey::Croissant => "croissant",
            CategoryKey::SecretChair => "secret_chair",
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = UnknownCategoryKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownCategoryKey(s.to_string()))
    }
}

/// A category's canonical position in trait space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub key: CategoryKey,
    pub target: TraitVector,
}

impl CategoryProfile {
    pub fn new(key: CategoryKey, target: TraitVector) -> Self {
        Self { key, target }
    }
}
