use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of bicycle categories a shop can be asked to service.
/// Only `Gravel` and `Ebike` matter for admission; the rest are
/// equivalent as far as the workflow is concerned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BicycleType {
    Road,
    Race,
    Mountain,
    Fixie,
    Gravel,
    Ebike,
}

impl fmt::Display for BicycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BicycleType::Road => write!(f, "ROAD"),
            BicycleType::Race => write!(f, "RACE"),
            BicycleType::Mountain => write!(f, "MOUNTAIN"),
            BicycleType::Fixie => write!(f, "FIXIE"),
            BicycleType::Gravel => write!(f, "GRAVEL"),
            BicycleType::Ebike => write!(f, "EBIKE"),
        }
    }
}

/// A repair order as handed in by a customer. Immutable once created;
/// the shop moves it between collections but never changes it.
/// Equality is structural, so membership checks compare the customer
/// and bicycle type, not object identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Order {
    pub bicycle_type: BicycleType,
    pub customer: String,
}

impl Order {
    pub fn new(bicycle_type: BicycleType, customer: impl Into<String>) -> Self {
        Self {
            bicycle_type,
            customer: customer.into(),
        }
    }
}
