use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

const UNIT_TOLERANCE: f64 = 1e-9;

/// Result of an arc elasticity computation.
///
/// Serialized as a JSON number, `"inf"`, `"-inf"` or `null` (undefined).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Elasticity {
    Finite(f64),
    PositiveInfinity,
    NegativeInfinity,
    Undefined,
}

impl Elasticity {
    pub fn value(&self) -> Option<f64> {
        match self {
            Elasticity::Finite(v) => Some(*v),
            Elasticity::PositiveInfinity => Some(f64::INFINITY),
            Elasticity::NegativeInfinity => Some(f64::NEG_INFINITY),
            Elasticity::Undefined => None,
        }
    }
}

impl fmt::Display for Elasticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elasticity::Finite(v) => write!(f, "{v:.4}"),
            Elasticity::PositiveInfinity => f.write_str("inf"),
            Elasticity::NegativeInfinity => f.write_str("-inf"),
            Elasticity::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for Elasticity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Elasticity::Finite(v) => serializer.serialize_f64(*v),
            Elasticity::PositiveInfinity => serializer.serialize_str("inf"),
            Elasticity::NegativeInfinity => serializer.serialize_str("-inf"),
            Elasticity::Undefined => serializer.serialize_none(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ElasticityRepr {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Elasticity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<ElasticityRepr>::deserialize(deserializer)? {
            None => Ok(Elasticity::Undefined),
            Some(ElasticityRepr::Number(v)) => Ok(Elasticity::Finite(v)),
            Some(ElasticityRepr::Text(text)) => match text.as_str() {
                "inf" => Ok(Elasticity::PositiveInfinity),
                "-inf" => Ok(Elasticity::NegativeInfinity),
                other => Err(serde::de::Error::custom(format!(
                    "unknown elasticity value '{other}'"
                ))),
            },
        }
    }
}

/// Interpretation of an own-price elasticity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DemandClassification {
    PerfectlyInelastic,
    Inelastic,
    UnitElastic,
    Elastic,
    PerfectlyElastic,
    Undefined,
}

impl DemandClassification {
    pub fn from_elasticity(elasticity: Elasticity) -> Self {
        match elasticity {
            Elasticity::Undefined => DemandClassification::Undefined,
            Elasticity::PositiveInfinity | Elasticity::NegativeInfinity => {
                DemandClassification::PerfectlyElastic
            }
            Elasticity::Finite(v) => {
                let magnitude = v.abs();
                if magnitude == 0.0 {
                    DemandClassification::PerfectlyInelastic
                } else if (magnitude - 1.0).abs() <= UNIT_TOLERANCE {
                    DemandClassification::UnitElastic
                } else if magnitude < 1.0 {
                    DemandClassification::Inelastic
                } else {
                    DemandClassification::Elastic
                }
            }
        }
    }

    /// What a price increase does to the item's revenue.
    pub fn revenue_hint(&self) -> &'static str {
        match self {
            DemandClassification::PerfectlyInelastic | DemandClassification::Inelastic => {
                "a price increase raises revenue"
            }
            DemandClassification::UnitElastic => "a price change leaves revenue roughly unchanged",
            DemandClassification::Elastic | DemandClassification::PerfectlyElastic => {
                "a price increase lowers revenue"
            }
            DemandClassification::Undefined => "not enough demand data to tell",
        }
    }
}

/// Interpretation of a cross-price elasticity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemRelationship {
    Substitutes,
    Complements,
    Independent,
    Undefined,
}

impl ItemRelationship {
    pub fn from_elasticity(elasticity: Elasticity) -> Self {
        match elasticity.value() {
            None => ItemRelationship::Undefined,
            Some(v) if v > 0.0 => ItemRelationship::Substitutes,
            Some(v) if v < 0.0 => ItemRelationship::Complements,
            Some(_) => ItemRelationship::Independent,
        }
    }
}
