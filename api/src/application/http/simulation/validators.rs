use std::str::FromStr;

use plately_core::domain::simulation::value_objects::{
    DEFAULT_PED_PERCENTAGE_CHANGES, DEFAULT_XED_PERCENTAGE_CHANGE, MAX_PERCENTAGE_CHANGE,
    MIN_PERCENTAGE_CHANGE,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SimulatePriceChangeValidator {
    #[validate(length(min = 1, message = "item_id is required"))]
    pub item_id: String,

    #[validate(range(min = 0.0, message = "new_price must be a non-negative number"))]
    pub new_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalculateElasticitiesValidator {
    /// `PED` or `XED`, case-insensitive.
    #[serde(rename = "type", default)]
    pub elasticity_type: String,

    #[serde(default)]
    pub item_id_vary: Option<String>,

    /// Comma-separated relative price changes, e.g. `-0.2,-0.1,0.1,0.2`.
    #[serde(default)]
    pub ped_price_changes: Option<String>,

    #[serde(default)]
    pub target_item_id: Option<String>,

    #[serde(default)]
    pub affecting_item_id: Option<String>,

    #[serde(default)]
    pub xed_price_change: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElasticityType {
    Ped,
    Xed,
}

impl FromStr for ElasticityType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PED" => Ok(ElasticityType::Ped),
            "XED" => Ok(ElasticityType::Xed),
            other => Err(ApiError::BadRequest(format!(
                "Invalid elasticity type: {other}. Must be 'PED' or 'XED'."
            ))),
        }
    }
}

fn parse_percentage_change(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))?;

    if value > MIN_PERCENTAGE_CHANGE && value < MAX_PERCENTAGE_CHANGE {
        Ok(value)
    } else {
        Err(format!(
            "{value} is outside the allowed range ({MIN_PERCENTAGE_CHANGE}, {MAX_PERCENTAGE_CHANGE})"
        ))
    }
}

pub fn parse_ped_price_changes(raw: Option<&str>) -> Result<Vec<f64>, ApiError> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(DEFAULT_PED_PERCENTAGE_CHANGES.to_vec());
    };

    raw.split(',')
        .map(parse_percentage_change)
        .collect::<Result<Vec<f64>, String>>()
        .map_err(|e| {
            ApiError::BadRequest(format!(
                "Invalid format for PED price changes: {e}. Expect comma-separated floats."
            ))
        })
}

pub fn parse_xed_price_change(raw: Option<&str>) -> Result<f64, ApiError> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(DEFAULT_XED_PERCENTAGE_CHANGE);
    };

    parse_percentage_change(raw).map_err(|e| {
        ApiError::BadRequest(format!(
            "Invalid format for XED price change: {e}. Expect a single float."
        ))
    })
}

/// Required id field of a PED/XED request.
pub fn required_id(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("Missing required field '{field}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elasticity_type_is_case_insensitive() {
        assert_eq!("ped".parse::<ElasticityType>().unwrap(), ElasticityType::Ped);
        assert_eq!(" Xed ".parse::<ElasticityType>().unwrap(), ElasticityType::Xed);
        assert!("GED".parse::<ElasticityType>().is_err());
        assert!("".parse::<ElasticityType>().is_err());
    }

    #[test]
    fn test_parse_ped_price_changes() {
        assert_eq!(
            parse_ped_price_changes(None).unwrap(),
            vec![-0.2, -0.1, 0.1, 0.2]
        );
        assert_eq!(
            parse_ped_price_changes(Some(" -0.5, 0.25 ")).unwrap(),
            vec![-0.5, 0.25]
        );

        let err = parse_ped_price_changes(Some("0.1,abc")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid format for PED price changes:"));
        assert!(parse_ped_price_changes(Some("0.1,-1")).is_err());
        assert!(parse_ped_price_changes(Some("10")).is_err());
    }

    #[test]
    fn test_parse_xed_price_change() {
        assert_eq!(parse_xed_price_change(None).unwrap(), 0.1);
        assert_eq!(parse_xed_price_change(Some("-0.25")).unwrap(), -0.25);
        assert!(parse_xed_price_change(Some("0.1,0.2")).is_err());
    }

    #[test]
    fn test_required_id() {
        assert_eq!(required_id(Some(" coke ".into()), "x").unwrap(), "coke");
        assert!(required_id(Some("".into()), "x").is_err());
        assert!(required_id(None, "item_id_vary").is_err());
    }
}
