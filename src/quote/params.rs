//! Pricing parameters sent along with the extracted text

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hourly labour rate used when the form leaves it blank
pub const DEFAULT_HOURLY_RATE: f64 = 42.0;

/// Parameters for one quote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParameters {
    /// Material identifier as offered by the form (e.g. "acciaio")
    pub material: String,
    /// Raw material price per kg
    pub price_per_kg: f64,
    /// Labour rate per hour
    pub hourly_rate: f64,
    /// Paint price per kg
    pub paint_per_kg: f64,
    pub apply_paint: bool,
    pub include_setup: bool,
    /// Order quantities to price, in the order given
    pub quantities: Vec<u32>,
}

impl QuoteParameters {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            price_per_kg: 0.0,
            hourly_rate: DEFAULT_HOURLY_RATE,
            paint_per_kg: 0.0,
            apply_paint: false,
            include_setup: false,
            quantities: Vec::new(),
        }
    }

    /// Check ranges before anything is sent
    pub fn validate(&self) -> Result<()> {
        if self.material.trim().is_empty() {
            return Err(Error::InvalidParameters {
                reason: "material must not be empty".to_string(),
            });
        }

        for (name, value) in [
            ("pricePerKg", self.price_per_kg),
            ("hourlyRate", self.hourly_rate),
            ("paintPerKg", self.paint_per_kg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameters {
                    reason: format!("{} must be a number >= 0, got {}", name, value),
                });
            }
        }

        if self.quantities.contains(&0) {
            return Err(Error::InvalidParameters {
                reason: "quantities must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse a comma-separated quantity list.
///
/// Entries are read like JavaScript `parseInt(s, 10)`: leading sign and
/// digits count, anything after them is ignored. Entries that yield no
/// number, are not positive, or do not fit in `u32` are dropped.
pub fn parse_quantities(input: &str) -> Vec<u32> {
    input
        .split(',')
        .filter_map(|entry| parse_int_prefix(entry.trim()))
        .filter(|&n| n > 0)
        .filter_map(|n| u32::try_from(n).ok())
        .collect()
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Saturate so absurdly long inputs are still dropped, not wrapped
    let value = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_quantities_drops_invalid() {
        assert_eq!(parse_quantities("10, abc, -2, 5"), vec![10, 5]);
    }

    #[rstest]
    #[case("", vec![])]
    #[case("1,2,3", vec![1, 2, 3])]
    #[case(" 7pcs , 3.9 ", vec![7, 3])]
    #[case("+4, 0, 00", vec![4])]
    #[case("5,5,1", vec![5, 5, 1])]
    #[case("99999999999, 2", vec![2])]
    #[case("x1, 1x", vec![1])]
    fn test_parse_quantities_cases(#[case] input: &str, #[case] expected: Vec<u32>) {
        assert_eq!(parse_quantities(input), expected);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut params = QuoteParameters::new("inox");
        params.price_per_kg = 3.5;
        params.apply_paint = true;
        params.quantities = vec![10, 50];

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "material": "inox",
                "pricePerKg": 3.5,
                "hourlyRate": 42.0,
                "paintPerKg": 0.0,
                "applyPaint": true,
                "includeSetup": false,
                "quantities": [10, 50]
            })
        );
    }

    #[test]
    fn test_validate() {
        assert!(QuoteParameters::new("ferro").validate().is_ok());

        let mut params = QuoteParameters::new("ferro");
        params.hourly_rate = -1.0;
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameters { .. })
        ));

        let mut params = QuoteParameters::new("ferro");
        params.paint_per_kg = f64::NAN;
        assert!(params.validate().is_err());

        assert!(QuoteParameters::new("  ").validate().is_err());

        let mut params = QuoteParameters::new("ferro");
        params.quantities = vec![3, 0];
        assert!(params.validate().is_err());
    }
}
