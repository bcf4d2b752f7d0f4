//! Schema of the quoting service's reply
//!
//! Every field is optional. Absent and `null` fields deserialize to `None`;
//! a field holding the wrong JSON type makes the whole body invalid.
//! Unknown fields are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Properties the service detected in the drawing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_mm2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bends_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laser_holes_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill_holes_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected: Option<DetectedProperties>,
}

/// One priced line of the quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

/// Pricing for one order quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantityPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

/// Full reply of the quoting service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<QuoteMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Keyed by quantity as sent by the service, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_quantity: Option<IndexMap<String, QuantityPrice>>,
}

impl QuoteResponse {
    pub fn detected(&self) -> Option<&DetectedProperties> {
        self.meta.as_ref().and_then(|meta| meta.detected.as_ref())
    }

    pub fn items(&self) -> &[LineItem] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Quoted total, 0 when the service sent none
    pub fn total(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
