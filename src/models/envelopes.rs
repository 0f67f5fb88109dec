//! Thin response envelopes for list endpoints.
//!
//! These endpoints wrap their payload in a single-key object; the API
//! interfaces unwrap them and hand the payload back as raw JSON, since the
//! shapes vary per account configuration.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BrandsEnvelope {
    #[serde(default)]
    pub brands: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MyProductsEnvelope {
    #[serde(rename = "Items", default)]
    pub items: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MastersEnvelope {
    #[serde(default)]
    pub masters: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImpactScoresEnvelope {
    #[serde(rename = "impactScore", default)]
    pub impact_score: Option<Vec<Value>>,
}
