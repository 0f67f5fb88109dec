//! Request bodies for the `Lookup/*` and `Update/*` endpoints.
//!
//! The API expects PascalCase field names on these, unlike the camelCase
//! product-sheet documents. Every request carries a change-date floor
//! (`LastUpdatedAfter`, defaulting to 24 hours ago) and a target market.

use chrono::{Duration, SecondsFormat, Utc};
use serde::Serialize;

fn default_last_updated_after() -> String {
    (Utc::now() - Duration::days(1)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ---------------------------------------------------------------------------
// LookupRequest
// ---------------------------------------------------------------------------

/// Change-date lookup across all products the account can see.
/// Also the base shape the keyed lookups extend.
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    #[serde(rename = "LastUpdatedAfter")]
    pub last_updated_after: String,
    #[serde(rename = "TargetMarket")]
    pub target_market: i64,
}

impl Default for LookupRequest {
    fn default() -> Self {
        Self {
            last_updated_after: default_last_updated_after(),
            target_market: 0,
        }
    }
}

impl LookupRequest {
    pub fn last_updated_after(mut self, date: impl Into<String>) -> Self {
        self.last_updated_after = date.into();
        self
    }

    pub fn target_market(mut self, market: i64) -> Self {
        self.target_market = market;
        self
    }
}

// ---------------------------------------------------------------------------
// GtinLookupRequest
// ---------------------------------------------------------------------------

/// Lookup by a list of GTIN numbers.
#[derive(Debug, Clone, Serialize, Default)]
pub struct GtinLookupRequest {
    #[serde(flatten)]
    pub base: LookupRequest,
    #[serde(rename = "SearchCriteria")]
    pub search_criteria: Vec<String>,
}

impl GtinLookupRequest {
    pub fn new(gtins: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            base: LookupRequest::default(),
            search_criteria: gtins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn last_updated_after(mut self, date: impl Into<String>) -> Self {
        self.base.last_updated_after = date.into();
        self
    }

    pub fn target_market(mut self, market: i64) -> Self {
        self.base.target_market = market;
        self
    }
}

// ---------------------------------------------------------------------------
// PsIdLookupRequest
// ---------------------------------------------------------------------------

/// Lookup by a list of PS product-sheet ids.
#[derive(Debug, Clone, Serialize, Default)]
pub struct PsIdLookupRequest {
    #[serde(flatten)]
    pub base: LookupRequest,
    #[serde(rename = "SearchCriteria")]
    pub search_criteria: Vec<i64>,
}

impl PsIdLookupRequest {
    pub fn new(ps_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            base: LookupRequest::default(),
            search_criteria: ps_ids.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ArticleNumberLookupRequest
// ---------------------------------------------------------------------------

/// Lookup by supplier article numbers, scoped to a supplier GLN or
/// relation id.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ArticleNumberLookupRequest {
    #[serde(flatten)]
    pub base: LookupRequest,
    #[serde(rename = "SearchCriteria")]
    pub search_criteria: Vec<String>,
    #[serde(rename = "GLN", skip_serializing_if = "Option::is_none")]
    pub gln: Option<String>,
    #[serde(rename = "RelationId", skip_serializing_if = "Option::is_none")]
    pub relation_id: Option<i64>,
}

impl ArticleNumberLookupRequest {
    pub fn new(article_numbers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            base: LookupRequest::default(),
            search_criteria: article_numbers.into_iter().map(Into::into).collect(),
            gln: None,
            relation_id: None,
        }
    }

    pub fn gln(mut self, gln: impl Into<String>) -> Self {
        self.gln = Some(gln.into());
        self
    }

    pub fn relation_id(mut self, relation_id: i64) -> Self {
        self.relation_id = Some(relation_id);
        self
    }
}

// ---------------------------------------------------------------------------
// GlnLookupRequest
// ---------------------------------------------------------------------------

/// Lookup of everything published under one supplier GLN.
#[derive(Debug, Clone, Serialize, Default)]
pub struct GlnLookupRequest {
    #[serde(flatten)]
    pub base: LookupRequest,
    #[serde(rename = "GLN")]
    pub gln: String,
}

impl GlnLookupRequest {
    pub fn new(gln: impl Into<String>) -> Self {
        Self {
            base: LookupRequest::default(),
            gln: gln.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AssortmentLookupRequest
// ---------------------------------------------------------------------------

/// Lookup restricted to one assortment list.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AssortmentLookupRequest {
    #[serde(flatten)]
    pub base: LookupRequest,
    #[serde(rename = "AssortmentId")]
    pub assortment_id: String,
}

impl AssortmentLookupRequest {
    pub fn new(assortment_id: impl Into<String>) -> Self {
        Self {
            base: LookupRequest::default(),
            assortment_id: assortment_id.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// BrandIdLookupRequest
// ---------------------------------------------------------------------------

/// Lookup by brand id. Not available for all accounts.
#[derive(Debug, Clone, Serialize, Default)]
pub struct BrandIdLookupRequest {
    #[serde(flatten)]
    pub base: LookupRequest,
    #[serde(rename = "BrandId")]
    pub brand_id: i64,
}

impl BrandIdLookupRequest {
    pub fn new(brand_id: i64) -> Self {
        Self {
            base: LookupRequest::default(),
            brand_id,
        }
    }
}
