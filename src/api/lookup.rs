//! Product lookups by external identifier.
//!
//! Each lookup posts a request body from [`crate::models::requests`] and
//! returns the response document as raw JSON; the item shapes differ per
//! account contract, so no schema is imposed here.

use serde_json::Value;

use crate::error::Result;
use crate::models::{
    ArticleNumberLookupRequest, AssortmentLookupRequest, BrandIdLookupRequest, GlnLookupRequest,
    GtinLookupRequest, LookupRequest, PsIdLookupRequest,
};
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// LookupApi
// ---------------------------------------------------------------------------

/// Interface for the `Lookup/*` endpoints.
pub struct LookupApi<'a> {
    transport: &'a Transport,
}

impl<'a> LookupApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Look up products by GTIN numbers.
    pub fn gtin(&self, request: &GtinLookupRequest) -> Result<Value> {
        self.post("Lookup/gtin", request)
    }

    /// Look up products by PS ids.
    pub fn ps_id(&self, request: &PsIdLookupRequest) -> Result<Value> {
        self.post("Lookup/psId", request)
    }

    /// Look up products by supplier article numbers.
    pub fn article_number(&self, request: &ArticleNumberLookupRequest) -> Result<Value> {
        self.post("Lookup/articlenumber", request)
    }

    /// Look up everything published under a supplier GLN.
    pub fn gln(&self, request: &GlnLookupRequest) -> Result<Value> {
        self.post("Lookup/Gln", request)
    }

    /// Look up the contents of an assortment list.
    pub fn assortment(&self, request: &AssortmentLookupRequest) -> Result<Value> {
        self.post("Lookup/Assortment", request)
    }

    /// Look up products by brand id. Not available for all accounts.
    pub fn brand_id(&self, request: &BrandIdLookupRequest) -> Result<Value> {
        self.post("Lookup/BrandId", request)
    }

    /// Look up all products changed after a date. Not available for all
    /// accounts.
    pub fn all(&self, request: &LookupRequest) -> Result<Value> {
        self.post("Lookup/All", request)
    }

    fn post<B: serde::Serialize>(&self, path: &str, request: &B) -> Result<Value> {
        self.transport
            .post_value(&self.transport.api_path(path), request)
    }
}
