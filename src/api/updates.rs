//! Change-tracking queries against the `Update/*` endpoints.
//!
//! These mirror the lookup shapes but return only products changed since
//! the request's `last_updated_after` floor.

use serde_json::Value;

use crate::error::Result;
use crate::models::{
    ArticleNumberLookupRequest, AssortmentLookupRequest, GlnLookupRequest, GtinLookupRequest,
    PsIdLookupRequest,
};
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// UpdateApi
// ---------------------------------------------------------------------------

pub struct UpdateApi<'a> {
    transport: &'a Transport,
}

impl<'a> UpdateApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Changed products by GTIN. The endpoint path spelling (`Updates/Ean`)
    /// is an upstream fact.
    pub fn ean(&self, request: &GtinLookupRequest) -> Result<Value> {
        self.post("Updates/Ean", request)
    }

    /// Changed products by PS id.
    pub fn ps_id(&self, request: &PsIdLookupRequest) -> Result<Value> {
        self.post("Update/PsId", request)
    }

    /// Changed products by supplier article number.
    pub fn article_number(&self, request: &ArticleNumberLookupRequest) -> Result<Value> {
        self.post("Update/ArticleNumber", request)
    }

    /// Changed products under a supplier GLN.
    pub fn gln(&self, request: &GlnLookupRequest) -> Result<Value> {
        self.post("Update/GLN", request)
    }

    /// Changed products within an assortment list.
    pub fn assortment(&self, request: &AssortmentLookupRequest) -> Result<Value> {
        self.post("Update/Assortment", request)
    }

    fn post<B: serde::Serialize>(&self, path: &str, request: &B) -> Result<Value> {
        self.transport
            .post_value(&self.transport.api_path(path), request)
    }
}
