//! Brand listings.

use serde_json::Value;

use crate::error::Result;
use crate::models::BrandsEnvelope;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// BrandApi
// ---------------------------------------------------------------------------

/// Interface for the `Brand/*` endpoints.
pub struct BrandApi<'a> {
    transport: &'a Transport,
}

impl<'a> BrandApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// All brands visible to the account.
    pub fn all(&self) -> Result<Option<Vec<Value>>> {
        self.fetch("Brand/All")
    }

    /// Brands owned by the account.
    pub fn my_brands(&self) -> Result<Option<Vec<Value>>> {
        self.fetch("Brand/MyBrands")
    }

    fn fetch(&self, path: &str) -> Result<Option<Vec<Value>>> {
        let data = self.transport.get_value(&self.transport.api_path(path))?;
        if data.is_null() {
            return Ok(None);
        }
        let env: BrandsEnvelope = serde_json::from_value(data)?;
        Ok(env.brands.filter(|brands| !brands.is_empty()))
    }
}
