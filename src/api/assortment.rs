//! Assortment lists.

use serde_json::Value;

use crate::error::Result;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// AssortmentApi
// ---------------------------------------------------------------------------

/// Interface for the `Assortment/*` endpoints.
pub struct AssortmentApi<'a> {
    transport: &'a Transport,
}

impl<'a> AssortmentApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// All assortment lists of the account.
    pub fn assortments(&self) -> Result<Option<Value>> {
        let data = self
            .transport
            .get_value(&self.transport.api_path("Assortment/assortments"))?;
        if data.is_null() {
            return Ok(None);
        }
        Ok(Some(data))
    }

    /// Items of one assortment list.
    pub fn assortment_items(&self, id: &str) -> Result<Option<Value>> {
        let data = self.transport.get_value(
            &self
                .transport
                .api_path(&format!("Assortment/assortments/{}/items", id)),
        )?;
        if data.is_null() {
            return Ok(None);
        }
        Ok(Some(data))
    }
}
