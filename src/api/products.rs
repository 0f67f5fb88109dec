//! Product sheet retrieval.

use serde_json::Value;

use crate::error::{PsError, Result};
use crate::models::{MyProductsEnvelope, ProductSheet};
use crate::transport::Transport;
use crate::types::{Language, Output};

// ---------------------------------------------------------------------------
// ProductApi
// ---------------------------------------------------------------------------

/// Interface for the `ProductSheet` and `MyProducts` endpoints.
pub struct ProductApi<'a> {
    transport: &'a Transport,
}

impl<'a> ProductApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Retrieve a product sheet by logistic id.
    ///
    /// With [`Language::All`] the language segment is omitted from the path
    /// and the sheet carries every available language; a concrete language
    /// asks the API to pre-filter. A 403 response means the account has no
    /// access to this sheet and yields `Ok(None)`, as does an empty body.
    pub fn product_sheet(
        &self,
        logistic_id: i64,
        output: Output,
        language: Language,
    ) -> Result<Option<ProductSheet>> {
        let path = match language {
            Language::All => self
                .transport
                .api_path(&format!("ProductSheet/{}/{}", output, logistic_id)),
            lang => self
                .transport
                .api_path(&format!("ProductSheet/{}/{}/{}", lang, output, logistic_id)),
        };

        let data = match self.transport.get_value(&path) {
            Ok(data) => data,
            Err(PsError::Api {
                status_code: 403, ..
            }) => return Ok(None),
            Err(e) => return Err(e),
        };

        if data.is_null() || data.as_object().is_some_and(|o| o.is_empty()) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(data)?))
    }

    /// Products linked to the authenticated account.
    pub fn my_products(&self) -> Result<Option<Vec<Value>>> {
        let data = self
            .transport
            .get_value(&self.transport.api_path("MyProducts"))?;
        if data.is_null() {
            return Ok(None);
        }
        let env: MyProductsEnvelope = serde_json::from_value(data)?;
        Ok(env.items)
    }
}
