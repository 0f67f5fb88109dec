//! Reference ("master") data listings.

use serde_json::Value;

use crate::error::Result;
use crate::models::MastersEnvelope;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// MasterApi
// ---------------------------------------------------------------------------

/// Interface for the `Master/*` endpoints. Each call returns the `masters`
/// payload of one reference-data area, or `None` when the area is empty.
pub struct MasterApi<'a> {
    transport: &'a Transport,
}

impl<'a> MasterApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn all(&self) -> Result<Option<Value>> {
        self.fetch("Master/All")
    }

    pub fn logistic(&self) -> Result<Option<Value>> {
        self.fetch("Master/Logistic")
    }

    pub fn product(&self) -> Result<Option<Value>> {
        self.fetch("Master/Product")
    }

    pub fn storage(&self) -> Result<Option<Value>> {
        self.fetch("Master/Storage")
    }

    pub fn specification(&self) -> Result<Option<Value>> {
        self.fetch("Master/Specification")
    }

    pub fn profile(&self) -> Result<Option<Value>> {
        self.fetch("Master/Profile")
    }

    fn fetch(&self, path: &str) -> Result<Option<Value>> {
        let data = self.transport.get_value(&self.transport.api_path(path))?;
        if data.is_null() {
            return Ok(None);
        }
        let env: MastersEnvelope = serde_json::from_value(data)?;
        Ok(env.masters.filter(|m| !m.is_null()))
    }
}
