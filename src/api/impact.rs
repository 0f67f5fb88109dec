//! Environmental impact scores.

use serde_json::Value;

use crate::error::Result;
use crate::models::ImpactScoresEnvelope;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// ImpactScoreApi
// ---------------------------------------------------------------------------

/// Interface for the `ImpactScore/*` endpoints.
pub struct ImpactScoreApi<'a> {
    transport: &'a Transport,
}

impl<'a> ImpactScoreApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// All impact scores visible to the account.
    pub fn all_scores(&self) -> Result<Option<Vec<Value>>> {
        let data = self
            .transport
            .get_value(&self.transport.api_path("ImpactScore/AllScores"))?;
        if data.is_null() {
            return Ok(None);
        }
        let env: ImpactScoresEnvelope = serde_json::from_value(data)?;
        Ok(env.impact_score.filter(|scores| !scores.is_empty()))
    }

    /// Impact score for one logistic id.
    pub fn score(&self, logistic_id: i64) -> Result<Option<Value>> {
        let data = self.transport.get_value(
            &self
                .transport
                .api_path(&format!("ImpactScore/GetScore/{}", logistic_id)),
        )?;
        if data.is_null() {
            return Ok(None);
        }
        Ok(Some(data))
    }
}
