//! Authentication payloads.
//!
//! The login and refresh endpoints spell their token fields differently
//! (all lower-case vs camelCase); both spellings are upstream facts.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LoginRequest / LoginResponse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub accesstoken: String,
    pub refreshtoken: String,
    pub expiresin: i64,
}

// ---------------------------------------------------------------------------
// RefreshRequest / RefreshResponse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub accesstoken: String,
    pub refreshtoken: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// TokenSet
// ---------------------------------------------------------------------------

/// Tokens held by the transport after a successful login or refresh.
#[derive(Debug, Clone)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}
