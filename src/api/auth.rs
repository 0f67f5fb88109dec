//! Account authentication: login, token refresh and logout.

use crate::error::Result;
use crate::models::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, TokenSet};
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// AuthApi
// ---------------------------------------------------------------------------

/// Authentication interface for the `Account/*` endpoints.
pub struct AuthApi<'a> {
    transport: &'a Transport,
}

impl<'a> AuthApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Authenticate with username and password.
    ///
    /// On success the returned tokens are stored on the transport and every
    /// subsequent request carries the access token.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let value = self
            .transport
            .post_value(&self.transport.api_path("Account/Login"), &body)?;
        let resp: LoginResponse = serde_json::from_value(value)?;

        self.transport.set_tokens(TokenSet {
            access_token: resp.accesstoken,
            refresh_token: resp.refreshtoken,
            expires_in: resp.expiresin,
        });
        Ok(())
    }

    /// Exchange the current token pair for a fresh one and store it.
    pub fn refresh_token(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        let body = RefreshRequest {
            accesstoken: access_token.to_string(),
            refreshtoken: refresh_token.to_string(),
        };
        let value = self
            .transport
            .post_value(&self.transport.api_path("Account/RefreshToken"), &body)?;
        let resp: RefreshResponse = serde_json::from_value(value)?;

        self.transport.set_tokens(TokenSet {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            expires_in: resp.expires_in,
        });
        Ok(())
    }

    /// Invalidate the current token server-side and forget it locally.
    pub fn logoff(&self) -> Result<()> {
        self.transport
            .post_empty(&self.transport.api_path("Account/logout"))?;
        self.transport.clear_tokens();
        Ok(())
    }
}
