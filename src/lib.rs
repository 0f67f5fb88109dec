//! PS in foodservice SDK for Rust.
//!
//! Provides a client for the PS in foodservice product-data API -- product
//! sheets, brands, assortments, lookups and reference data -- plus a pure
//! preview layer that turns a product sheet into localized, rendered
//! output: ingredient lists, a pivoted nutrition table and allergen charts.
//!
//! # Quick start
//!
//! ```no_run
//! use psfoodservice::{Language, Output, OutputStyle, PsClient};
//!
//! let client = PsClient::builder().build().unwrap();
//! client.authentication().login("user", "secret").unwrap();
//!
//! // Fetch a sheet and render its allergen chart
//! let sheet = client
//!     .products()
//!     .product_sheet(123456, Output::All, Language::All)
//!     .unwrap();
//!
//! if let Some(sheet) = sheet {
//!     let html = psfoodservice::preview::allergens_preview(
//!         &sheet,
//!         true,
//!         Language::Nl,
//!         OutputStyle::Table,
//!     );
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod preview;
pub mod transport;
pub mod types;

pub use error::{PsError, Result};
pub use models::ProductSheet;
pub use transport::Transport;
pub use types::{Environment, Language, Output, OutputStyle};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PsClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PsClient`] instance.
///
/// Use [`PsClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PsClientBuilder::build) to create the
/// client.
pub struct PsClientBuilder {
    environment: Environment,
    base_url: Option<String>,
    api_prefix: Option<String>,
    timeout: Duration,
}

impl Default for PsClientBuilder {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            api_prefix: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl PsClientBuilder {
    /// Select the API environment. Defaults to preproduction.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL entirely, e.g. for a local test server.
    /// Takes precedence over [`environment`](Self::environment).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the versioned API prefix (e.g. `/v8/json`).
    ///
    /// When not set, the `PS_API_PREFIX` environment variable is consulted
    /// before falling back to `/v7/json`.
    pub fn api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(api_prefix.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No network traffic happens until the first call;
    /// authentication is a separate explicit step.
    pub fn build(self) -> Result<PsClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| config::base_url(self.environment).to_string());
        let api_prefix = self
            .api_prefix
            .or_else(|| std::env::var(config::API_PREFIX_ENV).ok())
            .unwrap_or_else(|| config::DEFAULT_API_PREFIX.to_string());

        let transport = Transport::new(base_url, api_prefix, self.timeout)?;
        Ok(PsClient { transport })
    }
}

// ---------------------------------------------------------------------------
// PsClient
// ---------------------------------------------------------------------------

/// The main entry point for the PS in foodservice SDK.
///
/// Wraps a [`Transport`] (base URL, API prefix, token state) and exposes
/// per-area API interfaces as lightweight borrowing wrappers. The preview
/// layer in [`preview`] is independent of the client and works on any
/// decoded [`ProductSheet`].
///
/// Created via [`PsClient::builder()`].
pub struct PsClient {
    transport: Transport,
}

impl PsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> PsClientBuilder {
        PsClientBuilder::default()
    }

    // -- API accessors -----------------------------------------------------

    /// Access authentication: login, token refresh, logout.
    pub fn authentication(&self) -> api::auth::AuthApi<'_> {
        api::auth::AuthApi::new(&self.transport)
    }

    /// Access product sheets and the account's product list.
    pub fn products(&self) -> api::products::ProductApi<'_> {
        api::products::ProductApi::new(&self.transport)
    }

    /// Access brand listings.
    pub fn brands(&self) -> api::brands::BrandApi<'_> {
        api::brands::BrandApi::new(&self.transport)
    }

    /// Access assortment lists.
    pub fn assortment(&self) -> api::assortment::AssortmentApi<'_> {
        api::assortment::AssortmentApi::new(&self.transport)
    }

    /// Access product lookups by GTIN, PS id, article number, GLN,
    /// assortment or brand.
    pub fn lookups(&self) -> api::lookup::LookupApi<'_> {
        api::lookup::LookupApi::new(&self.transport)
    }

    /// Access change-tracking queries.
    pub fn updates(&self) -> api::updates::UpdateApi<'_> {
        api::updates::UpdateApi::new(&self.transport)
    }

    /// Access reference ("master") data.
    pub fn masters(&self) -> api::masters::MasterApi<'_> {
        api::masters::MasterApi::new(&self.transport)
    }

    /// Access environmental impact scores.
    pub fn impact_scores(&self) -> api::impact::ImpactScoreApi<'_> {
        api::impact::ImpactScoreApi::new(&self.transport)
    }

    /// Access product image downloads.
    pub fn images(&self) -> api::images::ImageApi<'_> {
        api::images::ImageApi::new(&self.transport)
    }

    // -- Transport ---------------------------------------------------------

    /// Return a reference to the underlying [`Transport`] for advanced usage.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Return a mutable reference to the underlying [`Transport`].
    pub fn transport_mut(&mut self) -> &mut Transport {
        &mut self.transport
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PsClient(base_url={}, api_prefix={}, authenticated={})",
            self.transport.base_url(),
            self.transport.api_prefix(),
            self.transport.is_authenticated()
        )
    }
}
