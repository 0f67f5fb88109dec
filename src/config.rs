use crate::types::Environment;

pub const PRODUCTION_BASE_URL: &str = "https://webapi.psinfoodservice.com/v7";
pub const PREPRODUCTION_BASE_URL: &str = "https://webapi.prepod.psinfoodservice.com/v7";

/// Versioned path prefix prepended to JSON API endpoints.
pub const DEFAULT_API_PREFIX: &str = "/v7/json";

/// Environment variable that overrides the API prefix when no explicit
/// prefix is configured on the builder.
pub const API_PREFIX_ENV: &str = "PS_API_PREFIX";

/// CDN base URL for the per-allergen preview icons (`{id}.png`).
pub const ALLERGEN_ICON_CDN: &str =
    "https://cdn.psinfoodservice.com/images/productsheet/allergenen/";

pub fn base_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => PRODUCTION_BASE_URL,
        Environment::Preproduction => PREPRODUCTION_BASE_URL,
    }
}
