//! Closed-set request parameters: languages, output sections, render styles
//! and API environments.
//!
//! Each enum mirrors the fixed value set the API accepts. String conversion
//! comes in two flavors: `sanitize` silently falls back to the default for
//! unknown input, `validate` rejects it with [`PsError::InvalidArgument`].

use std::fmt;

use crate::error::{PsError, Result};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Product-sheet language code.
///
/// `All` requests every available language from the API. It is a routing
/// value only: preview rendering rewrites it to the default (`Nl`) via
/// [`effective`](Language::effective) before any localization happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    All,
    #[default]
    Nl,
    Fr,
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::All,
        Language::Nl,
        Language::Fr,
        Language::En,
        Language::De,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::All => "all",
            Language::Nl => "nl",
            Language::Fr => "fr",
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn is_valid(code: &str) -> bool {
        Self::ALL.iter().any(|l| l.as_str() == code)
    }

    /// Parse a language code, falling back to the default for unknown input.
    pub fn sanitize(code: &str) -> Language {
        match Self::parse(code) {
            Some(language) => language,
            None => {
                log::warn!("unknown language code {:?}, using {}", code, Language::default());
                Language::default()
            }
        }
    }

    /// Parse a language code, rejecting unknown input.
    pub fn validate(code: &str) -> Result<Language> {
        Self::parse(code).ok_or_else(|| {
            PsError::InvalidArgument(format!(
                "Invalid language code: '{}'. Valid codes are: all, nl, fr, en, de",
                code
            ))
        })
    }

    /// The language previews actually localize to: `All` collapses to the
    /// default, every concrete language passes through unchanged.
    pub fn effective(self) -> Language {
        match self {
            Language::All => Language::default(),
            other => other,
        }
    }

    fn parse(code: &str) -> Option<Language> {
        Self::ALL.iter().copied().find(|l| l.as_str() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutputStyle
// ---------------------------------------------------------------------------

/// Markup flavor produced by the allergen preview renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Table,
    Bootstrap,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Table => "table",
            OutputStyle::Bootstrap => "bootstrap",
        }
    }

    pub fn is_valid(style: &str) -> bool {
        Self::parse(style).is_some()
    }

    pub fn sanitize(style: &str) -> OutputStyle {
        Self::parse(style).unwrap_or_default()
    }

    pub fn validate(style: &str) -> Result<OutputStyle> {
        Self::parse(style).ok_or_else(|| {
            PsError::InvalidArgument(format!(
                "Invalid style: '{}'. Valid styles are: table, bootstrap",
                style
            ))
        })
    }

    fn parse(style: &str) -> Option<OutputStyle> {
        match style {
            "table" => Some(OutputStyle::Table),
            "bootstrap" => Some(OutputStyle::Bootstrap),
            _ => None,
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Product-sheet section selector for the `ProductSheet` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    All,
    Summary,
    ProductContent,
    Logistics,
}

impl Output {
    pub fn as_str(&self) -> &'static str {
        match self {
            Output::All => "All",
            Output::Summary => "Summary",
            Output::ProductContent => "ProductContent",
            Output::Logistics => "Logistics",
        }
    }

    pub fn is_valid(output: &str) -> bool {
        Self::parse(output).is_some()
    }

    pub fn sanitize(output: &str) -> Output {
        Self::parse(output).unwrap_or_default()
    }

    pub fn validate(output: &str) -> Result<Output> {
        Self::parse(output).ok_or_else(|| {
            PsError::InvalidArgument(format!(
                "Invalid output: '{}'. Valid outputs are: All, Summary, ProductContent, Logistics",
                output
            ))
        })
    }

    fn parse(output: &str) -> Option<Output> {
        match output {
            "All" => Some(Output::All),
            "Summary" => Some(Output::Summary),
            "ProductContent" => Some(Output::ProductContent),
            "Logistics" => Some(Output::Logistics),
            _ => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Target API environment, selecting the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Preproduction,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Preproduction => "preproduction",
            Environment::Production => "production",
        }
    }

    pub fn is_valid(environment: &str) -> bool {
        Self::parse(environment).is_some()
    }

    pub fn sanitize(environment: &str) -> Environment {
        Self::parse(environment).unwrap_or_default()
    }

    pub fn validate(environment: &str) -> Result<Environment> {
        Self::parse(environment).ok_or_else(|| {
            PsError::InvalidArgument(format!(
                "Invalid environment: '{}'. Valid environments are: preproduction, production",
                environment
            ))
        })
    }

    fn parse(environment: &str) -> Option<Environment> {
        match environment {
            "preproduction" => Some(Environment::Preproduction),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
