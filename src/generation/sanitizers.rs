//! Project name sanitizer
//!
//! This module turns free-text project names into identifier-safe slugs and
//! derives the PascalCase symbol used for the generated server class.
//!
//! # Examples
//! ```
//! use mcp_server_builder::generation::sanitizers::{sanitize_project_name, to_symbol_name};
//!
//! assert_eq!(sanitize_project_name(" My Cool App! ").unwrap(), "my-cool-app");
//! assert_eq!(to_symbol_name("my-cool-app"), "MyCoolApp");
//! assert!(sanitize_project_name("---").is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::core::ValidationError;

static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static HYPHEN_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());
static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Normalizes free text into a kebab-case slug.
///
/// Lower-cases the input, replaces every character outside `[a-z0-9-]`
/// with a hyphen, collapses hyphen runs and strips hyphens from both ends.
pub fn sanitize_project_name(input: &str) -> Result<String, ValidationError> {
    let lowered = input.to_lowercase();
    let replaced = DISALLOWED_RE.replace_all(&lowered, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&replaced, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        return Err(if input.trim().is_empty() {
            ValidationError::EmptyProjectName
        } else {
            ValidationError::InvalidProjectName(input.to_string())
        });
    }

    Ok(slug.to_string())
}

/// Derives the PascalCase symbol from a slug by upper-casing the first
/// character of every hyphen-separated segment.
pub fn to_symbol_name(slug: &str) -> String {
    slug.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// A validated project slug together with its derived symbol name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectName {
    slug: String,
    symbol: String,
}

impl ProjectName {
    /// Sanitize raw input into a project name
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let slug = sanitize_project_name(raw)?;
        debug_assert!(SLUG_RE.is_match(&slug));
        let symbol = to_symbol_name(&slug);
        Ok(Self { slug, symbol })
    }

    /// The kebab-case slug, e.g. `my-cool-app`
    pub fn as_str(&self) -> &str {
        &self.slug
    }

    /// The PascalCase symbol, e.g. `MyCoolApp`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether `candidate` already is a well-formed slug
    pub fn is_valid_slug(candidate: &str) -> bool {
        SLUG_RE.is_match(candidate)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}
