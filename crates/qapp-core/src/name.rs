use crate::error::{QappError, Result};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Package name sanitization
// ---------------------------------------------------------------------------

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
static INVALID_RE: OnceLock<Regex> = OnceLock::new();
static PACKAGE_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn invalid_re() -> &'static Regex {
    INVALID_RE.get_or_init(|| Regex::new(r"[^a-z0-9\-]").unwrap())
}

fn package_name_re() -> &'static Regex {
    PACKAGE_NAME_RE
        .get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Map free-form user text to a package identifier.
///
/// Lowercases, turns each whitespace run into a single dash, drops anything
/// outside `[a-z0-9-]` and trims dashes from both ends. The result may be
/// empty; see [`project_name`] for the checked variant.
pub fn sanitize_package_name(input: &str) -> String {
    let lowered = input.to_lowercase();
    let dashed = whitespace_re().replace_all(&lowered, "-");
    let stripped = invalid_re().replace_all(&dashed, "");
    stripped.trim_matches('-').to_string()
}

/// Sanitize `input` and reject names that come out empty.
pub fn project_name(input: &str) -> Result<String> {
    let name = sanitize_package_name(input);
    if name.is_empty() || !package_name_re().is_match(&name) {
        return Err(QappError::InvalidProjectName(input.trim().to_string()));
    }
    Ok(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
