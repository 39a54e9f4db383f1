//! Directive text tokenizer
//!
//! Splits a raw marker string into ordered directive tokens. Whitespace runs
//! (including the non-breaking space) collapse to single spaces before the
//! split, so irregular author formatting never produces empty tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Runs of whitespace, non-breaking space included
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\u{00A0}]+").unwrap());

/// One whitespace-delimited token of a directive string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveToken {
    /// Directive name, optionally dotted
    pub name: String,
    /// Positional literal parameters from the `name(a,b)` form
    pub params: Vec<String>,
}

impl DirectiveToken {
    /// Token with no parameters
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

/// Parse a raw directive string into ordered tokens.
///
/// Zero-length tokens are dropped, so repeated, leading, and trailing
/// whitespace are all harmless.
pub fn parse_directive_text(raw: &str) -> Vec<DirectiveToken> {
    collapse_whitespace(raw)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> DirectiveToken {
    if token.ends_with(')') {
        if let Some(open) = token.find('(') {
            let params = token[open + 1..token.len() - 1]
                .split(',')
                .map(str::trim)
                .filter(|param| !param.is_empty())
                .map(str::to_string)
                .collect();
            return DirectiveToken {
                name: token[..open].to_string(),
                params,
            };
        }
        // Unmatched ')': fail-soft to a plain name
        debug!(%token, "directive token ends in ')' without '(', treating as plain name");
    }
    DirectiveToken::bare(token)
}
