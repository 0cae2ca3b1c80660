// Tokenizer for alias specifications.
//
// Grammar of one comma-separated entry:
//   [keyword " "] segment ("->" segment)* " as " alias
// where keyword, segment and alias are runs of ASCII word characters.

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use super::model::{AliasError, AliasSet, AliasToken, KeywordPolicy, Path, JOIN_KEYWORD};

lazy_static! {
    static ref ENTRY_REGEX: Regex =
        Regex::new(r"(?-u)^(?:(?P<keyword>\w+) )?(?P<path>\w+(?:->\w+)*) as (?P<alias>\w+)$")
            .expect("Invalid alias entry regex");
}

/// Tokenize with the default policy (unknown keywords rejected).
pub fn tokenize(spec: &str) -> Result<AliasSet, AliasError> {
    tokenize_with(spec, KeywordPolicy::default())
}

/// Split `spec` on commas and parse every non-blank entry. The first entry
/// that fails aborts the whole call.
pub fn tokenize_with(spec: &str, policy: KeywordPolicy) -> Result<AliasSet, AliasError> {
    spec.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| parse_entry(piece, policy))
        .collect()
}

fn parse_entry(piece: &str, policy: KeywordPolicy) -> Result<AliasToken, AliasError> {
    let invalid = || AliasError::InvalidAliasSyntax(piece.to_string());

    let caps = ENTRY_REGEX.captures(piece).ok_or_else(invalid)?;
    let keyword = caps.name("keyword").map(|m| m.as_str().to_string());
    let path = caps
        .name("path")
        .and_then(|m| Path::parse(m.as_str()))
        .ok_or_else(invalid)?;
    let alias = caps.name("alias").ok_or_else(invalid)?.as_str().to_string();

    if let Some(kw) = keyword.as_deref() {
        if kw != JOIN_KEYWORD {
            match policy {
                KeywordPolicy::Reject => return Err(invalid()),
                KeywordPolicy::Fallback => {
                    warn!("Unknown alias keyword '{}' in '{}', resolving as plain path", kw, piece);
                }
            }
        }
    }

    Ok(AliasToken {
        keyword,
        path,
        alias,
    })
}
