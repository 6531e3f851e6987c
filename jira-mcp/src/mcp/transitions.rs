//! Transition token resolution
//!
//! Maps a caller-supplied transition token onto one of the transitions Jira
//! currently offers for an issue.

use crate::error::{JiraMcpError, Result};
use crate::jira::Transition;

/// Resolve a transition token against the candidates Jira supplied.
///
/// A candidate matches when its name equals the token case-insensitively or
/// its id equals the token exactly. Candidates are checked in the order Jira
/// returned them and the first match wins; this is an exact-policy match, so
/// `"in progress"` matches `In Progress` but `"progress"` does not.
///
/// When nothing matches, the error carries every candidate name so the
/// caller can retry with a valid token.
pub fn resolve_transition<'a>(
    candidates: &'a [Transition],
    token: &str,
) -> Result<&'a Transition> {
    candidates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(token) || t.id == token)
        .ok_or_else(|| JiraMcpError::TransitionNotFound {
            token: token.to_string(),
            available: candidates.iter().map(|t| t.name.clone()).collect(),
        })
}
