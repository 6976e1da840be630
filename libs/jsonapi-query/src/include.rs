//! Relationship inclusion parsing: `include=notes,notes.author`.

use crate::limits::{Error, FetchLimits};
use crate::split_csv;

/// Parse the raw `include` parameter into an ordered sequence of
/// relationship paths. Pieces are trimmed and empty pieces dropped;
/// order and duplicates are preserved. Dot-qualified paths pass through
/// unexamined; path validity is the consumer's concern.
#[must_use]
pub fn parse_include(raw: &str) -> Vec<String> {
    split_csv(raw)
}

/// [`parse_include`] with input caps applied.
///
/// # Errors
/// Returns [`Error`] when the raw value or the number of parsed paths
/// exceeds the given limits.
pub fn parse_include_checked(raw: &str, limits: &FetchLimits) -> Result<Vec<String>, Error> {
    limits.validate_include(raw)?;
    let paths = parse_include(raw);
    limits.validate_include_count(paths.len())?;
    Ok(paths)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_empties() {
        let paths = parse_include("notes, notes.author ,, ");
        assert_eq!(paths, ["notes", "notes.author"]);
    }

    #[test]
    fn empty_input_yields_no_paths() {
        assert!(parse_include("").is_empty());
        assert!(parse_include("  ,  ,").is_empty());
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let paths = parse_include("b,a,b");
        assert_eq!(paths, ["b", "a", "b"]);
    }

    #[test]
    fn dot_qualified_paths_pass_through() {
        let paths = parse_include("notes.author.avatar");
        assert_eq!(paths, ["notes.author.avatar"]);
    }

    #[test]
    fn checked_parse_rejects_oversized_input() {
        let raw = "x".repeat(3000);
        let result = parse_include_checked(&raw, &FetchLimits::default());
        assert!(matches!(result, Err(Error::IncludeTooLong { .. })));
    }

    #[test]
    fn checked_parse_rejects_too_many_paths() {
        let raw = (0..60).map(|i| format!("rel{i}")).collect::<Vec<_>>().join(",");
        let result = parse_include_checked(&raw, &FetchLimits::default());
        assert!(matches!(result, Err(Error::TooManyIncludePaths { .. })));
    }

    #[test]
    fn checked_parse_accepts_reasonable_input() {
        let paths = parse_include_checked("notes,notes.author", &FetchLimits::default()).unwrap();
        assert_eq!(paths.len(), 2);
    }
}
