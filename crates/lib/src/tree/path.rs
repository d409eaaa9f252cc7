//! Dotted-path parsing for tree access.
//!
//! Paths address nested entries with `.` as the separator: `"a.b.c"` walks
//! through `a`, then `b`, then `c`. A literal dot inside one key is written
//! `\.` and restored after splitting, so the key `"a.b"` is addressed as
//! `"a\.b"`.

/// The escape sequence for a literal dot inside one key segment.
const ESCAPED_DOT: &str = "\\.";

/// Placeholder substituted for `\.` before splitting. NUL is not expected to
/// occur in real keys.
const SENTINEL: &str = "\u{0}";

/// Splits a raw path string into its ordered segments.
///
/// Unescaped dots separate segments; `\.` yields a literal dot inside the
/// containing segment. An empty string produces one empty segment, matching
/// direct lookup of the empty key.
///
/// # Examples
///
/// ```
/// use grove::tree::path;
///
/// assert_eq!(path::split("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(path::split("a\\.b"), vec!["a.b"]);
/// assert_eq!(path::split(""), vec![""]);
/// ```
pub fn split(raw: &str) -> Vec<String> {
    // Fast path: nothing to unescape.
    if !raw.contains(ESCAPED_DOT) {
        return raw.split('.').map(str::to_string).collect();
    }

    raw.replace(ESCAPED_DOT, SENTINEL)
        .split('.')
        .map(|segment| segment.replace(SENTINEL, "."))
        .collect()
}

/// Dot-joins segments for diagnostics.
///
/// No re-escaping is applied; the result is display text, not a parseable
/// path.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}
