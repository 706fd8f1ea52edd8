//! Path display utilities

use crate::core::config::ELLIPSIS;

/// Shortens long paths for display by keeping the trailing `max_len` characters
///
/// Paths that already fit are returned unchanged. Longer paths are cut from the
/// left and prefixed with a single `…`, so a shortened result is always
/// `max_len + 1` characters long. Lengths are counted in `char`s, never bytes.
///
/// The result is not a fixed point: abbreviating it again with the same
/// `max_len` cuts it again.
///
/// ```
/// use path_abbrev::abbreviate;
///
/// assert_eq!(abbreviate("short.txt", 20), "short.txt");
/// assert_eq!(abbreviate("/very/long/path/to/some/deep/file.txt", 10), "…p/file.txt");
/// assert_eq!(abbreviate("ab", 0), "…");
/// ```
pub fn abbreviate(path: &str, max_len: usize) -> String {
    // Byte length bounds the char count, so this skips counting for short paths
    if path.len() <= max_len {
        return path.to_string();
    }

    let char_count = path.chars().count();
    if char_count <= max_len {
        return path.to_string();
    }

    let start = path
        .char_indices()
        .nth(char_count - max_len)
        .map_or(path.len(), |(idx, _)| idx);

    let mut shortened = String::with_capacity(ELLIPSIS.len_utf8() + path.len() - start);
    shortened.push(ELLIPSIS);
    shortened.push_str(&path[start..]);
    shortened
}

/// Same as [`abbreviate`], for callers holding a signed length
///
/// Negative lengths are treated as zero.
pub fn abbreviate_signed(path: &str, max_len: i64) -> String {
    let max_len = usize::try_from(max_len.max(0)).unwrap_or(usize::MAX);
    abbreviate(path, max_len)
}
