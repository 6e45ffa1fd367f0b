//! First-line copyright rewriting.
//!
//! The rewrite looks at the first line of a file only. A line that opens
//! with the copyright marker is replaced wholesale by the canonical notice;
//! anything else leaves the content untouched. Later lines are never
//! inspected, so a notice buried further down survives as-is.

/// Prefix that identifies a first line as a copyright notice.
pub const COPYRIGHT_MARKER: &str = "// Copyright (c)";

/// The canonical notice every matching first line is replaced with.
pub const COPYRIGHT_LINE: &str =
    "// Copyright (c) 2018-2021 Marco Wang <m.aesophor@gmail.com>. All rights reserved.\n";

/// Returns the content with its first line canonicalized, or `None` for
/// content with no lines at all (the empty string).
///
/// Matching is exact: the marker must start at the very first byte, with
/// its original spacing and case. A matched line is replaced including its
/// line terminator, so a CRLF notice line comes back with a bare `\n` while
/// the rest of the file keeps whatever endings it had.
pub fn rewrite_header(content: &str) -> Option<String> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !first.starts_with(COPYRIGHT_MARKER) {
        return Some(content.to_string());
    }
    let mut rewritten = String::with_capacity(COPYRIGHT_LINE.len() + content.len() - first.len());
    rewritten.push_str(COPYRIGHT_LINE);
    rewritten.push_str(&content[first.len()..]);
    Some(rewritten)
}
