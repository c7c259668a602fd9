//! Comment marker escaping
//!
//! A `#` anywhere on a key/value line starts a trailing comment. To keep a
//! literal hash inside a key or value it is written as `\#`:
//! - `url = http://host/\#frag` → value `http://host/#frag`
//! - `color = \#ff0000 # red` → value `#ff0000`, trailing comment `red`
//!
//! The parser unescapes while lexing; the serializer calls [`escape_hashes`]
//! on every key and value it writes.

use std::borrow::Cow;

/// Escaped form of the comment marker
pub const ESCAPED_HASH: &str = "\\#";

/// Escape every `#` so it is read back as content rather than a comment
pub fn escape_hashes(input: &str) -> Cow<'_, str> {
    if input.contains('#') {
        Cow::Owned(input.replace('#', ESCAPED_HASH))
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_hashes("#ff0000"), "\\#ff0000");
        assert_eq!(escape_hashes("a#b#c"), "a\\#b\\#c");
        assert!(matches!(escape_hashes("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_escape_keeps_backslashes() {
        assert_eq!(escape_hashes("x\\y#z"), "x\\y\\#z");
    }
}
