//! Small string helpers shared by the parser, the query API and the serializer.

/// Whitespace as the INI format understands it: space, tab, line feed,
/// vertical tab, form feed and carriage return.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Strip leading and trailing whitespace
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Strip every leading occurrence of `c`
pub fn trim_left_char(s: &str, c: char) -> &str {
    s.trim_start_matches(c)
}

/// Strip every trailing occurrence of `c`
pub fn trim_right_char(s: &str, c: char) -> &str {
    s.trim_end_matches(c)
}

/// Split at the first occurrence of `sep`, trimming both halves.
///
/// When `sep` is absent the whole (trimmed) input is the left half and the
/// right half is empty.
pub fn split_on_first<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str) {
    match s.find(sep) {
        Some(pos) => (trim(&s[..pos]), trim(&s[pos + sep.len()..])),
        None => (trim(s), ""),
    }
}

/// Exact prefix match
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Lines beginning with `#` or `;` are whole-line comments
pub fn is_comment_line(s: &str) -> bool {
    starts_with(s, "#") || starts_with(s, ";")
}

/// ASCII case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Iterate over the lines of `input`, accepting `\n`, `\r\n` and `\r` as terminators.
///
/// A terminator at the very end of the input does not produce a trailing empty line.
pub fn split_lines(input: &str) -> UniversalLines<'_> {
    UniversalLines { rest: input }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct UniversalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for UniversalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let after = &self.rest[pos..];
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Make sure `out` ends with exactly the line break it needs, without doubling one
pub fn ensure_line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  key \t"), "key");
        assert_eq!(trim("\x0b\x0cvalue\r\n"), "value");
        assert_eq!(trim(""), "");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_trim_char() {
        assert_eq!(trim_left_char("xxabc", 'x'), "abc");
        assert_eq!(trim_right_char("abc;;", ';'), "abc");
    }

    #[test]
    fn test_split_on_first() {
        assert_eq!(split_on_first(" a = b = c ", "="), ("a", "b = c"));
        assert_eq!(split_on_first("  lonely  ", "="), ("lonely", ""));
        assert_eq!(split_on_first("=v", "="), ("", "v"));
    }

    #[test]
    fn test_comment_line() {
        assert!(is_comment_line("# hash"));
        assert!(is_comment_line("; semi"));
        assert!(!is_comment_line("key=#value"));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Yes", "yES"));
        assert!(!eq_ignore_case("yes", "no"));
    }

    #[test]
    fn test_split_lines_universal() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\n\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);

        let lines: Vec<&str> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a"]);

        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_ensure_line_break() {
        let mut s = String::new();
        ensure_line_break(&mut s);
        assert_eq!(s, "");

        s.push_str("x");
        ensure_line_break(&mut s);
        ensure_line_break(&mut s);
        assert_eq!(s, "x\n");
    }
}
