use crate::error::{IniError, IniResult};
use crate::text::eq_ignore_case;

/// Ordered table of `(true, false)` token pairs used to read and write booleans.
///
/// Pairs are checked in insertion order and the first token that matches
/// decides the result. Each [`Document`](crate::Document) owns its own table.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiterals {
    pairs: Vec<(String, String)>,
}

impl BooleanLiterals {
    /// Table with no pairs at all
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a custom pair after the existing ones
    pub fn register(&mut self, true_token: impl Into<String>, false_token: impl Into<String>) {
        self.pairs.push((true_token.into(), false_token.into()));
    }

    /// All pairs in lookup order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Match `value` against the table
    pub fn parse(&self, value: &str, ignore_case: bool) -> IniResult<bool> {
        let matches = |token: &str| {
            if ignore_case {
                eq_ignore_case(token, value)
            } else {
                token == value
            }
        };

        for (true_token, false_token) in &self.pairs {
            if matches(true_token) {
                return Ok(true);
            }
            if matches(false_token) {
                return Ok(false);
            }
        }

        Err(IniError::boolean_parse(value))
    }

    /// Token written for `value`: the first pair wins, `true`/`false` when the table is empty
    pub fn format(&self, value: bool) -> &str {
        match self.pairs.first() {
            Some((t, _)) if value => t.as_str(),
            Some((_, f)) => f.as_str(),
            None if value => "true",
            None => "false",
        }
    }
}

impl Default for BooleanLiterals {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register("true", "false");
        table.register("yes", "no");
        table.register("on", "off");
        table.register("1", "0");
        table
    }
}
