use crate::error::{IniError, IniResult};
use crate::text::{is_space, trim};

/// A single `key=value` line plus the comments attached to it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub key: String,
    pub value: String,

    /// Comment and blank-line text emitted verbatim above the item
    pub leading_comment: String,

    /// Text after `#` on the item's own line, without the marker
    pub trailing_comment: String,
}

impl Item {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            leading_comment: String::new(),
            trailing_comment: String::new(),
        }
    }
}

/// Raw value of an item together with its leading comment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeValue<'a> {
    pub value: &'a str,
    pub comment: &'a str,
}

/// A named group of items. The empty name denotes the default section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    name: String,
    leading_comment: String,
    trailing_comment: String,
    items: Vec<Item>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn with_comments(
        name: impl Into<String>,
        leading_comment: impl Into<String>,
        trailing_comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            leading_comment: leading_comment.into(),
            trailing_comment: trailing_comment.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the unnamed section that holds items before the first header
    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    pub fn leading_comment(&self) -> &str {
        &self.leading_comment
    }

    pub fn trailing_comment(&self) -> &str {
        &self.trailing_comment
    }

    /// Items in file order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// First item whose key matches exactly
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.key.as_str()).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.value.as_str()).collect()
    }

    /// `(key, value)` pairs in file order
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.items
            .iter()
            .map(|item| (item.key.as_str(), item.value.as_str()))
            .collect()
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    #[cfg_attr(not(feature = "mutation"), allow(dead_code))]
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.key == key)
    }

    #[cfg_attr(not(feature = "mutation"), allow(dead_code))]
    pub(crate) fn remove(&mut self, key: &str) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.key == key)?;
        Some(self.items.remove(idx))
    }

    #[cfg_attr(not(feature = "mutation"), allow(dead_code))]
    pub(crate) fn set_leading_comment(&mut self, comment: String) {
        self.leading_comment = comment;
    }

    #[cfg_attr(not(feature = "mutation"), allow(dead_code))]
    pub(crate) fn set_trailing_comment(&mut self, comment: String) {
        self.trailing_comment = comment;
    }

    #[cfg_attr(not(feature = "mutation"), allow(dead_code))]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.leading_comment.clear();
        self.trailing_comment.clear();
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Parse an integer.
///
/// Lenient mode reads an optional sign followed by the longest run of digits,
/// after leading whitespace, and yields 0 when there are none. Out-of-range
/// values saturate.
pub fn parse_int(s: &str, strict: bool) -> IniResult<i64> {
    if strict {
        return trim(s)
            .parse::<i64>()
            .map_err(|_| IniError::invalid_number(s, "invalid integer"));
    }

    let rest = s.trim_start_matches(is_space);
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    Ok(value)
}

/// Parse a floating point number.
///
/// Lenient mode reads the longest prefix that forms a decimal number
/// (sign, digits, fraction, exponent) after leading whitespace, falling back
/// to 0.0 when there is none.
pub fn parse_double(s: &str, strict: bool) -> IniResult<f64> {
    if strict {
        return trim(s)
            .parse::<f64>()
            .map_err(|_| IniError::invalid_number(s, "invalid float"));
    }

    let rest = s.trim_start_matches(is_space);
    let prefix = &rest[..numeric_prefix_len(rest)];

    if let Ok(v) = prefix.parse::<f64>() {
        return Ok(v);
    }

    // inf / nan spellings
    Ok(trim(rest).parse::<f64>().unwrap_or(0.0))
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }

    if !has_digits {
        return 0;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }

    end
}
