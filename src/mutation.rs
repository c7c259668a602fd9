//! Document mutation API.
//!
//! This module requires the `mutation` cargo feature (enabled by default).
//!
//! Setters locate or create the section, then locate or append the item.
//! New sections go after the existing ones; the default section stays first.
//! Existing comments are kept unless a new one is supplied.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "mutation")] {
//! use inidoc::Document;
//!
//! let mut doc = Document::new();
//! doc.set_value("server", "port", "8080").unwrap();
//! doc.set_bool("server", "tls", true).unwrap();
//!
//! assert_eq!(doc.serialize(), "[server]\nport=8080\ntls=true\n");
//! # }
//! ```
//!
//! ## Editing one section through a handle
//!
//! ```
//! # #[cfg(feature = "mutation")] {
//! use inidoc::Document;
//!
//! let mut doc = Document::new();
//! doc.parse("[db]\nhost=localhost\nuser=admin\n").unwrap();
//!
//! let mut db = doc.section_mut("db").unwrap();
//! db.set("host", "db.internal").unwrap();
//! db.remove("user").unwrap();
//!
//! assert_eq!(doc.get_string("db", "host").unwrap(), "db.internal");
//! assert!(!doc.has_key("db", "user"));
//! # }
//! ```

use crate::document::{DEFAULT_SECTION, Document};
use crate::error::{IniError, IniResult};
use crate::text::{is_comment_line, split_lines, trim};
use crate::types::{Item, Section};

impl Document {
    /// Set `key` in `section` to `value`, creating either when missing
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> IniResult<()> {
        let key = validate_key(key)?;
        let value = validate_value(value)?;
        let idx = self.ensure_section(section)?;
        upsert(&mut self.sections[idx], key, value);
        Ok(())
    }

    pub fn set_string(&mut self, section: &str, key: &str, value: &str) -> IniResult<()> {
        self.set_value(section, key, value)
    }

    pub fn set_int(&mut self, section: &str, key: &str, value: i64) -> IniResult<()> {
        self.set_value(section, key, &value.to_string())
    }

    pub fn set_double(&mut self, section: &str, key: &str, value: f64) -> IniResult<()> {
        self.set_value(section, key, &value.to_string())
    }

    /// Store `value` using the first pair of the boolean literal table
    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) -> IniResult<()> {
        let token = self.booleans.format(value).to_string();
        self.set_value(section, key, &token)
    }

    /// Replace the comment block written above an existing item
    pub fn set_comment(&mut self, section: &str, key: &str, comment: &str) -> IniResult<()> {
        let item = self.item_mut(section, key)?;
        item.leading_comment = normalize_leading_comment(comment);
        Ok(())
    }

    /// Replace the comment written after an existing item on the same line
    pub fn set_trailing_comment(
        &mut self,
        section: &str,
        key: &str,
        comment: &str,
    ) -> IniResult<()> {
        let item = self.item_mut(section, key)?;
        item.trailing_comment = normalize_trailing_comment(comment);
        Ok(())
    }

    /// Replace the comment block written above a section header
    pub fn set_section_comment(&mut self, section: &str, comment: &str) -> IniResult<()> {
        let idx = self.existing_section(section)?;
        self.sections[idx].set_leading_comment(normalize_leading_comment(comment));
        Ok(())
    }

    /// Replace the comment written after a section header.
    ///
    /// The default section has no header line, so its trailing comment is never written.
    pub fn set_section_trailing_comment(&mut self, section: &str, comment: &str) -> IniResult<()> {
        let idx = self.existing_section(section)?;
        self.sections[idx].set_trailing_comment(normalize_trailing_comment(comment));
        Ok(())
    }

    /// Remove a section with all its items.
    ///
    /// The default section cannot go away; deleting it clears its items and comments.
    pub fn delete_section(&mut self, section: &str) -> IniResult<Section> {
        let idx = self.existing_section(section)?;
        if idx == 0 {
            let removed = self.sections[0].clone();
            self.sections[0].clear();
            return Ok(removed);
        }
        Ok(self.sections.remove(idx))
    }

    /// Remove the first item named `key` from `section`
    pub fn delete_key(&mut self, section: &str, key: &str) -> IniResult<Item> {
        let idx = self.existing_section(section)?;
        self.sections[idx]
            .remove(key)
            .ok_or_else(|| IniError::key_not_found(section, key))
    }

    /// [`Document::set_value`] on the default section
    pub fn set_default_value(&mut self, key: &str, value: &str) -> IniResult<()> {
        self.set_value(DEFAULT_SECTION, key, value)
    }

    pub fn delete_default_key(&mut self, key: &str) -> IniResult<Item> {
        self.delete_key(DEFAULT_SECTION, key)
    }

    /// Mutable handle on an existing section
    pub fn section_mut(&mut self, section: &str) -> IniResult<SectionMut<'_>> {
        let idx = self.existing_section(section)?;
        Ok(SectionMut::new(&mut self.sections[idx]))
    }

    /// Mutable handle on a section, appending it when missing
    pub fn section_mut_or_insert(&mut self, section: &str) -> IniResult<SectionMut<'_>> {
        let idx = self.ensure_section(section)?;
        Ok(SectionMut::new(&mut self.sections[idx]))
    }

    fn existing_section(&self, section: &str) -> IniResult<usize> {
        self.section_index(section)
            .ok_or_else(|| IniError::section_not_found(section))
    }

    fn ensure_section(&mut self, section: &str) -> IniResult<usize> {
        if let Some(idx) = self.section_index(section) {
            return Ok(idx);
        }

        let name = validate_section_name(section)?;
        if let Some(idx) = self.section_index(name) {
            return Ok(idx);
        }

        tracing::debug!(section = %name, "Appending new section");
        self.sections.push(Section::new(name));
        Ok(self.sections.len() - 1)
    }

    fn item_mut(&mut self, section: &str, key: &str) -> IniResult<&mut Item> {
        let idx = self.existing_section(section)?;
        self.sections[idx]
            .get_mut(key)
            .ok_or_else(|| IniError::key_not_found(section, key))
    }
}

/// A mutable reference to one section of a [`Document`].
///
/// Returned by [`Document::section_mut`] and [`Document::section_mut_or_insert`].
/// Items can be set, removed and re-commented; the section's name is fixed.
pub struct SectionMut<'a> {
    section: &'a mut Section,
}

impl<'a> SectionMut<'a> {
    pub(crate) fn new(section: &'a mut Section) -> Self {
        Self { section }
    }

    pub fn name(&self) -> &str {
        self.section.name()
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.section.get(key)
    }

    /// Set `key` to `value`, appending the item when missing
    pub fn set(&mut self, key: &str, value: &str) -> IniResult<()> {
        let key = validate_key(key)?;
        let value = validate_value(value)?;
        upsert(self.section, key, value);
        Ok(())
    }

    /// Remove the first item named `key`
    pub fn remove(&mut self, key: &str) -> IniResult<Item> {
        self.section
            .remove(key)
            .ok_or_else(|| IniError::key_not_found(self.section.name(), key))
    }

    pub fn set_comment(&mut self, key: &str, comment: &str) -> IniResult<()> {
        let name = self.section.name().to_string();
        let item = self
            .section
            .get_mut(key)
            .ok_or_else(|| IniError::key_not_found(name, key))?;
        item.leading_comment = normalize_leading_comment(comment);
        Ok(())
    }

    pub fn set_trailing_comment(&mut self, key: &str, comment: &str) -> IniResult<()> {
        let name = self.section.name().to_string();
        let item = self
            .section
            .get_mut(key)
            .ok_or_else(|| IniError::key_not_found(name, key))?;
        item.trailing_comment = normalize_trailing_comment(comment);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.section.is_empty()
    }
}

fn upsert(section: &mut Section, key: &str, value: &str) {
    match section.get_mut(key) {
        Some(item) => item.value = value.to_string(),
        None => section.push(Item::new(key, value)),
    }
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

fn validate_section_name(name: &str) -> IniResult<&str> {
    let trimmed = trim(name);
    if trimmed.is_empty() {
        return Err(IniError::invalid_name(name, "section name is empty"));
    }
    if trimmed.contains(']') {
        return Err(IniError::invalid_name(name, "section name contains ']'"));
    }
    if has_line_break(trimmed) {
        return Err(IniError::invalid_name(name, "section name contains a line break"));
    }
    Ok(trimmed)
}

fn validate_key(key: &str) -> IniResult<&str> {
    let trimmed = trim(key);
    if trimmed.is_empty() {
        return Err(IniError::invalid_name(key, "key is empty"));
    }
    if trimmed.contains('=') {
        return Err(IniError::invalid_name(key, "key contains '='"));
    }
    if has_line_break(trimmed) {
        return Err(IniError::invalid_name(key, "key contains a line break"));
    }
    if trimmed.starts_with('[') || is_comment_line(trimmed) {
        return Err(IniError::invalid_name(
            key,
            "key starts with a section or comment marker",
        ));
    }
    Ok(trimmed)
}

fn validate_value(value: &str) -> IniResult<&str> {
    if has_line_break(value) {
        return Err(IniError::invalid_value(value, "value contains a line break"));
    }
    Ok(trim(value))
}

/// Turn caller text into a comment block that parses back to itself:
/// every non-blank line starts with `#` or `;`, and the block ends with a newline.
fn normalize_leading_comment(comment: &str) -> String {
    let mut out = String::new();
    for line in split_lines(comment) {
        let line = trim(line);
        if line.is_empty() {
            out.push('\n');
        } else if is_comment_line(line) {
            out.push_str(line);
            out.push('\n');
        } else {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Trailing comments live on one line
fn normalize_trailing_comment(comment: &str) -> String {
    comment
        .split(['\n', '\r'])
        .map(trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
