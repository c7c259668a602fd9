//! In-memory INI document.
//!
//! A [`Document`] owns an ordered list of [`Section`]s. The unnamed default
//! section is always present at index 0 and holds the items that appear
//! before the first `[header]`. Sections and items keep file order from load
//! through save, and comments stay attached to the entity that follows them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::booleans::BooleanLiterals;
use crate::error::{IniError, IniResult};
use crate::options::IniOptions;
use crate::parser::IniParser;
use crate::serializer::serialize_sections;
use crate::types::{Item, NativeValue, Section, parse_double, parse_int};

/// Name of the implicit section holding items before the first header
pub const DEFAULT_SECTION: &str = "";

/// A parsed INI file
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) sections: Vec<Section>,

    /// Path of the last successful load or save
    source_path: Option<PathBuf>,

    /// Boolean literal table used by `get_bool`/`set_bool`
    pub(crate) booleans: BooleanLiterals,

    /// Line errors recovered from during the last parse
    line_errors: Vec<IniError>,

    options: IniOptions,
}

impl Document {
    /// Create an empty document holding only the default section
    pub fn new() -> Self {
        Self::with_options(IniOptions::default())
    }

    /// Create an empty document with custom options
    pub fn with_options(options: IniOptions) -> Self {
        Self {
            sections: vec![Section::new(DEFAULT_SECTION)],
            source_path: None,
            booleans: BooleanLiterals::default(),
            line_errors: Vec::new(),
            options,
        }
    }

    /// Load a fresh document from `path`.
    ///
    /// Only I/O failures are returned as errors; malformed lines are skipped
    /// and reported through [`Document::line_errors`].
    pub fn from_file(path: impl AsRef<Path>) -> IniResult<Self> {
        let mut doc = Self::new();
        match doc.load(path) {
            Ok(()) => Ok(doc),
            Err(err) if err.is_line_error() || matches!(err, IniError::Multiple { .. }) => Ok(doc),
            Err(err) => Err(err),
        }
    }

    /// Replace the content of this document with the parse of `input`.
    ///
    /// Malformed lines are skipped. When any were found the best-effort
    /// document is still installed and the error (or `IniError::Multiple`)
    /// is returned. With `fail_fast` the first malformed line aborts and the
    /// document is left untouched.
    pub fn parse(&mut self, input: &str) -> IniResult<()> {
        let parsed = IniParser::parse_document(input, &self.options)?;

        self.sections = parsed.sections;
        self.line_errors = parsed.errors;

        tracing::debug!(
            sections = self.sections.len(),
            errors = self.line_errors.len(),
            "Parsed INI document"
        );

        match IniError::from_line_errors(self.line_errors.clone()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Read and parse the file at `path`.
    ///
    /// A file that cannot be read yields `OpenFileFailed` and leaves the
    /// current content in place. Otherwise behaves like [`Document::parse`]
    /// and remembers `path` for [`Document::save`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> IniResult<()> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| IniError::open_file(path.display().to_string(), e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loading INI file");

        let result = self.parse(&content);
        if result.is_ok() || !self.options.fail_fast {
            self.source_path = Some(path.to_path_buf());
        }
        result
    }

    /// Write to the path of the last load or save
    pub fn save(&self) -> IniResult<()> {
        let path = self.source_path.as_ref().ok_or(IniError::NoSourcePath)?;
        self.write_to(path)
    }

    /// Write to `path` and make it the target of later [`Document::save`] calls
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> IniResult<()> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&self, path: &Path) -> IniResult<()> {
        let data = self.serialize();
        fs::write(path, &data)
            .map_err(|e| IniError::write_failed(path.display().to_string(), e.to_string()))?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Saved INI file");
        Ok(())
    }

    /// Serialize the document back to INI text
    pub fn serialize(&self) -> String {
        serialize_sections(&self.sections)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Errors recovered from during the last parse or load
    pub fn line_errors(&self) -> &[IniError] {
        &self.line_errors
    }

    /// Append a custom `(true, false)` boolean literal pair
    pub fn register_booleans(
        &mut self,
        true_token: impl Into<String>,
        false_token: impl Into<String>,
    ) {
        self.booleans.register(true_token, false_token);
    }

    pub fn booleans(&self) -> &BooleanLiterals {
        &self.booleans
    }

    // ---- sections ----

    /// All sections, the default section first
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name()).collect()
    }

    pub fn section(&self, name: &str) -> IniResult<&Section> {
        self.sections
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| IniError::section_not_found(name))
    }

    pub fn default_section(&self) -> &Section {
        &self.sections[0]
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section_index(name).is_some()
    }

    /// Sections whose names appear in `names`, in document order
    pub fn sections_named(&self, names: &[&str]) -> Vec<&Section> {
        self.sections_matching(|s| names.contains(&s.name()))
    }

    /// Sections accepted by `predicate`, in document order
    pub fn sections_matching<P>(&self, mut predicate: P) -> Vec<&Section>
    where
        P: FnMut(&Section) -> bool,
    {
        self.sections.iter().filter(|s| predicate(s)).collect()
    }

    pub(crate) fn section_index(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name() == name)
    }

    // ---- items ----

    pub fn get_item(&self, section: &str, key: &str) -> IniResult<&Item> {
        self.section(section)?
            .get(key)
            .ok_or_else(|| IniError::key_not_found(section, key))
    }

    /// Raw value and leading comment of `key`
    pub fn get_value(&self, section: &str, key: &str) -> IniResult<NativeValue<'_>> {
        let item = self.get_item(section, key)?;
        Ok(NativeValue {
            value: &item.value,
            comment: &item.leading_comment,
        })
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.get_item(section, key).is_ok()
    }

    pub fn keys(&self, section: &str) -> IniResult<Vec<&str>> {
        Ok(self.section(section)?.keys())
    }

    pub fn values(&self, section: &str) -> IniResult<Vec<&str>> {
        Ok(self.section(section)?.values())
    }

    pub fn entries(&self, section: &str) -> IniResult<Vec<(&str, &str)>> {
        Ok(self.section(section)?.entries())
    }

    pub fn items(&self, section: &str) -> IniResult<&[Item]> {
        Ok(self.section(section)?.items())
    }

    pub fn items_len(&self, section: &str) -> IniResult<usize> {
        Ok(self.section(section)?.len())
    }

    // ---- typed getters ----

    pub fn get_string(&self, section: &str, key: &str) -> IniResult<&str> {
        Ok(self.get_value(section, key)?.value)
    }

    pub fn get_int(&self, section: &str, key: &str) -> IniResult<i64> {
        parse_int(self.get_string(section, key)?, self.options.strict_numbers)
    }

    pub fn get_double(&self, section: &str, key: &str) -> IniResult<f64> {
        parse_double(self.get_string(section, key)?, self.options.strict_numbers)
    }

    pub fn get_bool(&self, section: &str, key: &str) -> IniResult<bool> {
        let value = self.get_string(section, key)?;
        self.booleans
            .parse(value, self.options.case_insensitive_booleans)
    }

    pub fn get_string_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get_string(section, key).unwrap_or(default)
    }

    pub fn get_int_or(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_int(section, key).unwrap_or(default)
    }

    pub fn get_double_or(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_double(section, key).unwrap_or(default)
    }

    pub fn get_bool_or(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_bool(section, key).unwrap_or(default)
    }

    // ---- default section shorthands ----

    /// [`Document::get_string`] on the default section
    pub fn get_default_string(&self, key: &str) -> IniResult<&str> {
        self.get_string(DEFAULT_SECTION, key)
    }

    pub fn get_default_int(&self, key: &str) -> IniResult<i64> {
        self.get_int(DEFAULT_SECTION, key)
    }

    pub fn get_default_double(&self, key: &str) -> IniResult<f64> {
        self.get_double(DEFAULT_SECTION, key)
    }

    pub fn get_default_bool(&self, key: &str) -> IniResult<bool> {
        self.get_bool(DEFAULT_SECTION, key)
    }

    pub fn has_default_key(&self, key: &str) -> bool {
        self.has_key(DEFAULT_SECTION, key)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
