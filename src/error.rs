use thiserror::Error;

/// Result type alias for INI operations
pub type IniResult<T> = Result<T, IniError>;

/// Errors that can occur while loading, querying, mutating or saving an INI document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IniError {
    /// The file could not be opened or read
    #[error("Failed to open '{path}': {message}")]
    OpenFileFailed { path: String, message: String },

    /// The serialized document could not be written
    #[error("Failed to write '{path}': {message}")]
    WriteFailed { path: String, message: String },

    /// `save` was called on a document that was never loaded or saved
    #[error("Document has no source path; use save_as")]
    NoSourcePath,

    /// A section header opened with `[` but never closed
    #[error("Line {line}: no matching ']' found")]
    UnmatchedBrackets { line: usize },

    /// Section header brackets enclose only whitespace
    #[error("Line {line}: section name is empty")]
    SectionNameEmpty { line: usize },

    /// A section header repeats the name of an earlier section
    #[error("Line {line}: section '{name}' already exists")]
    SectionAlreadyExists { line: usize, name: String },

    /// Grammar-level failure from pest.
    ///
    /// The line grammar accepts any input, so this only surfaces if the
    /// grammar is tightened later.
    #[error("Parse error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Lookup of a section that is not present
    #[error("Section '{section}' not found")]
    SectionNotFound { section: String },

    /// Lookup of a key that is not present in its section
    #[error("Key '{key}' not found in section '{section}'")]
    KeyNotFound { section: String, key: String },

    /// Value matches none of the registered boolean literals
    #[error("'{value}' is not an expected boolean value")]
    BooleanParse { value: String },

    /// Value is not a number (strict numeric mode only)
    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    /// Section name or key rejected by a mutation
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Value rejected by a mutation
    #[error("Invalid value '{value}': {reason}")]
    InvalidValue { value: String, reason: String },

    /// Several line-level errors collected during one load
    #[error("{}", format_multiple(.errors))]
    Multiple { errors: Vec<IniError> },
}

fn format_multiple(errors: &[IniError]) -> String {
    let mut out = String::from("Multiple errors occurred:");
    for (i, err) in errors.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, err));
    }
    out
}

impl IniError {
    /// Create an open-file error
    pub fn open_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        IniError::OpenFileFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a write error
    pub fn write_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        IniError::WriteFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a syntax error
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        IniError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a section not found error
    pub fn section_not_found(section: impl Into<String>) -> Self {
        IniError::SectionNotFound {
            section: section.into(),
        }
    }

    /// Create a key not found error
    pub fn key_not_found(section: impl Into<String>, key: impl Into<String>) -> Self {
        IniError::KeyNotFound {
            section: section.into(),
            key: key.into(),
        }
    }

    /// Create a boolean parse error
    pub fn boolean_parse(value: impl Into<String>) -> Self {
        IniError::BooleanParse {
            value: value.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(value: impl Into<String>, reason: impl Into<String>) -> Self {
        IniError::InvalidNumber {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        IniError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        IniError::InvalidValue {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Collapse collected line errors: one error stays as-is, several become `Multiple`
    pub fn from_line_errors(mut errors: Vec<IniError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(IniError::Multiple { errors }),
        }
    }

    /// Source line the error refers to, for parse-time errors
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::UnmatchedBrackets { line }
            | IniError::SectionNameEmpty { line }
            | IniError::SectionAlreadyExists { line, .. }
            | IniError::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether this is a recoverable, per-line parse error
    pub fn is_line_error(&self) -> bool {
        self.line().is_some()
    }

    /// Re-anchor a grammar error produced for a single line onto its real line number
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            IniError::Syntax { column, message, .. } => IniError::Syntax {
                line,
                column,
                message,
            },
            other => other,
        }
    }
}

impl<R: pest::RuleType> From<pest::error::Error<R>> for IniError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        IniError::Syntax {
            line,
            column,
            message: err.variant.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_accessor() {
        assert_eq!(IniError::UnmatchedBrackets { line: 4 }.line(), Some(4));
        assert_eq!(IniError::key_not_found("a", "b").line(), None);
        assert!(IniError::SectionNameEmpty { line: 1 }.is_line_error());
    }

    #[test]
    fn test_from_line_errors() {
        assert_eq!(IniError::from_line_errors(Vec::new()), None);

        let single = IniError::from_line_errors(vec![IniError::SectionNameEmpty { line: 2 }]);
        assert_eq!(single, Some(IniError::SectionNameEmpty { line: 2 }));

        let many = IniError::from_line_errors(vec![
            IniError::SectionNameEmpty { line: 2 },
            IniError::UnmatchedBrackets { line: 5 },
        ]);
        match many {
            Some(IniError::Multiple { errors }) => assert_eq!(errors.len(), 2),
            other => panic!("Expected Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let err = IniError::SectionAlreadyExists {
            line: 3,
            name: "net".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: section 'net' already exists");

        let multi = IniError::Multiple {
            errors: vec![
                IniError::UnmatchedBrackets { line: 1 },
                IniError::SectionNameEmpty { line: 2 },
            ],
        };
        let text = multi.to_string();
        assert!(text.starts_with("Multiple errors occurred:"));
        assert!(text.contains("1. Line 1: no matching ']' found"));
        assert!(text.contains("2. Line 2: section name is empty"));
    }

    #[test]
    fn test_at_line() {
        let err = IniError::syntax(1, 7, "unexpected").at_line(12);
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn test_from_pest_error() {
        let pos = pest::Position::new("key = value", 4).unwrap();
        let pest_err = pest::error::Error::<crate::parser::Rule>::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "bad token".to_string(),
            },
            pos,
        );

        match IniError::from(pest_err) {
            IniError::Syntax {
                line,
                column,
                message,
            } => {
                assert_eq!((line, column), (1, 5));
                assert_eq!(message, "bad token");
            }
            other => panic!("Expected Syntax, got {:?}", other),
        }
    }
}
