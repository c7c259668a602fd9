use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::error::{IniError, IniResult};
use crate::options::IniOptions;
use crate::text::{is_comment_line, split_lines, split_on_first, trim};
use crate::types::{Item, Section};

#[derive(Parser)]
#[grammar = "ini.pest"]
pub struct IniParser;

/// Result of parsing a whole document
#[derive(Debug)]
pub struct ParsedDocument {
    /// Sections in file order, the default section first
    pub sections: Vec<Section>,

    /// Line-level errors that were recovered from, in line order
    pub errors: Vec<IniError>,
}

/// A classified non-comment line
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `[name]`, name already trimmed (may be empty)
    Header { name: String },

    /// `[` without a closing `]`; `bare` when nothing follows the bracket
    OpenHeader { bare: bool },

    /// `key = value`, or a lone key with an empty value
    Entry { key: String, value: String },
}

/// A trimmed line with its trailing comment removed and `\#` unescaped
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLine {
    pub content: String,
    pub trailing_comment: String,
}

impl IniParser {
    /// Separate content from the trailing `#` comment
    pub fn split_line(line: &str) -> IniResult<SplitLine> {
        let pair = Self::parse(Rule::line, line)?
            .next()
            .ok_or_else(|| IniError::syntax(1, 1, "empty line parse"))?;

        let mut content = String::new();
        let mut trailing_comment = String::new();

        for part in pair.into_inner() {
            match part.as_rule() {
                Rule::content => {
                    for piece in part.into_inner() {
                        match piece.as_rule() {
                            Rule::escaped_hash => content.push('#'),
                            _ => content.push_str(piece.as_str()),
                        }
                    }
                }
                Rule::trailing => {
                    if let Some(text) = part.into_inner().next() {
                        trailing_comment = trim(text.as_str()).to_string();
                    }
                }
                _ => {}
            }
        }

        Ok(SplitLine {
            content: trim(&content).to_string(),
            trailing_comment,
        })
    }

    /// Classify comment-free content as a header or an entry
    pub fn classify(content: &str) -> IniResult<Statement> {
        let pair = Self::parse(Rule::statement, content)?
            .next()
            .ok_or_else(|| IniError::syntax(1, 1, "empty statement parse"))?;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::header => {
                    let name = first_inner(inner)
                        .map(|p| trim(p.as_str()).to_string())
                        .unwrap_or_default();
                    return Ok(Statement::Header { name });
                }
                Rule::open_header => {
                    let bare = first_inner(inner)
                        .map(|p| trim(p.as_str()).is_empty())
                        .unwrap_or(true);
                    return Ok(Statement::OpenHeader { bare });
                }
                Rule::entry => {
                    let (key, value) = split_on_first(inner.as_str(), "=");
                    return Ok(Statement::Entry {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
                _ => {}
            }
        }

        Err(IniError::syntax(1, 1, "unrecognized statement"))
    }

    /// Parse a whole document.
    ///
    /// Blank lines and whole-line comments accumulate into a pending buffer
    /// that becomes the leading comment of the next header or entry. Comments
    /// still pending at the end of input are dropped.
    ///
    /// Malformed lines are recorded and skipped unless `options.fail_fast` is
    /// set, in which case the first one is returned as the error.
    pub fn parse_document(input: &str, options: &IniOptions) -> IniResult<ParsedDocument> {
        let mut builder = DocumentBuilder::new();

        for (idx, raw) in split_lines(input).enumerate() {
            let line_no = idx + 1;

            if let Err(err) = builder.feed(raw, line_no) {
                tracing::warn!(line = line_no, error = %err, "Skipping malformed line");
                if options.fail_fast {
                    return Err(err);
                }
                builder.errors.push(err);
            }
        }

        if !builder.pending_comment.is_empty() {
            tracing::trace!(
                bytes = builder.pending_comment.len(),
                "Discarding comment at end of input"
            );
        }

        Ok(ParsedDocument {
            sections: builder.sections,
            errors: builder.errors,
        })
    }
}

fn first_inner(pair: Pair<'_, Rule>) -> Option<Pair<'_, Rule>> {
    pair.into_inner().next()
}

/// Line-by-line state: the sections built so far, the index of the section
/// receiving entries, and the pending leading comment.
struct DocumentBuilder {
    sections: Vec<Section>,
    current: usize,
    pending_comment: String,
    errors: Vec<IniError>,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            sections: vec![Section::new("")],
            current: 0,
            pending_comment: String::new(),
            errors: Vec::new(),
        }
    }

    fn feed(&mut self, raw: &str, line_no: usize) -> IniResult<()> {
        let line = trim(raw);

        if line.is_empty() {
            self.pending_comment.push('\n');
            return Ok(());
        }

        if is_comment_line(line) {
            self.pending_comment.push_str(line);
            self.pending_comment.push('\n');
            return Ok(());
        }

        // Comments are consumed by this line whether or not it turns out to be valid
        let leading_comment = std::mem::take(&mut self.pending_comment);

        let split = IniParser::split_line(line).map_err(|e| e.at_line(line_no))?;
        let statement = IniParser::classify(&split.content).map_err(|e| e.at_line(line_no))?;

        match statement {
            Statement::Header { name } => {
                self.open_section(name, leading_comment, split.trailing_comment, line_no)
            }
            Statement::OpenHeader { bare: true } => {
                Err(IniError::SectionNameEmpty { line: line_no })
            }
            Statement::OpenHeader { bare: false } => {
                Err(IniError::UnmatchedBrackets { line: line_no })
            }
            Statement::Entry { key, value } => {
                let item = Item {
                    key,
                    value,
                    leading_comment,
                    trailing_comment: split.trailing_comment,
                };
                self.sections[self.current].push(item);
                Ok(())
            }
        }
    }

    fn open_section(
        &mut self,
        name: String,
        leading_comment: String,
        trailing_comment: String,
        line_no: usize,
    ) -> IniResult<()> {
        if name.is_empty() {
            return Err(IniError::SectionNameEmpty { line: line_no });
        }

        if self.sections.iter().any(|s| s.name() == name) {
            return Err(IniError::SectionAlreadyExists {
                line: line_no,
                name,
            });
        }

        tracing::trace!(section = %name, line = line_no, "Opening section");

        self.sections
            .push(Section::with_comments(name, leading_comment, trailing_comment));
        self.current = self.sections.len() - 1;
        Ok(())
    }
}
