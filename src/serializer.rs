//! Turn sections back into INI text.
//!
//! Output layout per section: leading comment verbatim, `[name]` header
//! (omitted for the default section) with ` #comment` appended when the
//! section has a trailing comment, then each item as its leading comment
//! followed by `key=value` and an optional ` #comment`. Every line ends with
//! exactly one `\n`. A `#` in a section name, key or value is written as `\#`.

use crate::escaping::escape_hashes;
use crate::text::ensure_line_break;
use crate::types::{Item, Section};

/// Serialize sections in order
pub fn serialize_sections(sections: &[Section]) -> String {
    let mut output = String::new();
    for section in sections {
        write_section(&mut output, section);
    }
    output
}

fn write_section(output: &mut String, section: &Section) {
    write_comment_block(output, section.leading_comment());

    if !section.is_default() {
        output.push('[');
        output.push_str(&escape_hashes(section.name()));
        output.push(']');
        write_trailing_comment(output, section.trailing_comment());
        output.push('\n');
    }

    for item in section.items() {
        write_item(output, item);
    }
}

fn write_item(output: &mut String, item: &Item) {
    write_comment_block(output, &item.leading_comment);

    output.push_str(&escape_hashes(&item.key));
    output.push('=');
    output.push_str(&escape_hashes(&item.value));
    write_trailing_comment(output, &item.trailing_comment);
    output.push('\n');
}

fn write_comment_block(output: &mut String, comment: &str) {
    if comment.is_empty() {
        return;
    }
    output.push_str(comment);
    ensure_line_break(output);
}

fn write_trailing_comment(output: &mut String, comment: &str) {
    if !comment.is_empty() {
        output.push_str(" #");
        output.push_str(comment);
    }
}
