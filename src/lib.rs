//! # inidoc
//!
//! A reader and writer for INI configuration files that keeps comments,
//! blank lines and ordering intact.
//!
//! ## Features
//!
//! - **Sections and items**: an optional unnamed default section followed by
//!   `[named]` sections of `key=value` items, all in file order
//! - **Comments**: `#` and `;` comment lines (and blank lines) attach to the
//!   entity that follows them; `# ...` after a header or item stays on its line
//! - **Typed access**: string, integer, double and boolean getters with
//!   `_or` variants that fall back to a default
//! - **Per-document boolean literals**: `true/false`, `yes/no`, `on/off`, `1/0`,
//!   extensible with [`Document::register_booleans`]
//! - **Error recovery**: malformed lines are skipped and reported, or abort the
//!   load with [`IniOptions::fail_fast`]
//! - **Mutation & Serialization**: set, re-comment and delete values, then write
//!   the document back with [`Document::save`] / [`Document::save_as`]
//!
//! ## Optional Features
//!
//! ### `mutation` Feature
//!
//! Enabled by default. Provides [`Document::set_value`] and the typed setters,
//! comment setters, [`Document::delete_section`], [`Document::delete_key`] and
//! the [`SectionMut`] handle.
//!
//! ## Example
//!
//! ```rust
//! use inidoc::{Document, DEFAULT_SECTION};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::new();
//!
//! doc.parse(r#"
//! name = demo
//!
//! # Connection settings
//! [server]
//! host = localhost
//! port = 8080   # default port
//! debug = yes
//! "#)?;
//!
//! assert_eq!(doc.get_string(DEFAULT_SECTION, "name")?, "demo");
//! assert_eq!(doc.get_int("server", "port")?, 8080);
//! assert!(doc.get_bool("server", "debug")?);
//! assert_eq!(doc.get_item("server", "port")?.trailing_comment, "default port");
//! assert_eq!(doc.section("server")?.leading_comment(), "\n# Connection settings\n");
//!
//! // Missing keys fall back to a default
//! assert_eq!(doc.get_int_or("server", "timeout", 30), 30);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Recovery
//!
//! ```rust
//! use inidoc::{Document, IniError};
//!
//! let mut doc = Document::new();
//! let result = doc.parse("[a]\nx=1\n[a]\ny=2\n");
//!
//! assert_eq!(
//!     result.unwrap_err(),
//!     IniError::SectionAlreadyExists { line: 3, name: "a".to_string() }
//! );
//! // Everything else was still loaded
//! assert_eq!(doc.get_string("a", "y").unwrap(), "2");
//! ```

// Module declarations
mod booleans;
mod document;
mod error;
mod escaping;
mod options;
mod parser;
mod serializer;
mod text;
mod types;

// Feature-gated modules
#[cfg(feature = "mutation")]
mod mutation;

// Public API exports
pub use booleans::BooleanLiterals;
pub use document::{DEFAULT_SECTION, Document};
pub use error::{IniError, IniResult};
pub use options::IniOptions;
pub use types::{Item, NativeValue, Section};

// Re-export submodules for advanced usage
pub use escaping::escape_hashes;
pub use parser::{IniParser, ParsedDocument, SplitLine, Statement};
pub use text::{
    UniversalLines, eq_ignore_case, is_comment_line, split_lines, split_on_first, starts_with, trim,
    trim_left_char, trim_right_char,
};
pub use types::{parse_double, parse_int};

// Feature-gated exports
#[cfg(feature = "mutation")]
pub use mutation::SectionMut;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
