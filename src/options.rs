/// Per-document behavior switches
#[derive(Debug, Clone, PartialEq)]
pub struct IniOptions {
    /// Stop at the first malformed line instead of collecting every line error.
    /// A failed fail-fast load leaves the document untouched.
    pub fail_fast: bool,

    /// Reject non-numeric text in the integer/double getters instead of
    /// reading the longest numeric prefix (or zero)
    pub strict_numbers: bool,

    /// Match boolean literals ignoring ASCII case
    pub case_insensitive_booleans: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self {
            fail_fast: false,
            strict_numbers: false,
            case_insensitive_booleans: false,
        }
    }
}
