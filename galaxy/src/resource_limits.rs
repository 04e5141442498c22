/// Resource limits to keep a single batch bounded
///
/// These limits protect a host (such as the HTTP server) against oversized
/// input while being generous enough for any legitimate merchant's notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum number of lines in one batch
    /// Real usage: ~20 lines, Limit: 10,000
    pub max_lines: usize,

    /// Maximum length of a single line in bytes
    /// Real usage: ~60 bytes, Limit: 4KB
    pub max_line_bytes: usize,

    /// Maximum number of alien symbols in one numeral
    /// The longest canonical numeral (MMMDCCCLXXXVIII) has 15 digits
    pub max_numeral_symbols: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_lines: 10_000,
            max_line_bytes: 4 * 1024, // 4 KB
            max_numeral_symbols: 15,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
