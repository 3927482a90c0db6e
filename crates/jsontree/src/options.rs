/// Default cap on the number of characters kept for a single string or
/// number literal.
pub const DEFAULT_MAX_LITERAL_LEN: usize = 1 << 20;

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for the tree parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ParserOptions, StreamingParser};
///
/// let options = ParserOptions {
///     max_literal_len: 64,
///     ..Default::default()
/// };
/// let mut parser = StreamingParser::new(options);
/// parser.parse_chunk("[1]").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of characters kept for one string or number literal.
    ///
    /// Characters beyond the cap are **silently dropped**: the literal is
    /// truncated and parsing continues. This bounds memory on adversarial
    /// input, but it also means a long value can come back shorter than it
    /// was sent, and a truncated number may no longer be a valid number.
    /// Escape sequences in strings are never split; an escape that does not
    /// fit whole is dropped.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_LITERAL_LEN`]
    pub max_literal_len: usize,

    /// Maximum container nesting depth, or `None` for no limit.
    ///
    /// Opening a container beyond the limit fails with
    /// [`ParseError::DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// `Some(`[`DEFAULT_MAX_DEPTH`]`)`
    pub max_depth: Option<usize>,

    /// Whether to allow any Unicode whitespace between tokens.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_literal_len: DEFAULT_MAX_LITERAL_LEN,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_unicode_whitespace: false,
        }
    }
}
