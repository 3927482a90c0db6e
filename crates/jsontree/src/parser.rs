//! The resumable tree parser.
//!
//! [`ParseState`] is a character-at-a-time automaton. Each call to
//! [`ParseState::parse_chunk`] consumes a whole chunk and leaves the automaton
//! exactly where the chunk ended, so a document can be split anywhere: inside
//! a string escape, between the digits of a `\u` escape, in the middle of a
//! number's exponent or of a `true`/`false`/`null` keyword.
//!
//! Nodes are attached to the [`Tree`] as soon as they are complete. Containers
//! are attached when they open and the `cursor` descends into them; closing a
//! container ascends again, skipping over the label whose value just closed.
//! A node is either fully attached or not attached at all.
//!
//! On any fatal error the partially built tree is destroyed before the error
//! is returned, and the state stays failed until [`ParseState::reset`].
//!
//! # Examples
//!
//! ```rust
//! use jsontree::{NodeKind, ParserOptions, StreamingParser, Status};
//!
//! let mut parser = StreamingParser::new(ParserOptions::default());
//! assert_eq!(parser.parse_chunk(r#"{"a":1"#).unwrap(), Status::Incomplete);
//! assert_eq!(parser.parse_chunk("2}").unwrap(), Status::Complete);
//!
//! let root = parser.root().unwrap();
//! assert_eq!(root.kind(), NodeKind::Object);
//! let label = root.first_child().unwrap();
//! assert_eq!(label.text(), Some("a"));
//! assert_eq!(label.first_child().unwrap().text(), Some("12"));
//! ```
#![allow(clippy::enum_glob_use)]

use tracing::{debug, trace, warn};

use crate::{
    error::{ParseError, TreeError},
    node::{NodeId, NodeKind, NodeRef, Tree},
    options::ParserOptions,
    text_buffer::TextBuffer,
};

/// Outcome of a successful [`ParseState::parse_chunk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Status {
    /// The root value has closed; [`ParseState::root`] returns it. Only
    /// whitespace may follow.
    Complete,
    /// More input is needed. All state is kept for the next chunk.
    Incomplete,
}

/// Resumption points of the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    // -- structural --
    /// Awaiting the top-level value.
    Start,
    /// After `{`: a label or `}`.
    ObjectOpen,
    /// After `,` inside an object: a label.
    ObjectLabel,
    /// After a label: `:`.
    LabelColon,
    /// After `:`: the label's value.
    LabelValue,
    /// After `[`: a value or `]`.
    ArrayOpen,
    /// After `,` inside an array: a value.
    ArrayValue,
    /// After a value inside a container: `,` or the matching close.
    AfterValue,
    /// The root has closed: whitespace only.
    End,

    // -- strings --
    String,
    StringEscape,
    StringEscapeUnicode1,
    StringEscapeUnicode2,
    StringEscapeUnicode3,
    StringEscapeUnicode4,

    // -- numbers --
    Sign,
    Zero,
    DecimalInteger,
    DecimalPoint,
    DecimalFraction,
    DecimalExponent,
    DecimalExponentSign,
    DecimalExponentInteger,

    // -- keywords, one state per remaining character --
    TrueR,
    TrueU,
    TrueE,
    FalseA,
    FalseL,
    FalseS,
    FalseE,
    NullU,
    NullL,
    NullLL,

    Error,
}

impl LexState {
    /// States in which the number text so far is a complete number.
    fn is_accepting_number(self) -> bool {
        matches!(
            self,
            LexState::Zero
                | LexState::DecimalInteger
                | LexState::DecimalFraction
                | LexState::DecimalExponentInteger
        )
    }
}

/// The resumable cursor record for one in-progress document.
///
/// `ParseState` does not own the nodes it creates; they live in the [`Tree`]
/// passed to each call, which must be the same tree for the whole document.
/// [`StreamingParser`] bundles the two for the common case.
#[derive(Debug)]
pub struct ParseState {
    state: LexState,
    /// Container (or label) receiving the next child; the root once complete.
    cursor: Option<NodeId>,
    /// Text of the string or number literal being assembled.
    pending: TextBuffer,
    length_cap_reached: bool,
    depth: usize,

    line: usize,
    column: usize,

    failure: Option<ParseError>,
    options: ParserOptions,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl ParseState {
    /// Creates a state positioned before the first value.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            state: LexState::Start,
            cursor: None,
            pending: TextBuffer::new(),
            length_cap_reached: false,
            depth: 0,
            line: 1,
            column: 1,
            failure: None,
            options,
        }
    }

    /// The options this state was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The node currently open for children, or the root once the document
    /// is complete. `None` before the first value starts.
    #[must_use]
    pub fn cursor(&self) -> Option<NodeId> {
        self.cursor
    }

    /// The root, once the document is complete.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        if self.state == LexState::End {
            self.cursor
        } else {
            None
        }
    }

    /// Returns `true` once the root value has closed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == LexState::End
    }

    /// Returns `true` if the current (or most recently completed) literal was
    /// truncated at the length cap.
    #[must_use]
    pub fn length_cap_reached(&self) -> bool {
        self.length_cap_reached
    }

    /// 1-based line and column of the next character.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Feeds one chunk of the document.
    ///
    /// Returns [`Status::Incomplete`] when the chunk ends before the root
    /// value closes; call again with the next chunk. A number at the top
    /// level stays incomplete until a delimiter or [`ParseState::finish`]
    /// ends it.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`] is fatal: the partial tree has been destroyed and
    /// later calls return the same error until [`ParseState::reset`].
    pub fn parse_chunk(&mut self, tree: &mut Tree, chunk: &str) -> Result<Status, ParseError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        for c in chunk.chars() {
            if let Err(err) = self.step(tree, c) {
                return Err(self.fail(tree, err));
            }
            self.advance_position(c);
        }
        Ok(if self.is_complete() {
            Status::Complete
        } else {
            Status::Incomplete
        })
    }

    /// Signals the end of input and returns the root.
    ///
    /// A top-level number still waiting for a delimiter is completed here.
    ///
    /// # Errors
    ///
    /// [`ParseError::IncompleteDocument`] if the root has not closed; the
    /// state is left untouched and more input may still be fed. Any other
    /// error is fatal, as in [`ParseState::parse_chunk`].
    pub fn finish(&mut self, tree: &mut Tree) -> Result<NodeId, ParseError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if self.cursor.is_none() && self.state.is_accepting_number() {
            if let Err(err) = self.complete_number(tree) {
                return Err(self.fail(tree, err));
            }
        }
        match self.root() {
            Some(root) => Ok(root),
            None => Err(ParseError::IncompleteDocument {
                line: self.line,
                column: self.column,
            }),
        }
    }

    /// Returns the state to its initial position, keeping the options.
    ///
    /// A partially built tree is destroyed; a completed root is left in the
    /// tree for the caller.
    pub fn reset(&mut self, tree: &mut Tree) {
        if !self.is_complete() {
            self.discard_partial(tree);
        }
        *self = Self::new(self.options);
    }

    // ------------------------------------------------------------------------------------------------
    // Automaton
    // ------------------------------------------------------------------------------------------------

    #[allow(clippy::too_many_lines)]
    fn step(&mut self, tree: &mut Tree, c: char) -> Result<(), ParseError> {
        use LexState::*;
        match self.state {
            Start | LabelValue | ArrayValue => self.begin_value(tree, c),

            ArrayOpen => match c {
                ']' => self.close_container(tree),
                _ => self.begin_value(tree, c),
            },

            ObjectOpen => match c {
                c if self.is_whitespace(c) => Ok(()),
                '"' => self.begin_string(),
                '}' => self.close_container(tree),
                c => Err(self.illegal(c)),
            },

            ObjectLabel => match c {
                c if self.is_whitespace(c) => Ok(()),
                '"' => self.begin_string(),
                c => Err(self.illegal(c)),
            },

            LabelColon => match c {
                c if self.is_whitespace(c) => Ok(()),
                ':' => {
                    self.state = LabelValue;
                    Ok(())
                }
                c => Err(self.illegal(c)),
            },

            AfterValue => match c {
                c if self.is_whitespace(c) => Ok(()),
                ',' => {
                    self.state = match self.cursor_kind(tree)? {
                        NodeKind::Array => ArrayValue,
                        NodeKind::Object => ObjectLabel,
                        other => return Err(Self::misplaced_cursor(other)),
                    };
                    Ok(())
                }
                '}' if self.cursor_kind(tree)? == NodeKind::Object => self.close_container(tree),
                ']' if self.cursor_kind(tree)? == NodeKind::Array => self.close_container(tree),
                c => Err(self.illegal(c)),
            },

            End => match c {
                c if self.is_whitespace(c) => Ok(()),
                c => Err(self.illegal(c)),
            },

            // -------------------------- STRING -----------------------------
            String => match c {
                '"' => self.complete_string(tree),
                '\\' => {
                    // The backslash is kept only once the whole escape is known
                    // to fit under the length cap.
                    self.state = StringEscape;
                    Ok(())
                }
                '\0'..='\x1F' => Err(self.illegal(c)),
                c => self.push_pending(c),
            },

            StringEscape => match c {
                '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => {
                    self.push_escape(c, 2)?;
                    self.state = String;
                    Ok(())
                }
                'u' => {
                    self.push_escape(c, 6)?;
                    self.state = StringEscapeUnicode1;
                    Ok(())
                }
                c => Err(self.illegal(c)),
            },

            StringEscapeUnicode1 => self.hex_digit(c, StringEscapeUnicode2),
            StringEscapeUnicode2 => self.hex_digit(c, StringEscapeUnicode3),
            StringEscapeUnicode3 => self.hex_digit(c, StringEscapeUnicode4),
            StringEscapeUnicode4 => self.hex_digit(c, String),

            // -------------------------- NUMBERS -----------------------------
            Sign => match c {
                '0' => self.push_number(c, Zero),
                '1'..='9' => self.push_number(c, DecimalInteger),
                c => Err(self.illegal(c)),
            },

            // A leading zero is never followed by another digit.
            Zero => match c {
                '.' => self.push_number(c, DecimalPoint),
                'e' | 'E' => self.push_number(c, DecimalExponent),
                c => self.terminate_number(tree, c),
            },

            DecimalInteger => match c {
                '0'..='9' => self.push_pending(c),
                '.' => self.push_number(c, DecimalPoint),
                'e' | 'E' => self.push_number(c, DecimalExponent),
                c => self.terminate_number(tree, c),
            },

            DecimalPoint => match c {
                '0'..='9' => self.push_number(c, DecimalFraction),
                c => Err(self.illegal(c)),
            },

            DecimalFraction => match c {
                '0'..='9' => self.push_pending(c),
                'e' | 'E' => self.push_number(c, DecimalExponent),
                c => self.terminate_number(tree, c),
            },

            DecimalExponent => match c {
                '+' | '-' => self.push_number(c, DecimalExponentSign),
                '0'..='9' => self.push_number(c, DecimalExponentInteger),
                c => Err(self.illegal(c)),
            },

            DecimalExponentSign => match c {
                '0'..='9' => self.push_number(c, DecimalExponentInteger),
                c => Err(self.illegal(c)),
            },

            DecimalExponentInteger => match c {
                '0'..='9' => self.push_pending(c),
                c => self.terminate_number(tree, c),
            },

            // -------------------------- KEYWORDS ----------------------------
            TrueR => self.expect_keyword(c, 'r', TrueU),
            TrueU => self.expect_keyword(c, 'u', TrueE),
            TrueE => self.complete_keyword(tree, c, 'e', NodeKind::True),
            FalseA => self.expect_keyword(c, 'a', FalseL),
            FalseL => self.expect_keyword(c, 'l', FalseS),
            FalseS => self.expect_keyword(c, 's', FalseE),
            FalseE => self.complete_keyword(tree, c, 'e', NodeKind::False),
            NullU => self.expect_keyword(c, 'u', NullL),
            NullL => self.expect_keyword(c, 'l', NullLL),
            NullLL => self.complete_keyword(tree, c, 'l', NodeKind::Null),

            Error => Err(self.illegal(c)),
        }
    }

    /// Dispatch for every state that expects a value.
    fn begin_value(&mut self, tree: &mut Tree, c: char) -> Result<(), ParseError> {
        use LexState::*;
        match c {
            c if self.is_whitespace(c) => Ok(()),
            '{' => self.open_container(tree, NodeKind::Object),
            '[' => self.open_container(tree, NodeKind::Array),
            '"' => self.begin_string(),
            '-' => self.begin_number(c, Sign),
            '0' => self.begin_number(c, Zero),
            '1'..='9' => self.begin_number(c, DecimalInteger),
            't' => {
                self.state = TrueR;
                Ok(())
            }
            'f' => {
                self.state = FalseA;
                Ok(())
            }
            'n' => {
                self.state = NullU;
                Ok(())
            }
            c => Err(self.illegal(c)),
        }
    }

    #[inline]
    fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r')
            || (self.options.allow_unicode_whitespace && c.is_whitespace())
    }

    // ------------------------------------------------------------------------------------------------
    // Literals
    // ------------------------------------------------------------------------------------------------

    fn begin_literal(&mut self) {
        self.pending = TextBuffer::new();
        self.length_cap_reached = false;
    }

    fn begin_string(&mut self) -> Result<(), ParseError> {
        self.begin_literal();
        self.state = LexState::String;
        Ok(())
    }

    fn begin_number(&mut self, c: char, next: LexState) -> Result<(), ParseError> {
        self.begin_literal();
        self.push_number(c, next)
    }

    #[inline]
    fn push_number(&mut self, c: char, next: LexState) -> Result<(), ParseError> {
        self.push_pending(c)?;
        self.state = next;
        Ok(())
    }

    /// Returns whether `n` more characters fit under the length cap. Once a
    /// character is refused, everything after it in the literal is refused
    /// too.
    fn fits(&mut self, n: usize) -> bool {
        if self.length_cap_reached {
            return false;
        }
        if self.pending.len() + n > self.options.max_literal_len {
            self.length_cap_reached = true;
            warn!(
                limit = self.options.max_literal_len,
                line = self.line,
                column = self.column,
                "literal truncated at length cap"
            );
            return false;
        }
        true
    }

    #[inline]
    fn push_pending(&mut self, c: char) -> Result<(), ParseError> {
        if self.fits(1) {
            self.pending.try_push(c).map_err(|_| ParseError::Memory)?;
        }
        Ok(())
    }

    /// Appends `\` and `c` if the whole `width`-character escape fits.
    fn push_escape(&mut self, c: char, width: usize) -> Result<(), ParseError> {
        if self.fits(width) {
            self.pending.try_push('\\').map_err(|_| ParseError::Memory)?;
            self.pending.try_push(c).map_err(|_| ParseError::Memory)?;
        }
        Ok(())
    }

    fn hex_digit(&mut self, c: char, next: LexState) -> Result<(), ParseError> {
        if !c.is_ascii_hexdigit() {
            return Err(self.illegal(c));
        }
        self.push_pending(c)?;
        self.state = next;
        Ok(())
    }

    fn expect_keyword(&mut self, c: char, expected: char, next: LexState) -> Result<(), ParseError> {
        if c != expected {
            return Err(self.illegal(c));
        }
        self.state = next;
        Ok(())
    }

    fn complete_keyword(
        &mut self,
        tree: &mut Tree,
        c: char,
        expected: char,
        kind: NodeKind,
    ) -> Result<(), ParseError> {
        if c != expected {
            return Err(self.illegal(c));
        }
        let node = tree.new_node(kind)?;
        self.complete_value(tree, node)
    }

    fn complete_string(&mut self, tree: &mut Tree) -> Result<(), ParseError> {
        let text = core::mem::take(&mut self.pending).into_string();
        let node = tree.new_text_node(NodeKind::String, text)?;
        match self.cursor {
            Some(cursor) if tree.kind(cursor)? == NodeKind::Object => {
                Self::attach(tree, cursor, node)?;
                self.cursor = Some(node);
                self.state = LexState::LabelColon;
                Ok(())
            }
            _ => self.complete_value(tree, node),
        }
    }

    fn complete_number(&mut self, tree: &mut Tree) -> Result<(), ParseError> {
        let text = core::mem::take(&mut self.pending).into_string();
        let node = tree.new_text_node(NodeKind::Number, text)?;
        self.complete_value(tree, node)
    }

    /// Ends a number on `c`, which is then dispatched in the follow-up state.
    fn terminate_number(&mut self, tree: &mut Tree, c: char) -> Result<(), ParseError> {
        if !(self.is_whitespace(c) || matches!(c, ',' | '}' | ']')) {
            return Err(self.illegal(c));
        }
        self.complete_number(tree)?;
        self.step(tree, c)
    }

    // ------------------------------------------------------------------------------------------------
    // Tree construction
    // ------------------------------------------------------------------------------------------------

    /// Links `node` under `parent`, destroying `node` if the link is refused
    /// so nothing is left half-attached.
    fn attach(tree: &mut Tree, parent: NodeId, node: NodeId) -> Result<(), ParseError> {
        if let Err(err) = tree.append_child(parent, node) {
            tree.destroy(node)?;
            return Err(err.into());
        }
        Ok(())
    }

    /// Attaches a finished scalar and moves to the follow-up state.
    fn complete_value(&mut self, tree: &mut Tree, node: NodeId) -> Result<(), ParseError> {
        let Some(cursor) = self.cursor else {
            self.cursor = Some(node);
            self.state = LexState::End;
            let kind = tree.kind(node)?;
            debug!(%kind, "document complete");
            return Ok(());
        };
        Self::attach(tree, cursor, node)?;
        match tree.kind(cursor)? {
            NodeKind::Array => {}
            // The label has its value; continue in the enclosing object.
            NodeKind::String => self.cursor = Some(Self::label_owner(tree, cursor)?),
            other => return Err(Self::misplaced_cursor(other)),
        }
        self.state = LexState::AfterValue;
        Ok(())
    }

    fn open_container(&mut self, tree: &mut Tree, kind: NodeKind) -> Result<(), ParseError> {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(ParseError::DepthLimitExceeded {
                    limit,
                    line: self.line,
                    column: self.column,
                });
            }
        }
        let node = tree.new_node(kind)?;
        if let Some(cursor) = self.cursor {
            Self::attach(tree, cursor, node)?;
        }
        self.cursor = Some(node);
        self.depth += 1;
        self.state = if kind == NodeKind::Object {
            LexState::ObjectOpen
        } else {
            LexState::ArrayOpen
        };
        trace!(%kind, depth = self.depth, "open container");
        Ok(())
    }

    fn close_container(&mut self, tree: &mut Tree) -> Result<(), ParseError> {
        let closed = self.cursor.ok_or(ParseError::BadTreeStructure(TreeError::UnknownNode))?;
        self.depth = self.depth.saturating_sub(1);
        let kind = tree.kind(closed)?;
        trace!(%kind, depth = self.depth, "close container");
        match tree.parent(closed)? {
            None => {
                self.state = LexState::End;
                debug!(nodes = tree.len(), "document complete");
            }
            Some(parent) => {
                self.cursor = Some(if tree.kind(parent)? == NodeKind::String {
                    Self::label_owner(tree, parent)?
                } else {
                    parent
                });
                self.state = LexState::AfterValue;
            }
        }
        Ok(())
    }

    fn label_owner(tree: &Tree, label: NodeId) -> Result<NodeId, ParseError> {
        tree.parent(label)?
            .ok_or(ParseError::BadTreeStructure(TreeError::DetachedLabel))
    }

    fn cursor_kind(&self, tree: &Tree) -> Result<NodeKind, ParseError> {
        let cursor = self.cursor.ok_or(ParseError::BadTreeStructure(TreeError::UnknownNode))?;
        Ok(tree.kind(cursor)?)
    }

    fn misplaced_cursor(kind: NodeKind) -> ParseError {
        ParseError::BadTreeStructure(TreeError::InvalidChild {
            parent: kind,
            child: kind,
        })
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    fn illegal(&self, c: char) -> ParseError {
        ParseError::IllegalCharacter {
            found: Some(c),
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    fn advance_position(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn fail(&mut self, tree: &mut Tree, err: ParseError) -> ParseError {
        let freed = self.discard_partial(tree);
        debug!(error = %err, freed, "parse failed");
        self.state = LexState::Error;
        self.failure = Some(err.clone());
        err
    }

    /// Destroys everything reachable from the cursor's topmost ancestor.
    fn discard_partial(&mut self, tree: &mut Tree) -> usize {
        self.pending = TextBuffer::new();
        self.depth = 0;
        let Some(cursor) = self.cursor.take() else {
            return 0;
        };
        // A root the caller already freed is no longer ours to destroy.
        match tree.root_of(cursor).and_then(|root| tree.destroy(root)) {
            Ok(freed) => freed,
            Err(err) => {
                warn!(error = %err, "partial tree not discarded");
                0
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Owning front end
// ------------------------------------------------------------------------------------------------

/// A [`ParseState`] together with the [`Tree`] it builds.
///
/// # Examples
///
/// ```rust
/// use jsontree::{NodeKind, ParseError, ParserOptions, StreamingParser, Status};
///
/// let mut parser = StreamingParser::new(ParserOptions::default());
/// assert_eq!(parser.parse_chunk("[1,2,").unwrap(), Status::Incomplete);
/// assert!(matches!(
///     parser.finish(),
///     Err(ParseError::IncompleteDocument { .. })
/// ));
/// assert_eq!(parser.parse_chunk("3]").unwrap(), Status::Complete);
///
/// let (tree, root) = parser.into_tree();
/// assert_eq!(tree.to_json_string(root.unwrap()).unwrap(), "[1,2,3]");
/// ```
#[derive(Debug, Default)]
pub struct StreamingParser {
    tree: Tree,
    state: ParseState,
}

impl StreamingParser {
    /// Creates a parser with an empty tree.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            tree: Tree::new(),
            state: ParseState::new(options),
        }
    }

    /// Feeds one chunk. See [`ParseState::parse_chunk`].
    ///
    /// # Errors
    ///
    /// See [`ParseState::parse_chunk`].
    pub fn parse_chunk(&mut self, chunk: &str) -> Result<Status, ParseError> {
        self.state.parse_chunk(&mut self.tree, chunk)
    }

    /// Signals end of input. See [`ParseState::finish`].
    ///
    /// # Errors
    ///
    /// See [`ParseState::finish`].
    pub fn finish(&mut self) -> Result<NodeId, ParseError> {
        self.state.finish(&mut self.tree)
    }

    /// The completed root.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.state.root().and_then(|id| self.tree.get(id))
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The automaton state.
    #[must_use]
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Drops the current document and starts over with the same options.
    pub fn reset(&mut self) {
        self.tree = Tree::new();
        self.state = ParseState::new(*self.state.options());
    }

    /// Consumes the parser, returning the tree and its root if complete.
    #[must_use]
    pub fn into_tree(self) -> (Tree, Option<NodeId>) {
        let root = self.state.root();
        (self.tree, root)
    }
}

/// Parses a complete document in one call.
///
/// ```rust
/// let (tree, root) = jsontree::parse("[true, null]", jsontree::ParserOptions::default()).unwrap();
/// assert_eq!(tree.to_json_string(root).unwrap(), "[true,null]");
/// ```
///
/// # Errors
///
/// Any [`ParseError`], including [`ParseError::IncompleteDocument`] for
/// truncated input.
pub fn parse(text: &str, options: ParserOptions) -> Result<(Tree, NodeId), ParseError> {
    let mut parser = StreamingParser::new(options);
    let _ = parser.parse_chunk(text)?;
    let root = parser.finish()?;
    Ok((parser.tree, root))
}
