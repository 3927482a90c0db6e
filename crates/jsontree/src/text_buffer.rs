//! Growable, owned character buffer.
//!
//! [`TextBuffer`] backs both the parser's in-flight literal (`pending`) and the
//! serializer's output. Growth goes through [`String::try_reserve`], so an
//! allocation failure is reported to the caller instead of aborting; the
//! parser and serializer surface it as a `Memory` error.
use alloc::{collections::TryReserveError, string::String};
use core::fmt;

/// An append-only text buffer that tracks its length in characters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    chars: usize,
}

impl TextBuffer {
    /// Creates an empty buffer without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            chars: 0,
        }
    }

    /// Creates an empty buffer with room for at least `bytes` bytes.
    ///
    /// # Errors
    ///
    /// Returns the allocator's error if the capacity cannot be reserved.
    pub fn try_with_capacity(bytes: usize) -> Result<Self, TryReserveError> {
        let mut buf = Self::new();
        buf.text.try_reserve(bytes)?;
        Ok(buf)
    }

    /// Appends a single character. Amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns the allocator's error if the buffer cannot grow.
    #[inline]
    pub fn try_push(&mut self, c: char) -> Result<(), TryReserveError> {
        self.text.try_reserve(c.len_utf8())?;
        self.text.push(c);
        self.chars += 1;
        Ok(())
    }

    /// Appends every character of `s`. O(k) in the length of `s`.
    ///
    /// # Errors
    ///
    /// Returns the allocator's error if the buffer cannot grow.
    #[inline]
    pub fn try_push_str(&mut self, s: &str) -> Result<(), TryReserveError> {
        self.text.try_reserve(s.len())?;
        self.text.push_str(s);
        self.chars += s.chars().count();
        Ok(())
    }

    /// Number of characters appended so far.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.chars
    }

    /// Returns `true` if nothing has been appended.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Borrow the accumulated text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Moves the accumulated text out without copying.
    #[must_use]
    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            text: String::from(s),
            chars: s.chars().count(),
        }
    }
}
