use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use memchr::memmem::find_iter;

use crate::token::{Token, tokenize};

/// A compiled glob pattern.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
/// - `\*` and `\?` match a literal `*` and `?`
/// - `\` followed by anything else, or at the end of the pattern, is a literal backslash
///
/// # Examples
///
/// ```
/// use glob_expr::GlobMatcher;
///
/// let glob = GlobMatcher::new("*/*/*");
/// assert!(glob.is_match("foo/bar/baz"));
/// assert!(!glob.is_match("foo/bar"));
///
/// let glob = GlobMatcher::new(r"what\?");
/// assert!(glob.is_match("what?"));
/// assert!(!glob.is_match("whatx"));
/// ```
///
/// Matching is plain recursive backtracking. Its worst case is exponential in the
/// number of `*` tokens, so callers matching untrusted patterns against long text
/// should bound the input lengths themselves.
#[derive(Clone)]
pub struct GlobMatcher {
    pattern: Arc<str>,
    tokens: Arc<[Token]>,
}

impl GlobMatcher {
    /// Compiles a pattern.
    ///
    /// This function is infallible; every string, including the empty one, is a valid pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use glob_expr::GlobMatcher;
    ///
    /// let glob = GlobMatcher::new("");
    /// assert!(glob.is_match(""));
    /// assert!(!glob.is_match("a"));
    ///
    /// // Backslash escapes only wildcards, before anything else it stays literal
    /// let glob = GlobMatcher::new(r"C:\temp\?");
    /// assert!(glob.is_match(r"C:\temp?"));
    /// assert!(!glob.is_match(r"C:\temp\?"));
    /// assert!(!glob.is_match(r"C:\tempx"));
    ///
    /// let glob = GlobMatcher::new(r"C:\temp\x");
    /// assert!(glob.is_match(r"C:\temp\x"));
    /// ```
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern: String = pattern.into();
        let tokens = tokenize(&pattern);
        Self {
            pattern: pattern.into(),
            tokens: tokens.into(),
        }
    }

    /// Returns the pattern string exactly as it was given.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled tokens.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns `true` if the pattern has no wildcards, so it matches only one text.
    pub fn is_literal(&self) -> bool {
        !self.tokens.iter().any(Token::is_wildcard)
    }

    /// Tests whether the whole `text` matches the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use glob_expr::GlobMatcher;
    ///
    /// let glob = GlobMatcher::new("a*b");
    /// assert!(glob.is_match("ab"));
    /// assert!(glob.is_match("abbbb"));
    /// assert!(!glob.is_match("a"));
    /// assert!(!glob.is_match("abbbbc"));
    ///
    /// // `?` consumes a whole character, not a byte
    /// let glob = GlobMatcher::new("??");
    /// assert!(glob.is_match("🦀🎉"));
    /// ```
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.match_at(0, text, 0)
    }

    fn match_at(&self, mut pos: usize, text: &str, mut offset: usize) -> bool {
        while let Some(token) = self.tokens.get(pos) {
            match *token {
                Token::Literal(expected) => match text[offset..].chars().next() {
                    Some(ch) if ch == expected => offset += ch.len_utf8(),
                    _ => return false,
                },
                Token::AnyChar => match text[offset..].chars().next() {
                    Some(ch) => offset += ch.len_utf8(),
                    None => return false,
                },
                Token::AnySequence => return self.match_star(pos + 1, text, offset),
            }
            pos += 1;
        }

        offset == text.len()
    }

    // Tries the tokens starting at `pos` against every suffix of `text[offset..]`,
    // shortest skip first.
    fn match_star(&self, pos: usize, text: &str, offset: usize) -> bool {
        let rest = &text[offset..];
        match self.tokens.get(pos) {
            None => true,
            Some(&Token::Literal(ch)) => {
                let mut buf = [0; 4];
                let needle = ch.encode_utf8(&mut buf);
                find_iter(rest.as_bytes(), needle.as_bytes()).any(|i| self.match_at(pos, text, offset + i))
            }
            Some(_) => {
                rest.char_indices().any(|(i, _)| self.match_at(pos, text, offset + i))
                    || self.match_at(pos, text, text.len())
            }
        }
    }
}

impl fmt::Debug for GlobMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GlobMatcher").field(&self.pattern).finish()
    }
}

impl fmt::Display for GlobMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl PartialEq for GlobMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for GlobMatcher {}

impl Hash for GlobMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state)
    }
}

impl FromStr for GlobMatcher {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for GlobMatcher {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for GlobMatcher {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl AsRef<str> for GlobMatcher {
    fn as_ref(&self) -> &str {
        self.pattern()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GlobMatcher {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.pattern())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GlobMatcher {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}
