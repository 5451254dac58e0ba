//! A small glob pattern matching library.
//!
//! This crate matches whole strings against patterns with `*` (zero or more
//! characters) and `?` (exactly one character) wildcards.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one character (a Unicode scalar value, not a byte)
//! - `\*`, `\?` - Escaped literal wildcards
//! - `\` before any other character, or at the end of the pattern, is a literal backslash
//! - Any other character matches itself, case-sensitively
//!
//! Every string is a valid pattern, so construction never fails.
//!
//! # Examples
//!
//! ```
//! use glob_expr::GlobMatcher;
//!
//! let glob = GlobMatcher::new("*.txt");
//! assert!(glob.is_match("hello.txt"));
//! assert!(!glob.is_match("hello.rs"));
//!
//! let glob = GlobMatcher::new("test?.log");
//! assert!(glob.is_match("test1.log"));
//! assert!(!glob.is_match("test.log"));
//!
//! let glob = GlobMatcher::new(r"file\*.txt");
//! assert!(glob.is_match("file*.txt"));
//! assert!(!glob.is_match("file123.txt"));
//! ```
//!
//! # Complexity
//!
//! Matching is recursive backtracking over the compiled tokens. Each `*` tries
//! every split of the remaining text, shortest first, so the worst case is
//! exponential in the number of `*` tokens. Recursion depth grows with the number
//! of `*` tokens only, not with the text length.
//!
//! # Features
//!
//! - `serde` - (de)serializes [`GlobMatcher`] as its pattern string

mod matcher;
mod set;
mod token;

pub use matcher::GlobMatcher;
pub use set::GlobSet;
pub use token::Token;
