use std::slice;

use crate::matcher::GlobMatcher;

/// An ordered collection of glob patterns tested together.
///
/// # Examples
///
/// ```
/// use glob_expr::GlobSet;
///
/// let set = GlobSet::new(["*.rs", "Cargo.*"]);
/// assert!(set.any_match("Cargo.toml"));
/// assert_eq!(set.first_match("lib.rs").map(|g| g.pattern()), Some("*.rs"));
/// assert_eq!(set.first_match("README.md"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobSet {
    items: Vec<GlobMatcher>,
}

impl GlobSet {
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GlobMatcher>,
    {
        patterns.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, GlobMatcher> {
        self.items.iter()
    }

    pub fn push(&mut self, glob: impl Into<GlobMatcher>) {
        self.items.push(glob.into());
    }

    /// Returns `true` if at least one pattern matches; always `false` for an empty set.
    pub fn any_match(&self, text: &str) -> bool {
        self.items.iter().any(|glob| glob.is_match(text))
    }

    /// Returns `true` if every pattern matches; always `true` for an empty set.
    pub fn all_match(&self, text: &str) -> bool {
        self.items.iter().all(|glob| glob.is_match(text))
    }

    /// Returns the first pattern, in insertion order, that matches the text.
    pub fn first_match(&self, text: &str) -> Option<&GlobMatcher> {
        self.items.iter().find(|glob| glob.is_match(text))
    }

    /// Returns the indices of all matching patterns in insertion order.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, glob)| glob.is_match(text))
            .map(|(i, _)| i)
    }
}

impl<T: Into<GlobMatcher>> FromIterator<T> for GlobSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<GlobMatcher>> Extend<T> for GlobSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into))
    }
}

impl<'a> IntoIterator for &'a GlobSet {
    type Item = &'a GlobMatcher;
    type IntoIter = slice::Iter<'a, GlobMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for GlobSet {
    type Item = GlobMatcher;
    type IntoIter = std::vec::IntoIter<GlobMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
