use std::fmt;

/// A single element of a compiled glob pattern.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// `?`, matches exactly one character.
    AnyChar,
    /// `*`, matches zero or more characters.
    AnySequence,
}

impl Token {
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(ch @ ('*' | '?')) => write!(f, "\\{}", ch),
            Self::Literal(ch) => write!(f, "{}", ch),
            Self::AnyChar => write!(f, "?"),
            Self::AnySequence => write!(f, "*"),
        }
    }
}

/// Converts a raw pattern string into a token sequence.
///
/// A backslash escapes only `*` and `?`. Followed by anything else, or at the
/// end of the pattern, it stands for itself and the next character is
/// tokenized as usual. Runs of `*` collapse into a single [`Token::AnySequence`].
pub(crate) fn tokenize(raw: &str) -> Vec<Token> {
    Compiler::new(raw.len()).compile(raw)
}

// ---

struct Compiler {
    tokens: Vec<Token>,
}

impl Compiler {
    fn new(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, token: Token) {
        if token == Token::AnySequence && self.tokens.last() == Some(&Token::AnySequence) {
            return;
        }
        self.tokens.push(token);
    }

    fn compile(mut self, raw: &str) -> Vec<Token> {
        let mut chars = raw.chars().peekable();
        while let Some(ch) = chars.next() {
            let token = match ch {
                '*' => Token::AnySequence,
                '?' => Token::AnyChar,
                '\\' => match chars.peek() {
                    Some(&escaped @ ('*' | '?')) => {
                        chars.next();
                        Token::Literal(escaped)
                    }
                    _ => Token::Literal('\\'),
                },
                _ => Token::Literal(ch),
            };
            self.push(token);
        }

        self.tokens.shrink_to_fit();
        self.tokens
    }
}

#[cfg(test)]
mod tests;
