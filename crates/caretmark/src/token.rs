//! The markup language's tokens and tokenizer.
//!
//! The tokenizer scans a markup string one character at a time and classifies
//! each character as either one of the four reserved markup characters or as
//! literal text. It deliberately knows nothing about the grammar: digits,
//! reset markers, and span content are all literal at this level, and their
//! meaning is decided by the [`Formatter`](crate::Formatter) based on its
//! current state.

/// The opening delimiter of a brace span.
pub(crate) const OPEN_BRACE: char = '{';

/// A styling layer, i.e., foreground or background.
///
/// Each layer has its own escape-introducer and its own reset marker, so a
/// two-character directive fully determines which attribute nibble to update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground layer, introduced by `^` and reset by `^!`.
    Foreground,
    /// The background layer, introduced by `*` and reset by `*:`.
    Background,
}

impl Layer {
    /// Get the escape-introducer character for this layer.
    pub const fn introducer(&self) -> char {
        match self {
            Self::Foreground => '^',
            Self::Background => '*',
        }
    }

    /// Get the reset-marker character for this layer.
    pub const fn reset_marker(&self) -> char {
        match self {
            Self::Foreground => '!',
            Self::Background => ':',
        }
    }
}

/// The classification of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An escape-introducer for the given layer.
    Introducer(Layer),
    /// The opening delimiter of a brace span.
    OpenBrace,
    /// The closing delimiter of a brace span.
    CloseBrace,
    /// Any other character.
    Literal,
}

/// A single character together with its classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    value: char,
    kind: TokenKind,
}

impl Token {
    /// Classify the given character.
    pub fn new(value: char) -> Self {
        let kind = match value {
            '^' => TokenKind::Introducer(Layer::Foreground),
            '*' => TokenKind::Introducer(Layer::Background),
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            _ => TokenKind::Literal,
        };

        Self { value, kind }
    }

    /// Get this token's character.
    pub fn value(&self) -> char {
        self.value
    }

    /// Get this token's classification.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// A cursor over a markup string's tokens.
///
/// The cursor always sits on a valid character; it never advances past the
/// last one. An empty source has no valid cursor position, which [`good()`]
/// reports; callers must check it before reading the current token.
/// Iteration is count-bounded through [`next()`] returning whether an advance
/// occurred, so exhausting the input cannot dereference one-past-the-end.
///
/// [`good()`]: Tokenizer::good
/// [`next()`]: Tokenizer::next
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    rest: std::str::Chars<'a>,
    current: Option<char>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer over the given source.
    pub fn new(source: &'a str) -> Self {
        let mut rest = source.chars();
        let current = rest.next();
        Self { rest, current }
    }

    /// Determine whether the cursor sits on a valid character.
    ///
    /// This only is `false` for an empty source.
    pub fn good(&self) -> bool {
        self.current.is_some()
    }

    /// Get the token at the cursor, or `None` if the source was empty.
    pub fn current(&self) -> Option<Token> {
        self.current.map(Token::new)
    }

    /// Advance the cursor by one character.
    ///
    /// Returns whether an advance occurred; once the cursor sits on the last
    /// character, it stays there and this method returns `false`.
    pub fn next(&mut self) -> bool {
        if self.is_end() {
            false
        } else {
            self.current = self.rest.next();
            true
        }
    }

    /// Determine whether the cursor sits on the final character.
    pub fn is_end(&self) -> bool {
        self.rest.as_str().is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{Layer, Token, TokenKind, Tokenizer};

    #[test]
    fn test_classification() {
        assert_eq!(
            Token::new('^').kind(),
            TokenKind::Introducer(Layer::Foreground)
        );
        assert_eq!(
            Token::new('*').kind(),
            TokenKind::Introducer(Layer::Background)
        );
        assert_eq!(Token::new('{').kind(), TokenKind::OpenBrace);
        assert_eq!(Token::new('}').kind(), TokenKind::CloseBrace);

        // Digits and whitespace are literal at this level.
        assert_eq!(Token::new('7').kind(), TokenKind::Literal);
        assert_eq!(Token::new(' ').kind(), TokenKind::Literal);
        assert_eq!(Token::new('!').kind(), TokenKind::Literal);
    }

    #[test]
    fn test_empty_source() {
        let tokenizer = Tokenizer::new("");
        assert!(!tokenizer.good());
        assert_eq!(tokenizer.current(), None);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut tokenizer = Tokenizer::new("ab");
        assert!(tokenizer.good());
        assert!(!tokenizer.is_end());
        assert_eq!(tokenizer.current().map(|t| t.value()), Some('a'));

        assert!(tokenizer.next());
        assert!(tokenizer.is_end());
        assert_eq!(tokenizer.current().map(|t| t.value()), Some('b'));

        // The cursor never reads past the last character.
        assert!(!tokenizer.next());
        assert!(tokenizer.good());
        assert_eq!(tokenizer.current().map(|t| t.value()), Some('b'));
    }

    #[test]
    fn test_single_character() {
        let mut tokenizer = Tokenizer::new("x");
        assert!(tokenizer.good());
        assert!(tokenizer.is_end());
        assert!(!tokenizer.next());
    }
}
