use crate::interpreter::operator;
use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression, borrowed from the text it was read from.
///
/// Tokens are not tagged when they are created; what a token means is decided by
/// [`Token::kind`] whenever a converter looks at it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a>(&'a str);

/// What a token turns out to be when it is classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Operand,
    Operator(&'static Operator),
    OpenParenthesis,
    CloseParenthesis,
    Unrecognized,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Token<'a> {
        Token(text)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Classifies the token, checking in order: operand, operator, parentheses.
    pub fn kind(&self) -> TokenKind {
        if self.is_operand() {
            return TokenKind::Operand;
        }
        if let Some(operator) = operator::lookup(self.0) {
            return TokenKind::Operator(operator);
        }
        match self.0 {
            "(" => TokenKind::OpenParenthesis,
            ")" => TokenKind::CloseParenthesis,
            _ => TokenKind::Unrecognized,
        }
    }

    /// An operand is a token that starts with a letter or a digit.
    pub fn is_operand(&self) -> bool {
        self.0
            .chars()
            .next()
            .map_or(false, is_letter_or_digit)
    }

    pub fn is_operator(&self) -> bool {
        operator::is_operator(self.0)
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self.0, "(" | ")")
    }
}

/// A letter of any script, or a decimal digit `0`-`9`.
///
/// Numeric characters such as `²`, `½` or `ⅷ` are neither.
pub(crate) fn is_letter_or_digit(character: char) -> bool {
    (character.is_alphabetic() && !character.is_numeric()) || character.is_ascii_digit()
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
