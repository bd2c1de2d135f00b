use crate::interpreter::token::{is_letter_or_digit, Token};

/// Splits an expression into tokens.
///
/// Runs of letters, digits and `.` become one token each, every other character
/// except space becomes a token of its own. Spaces only separate tokens.
///
/// # Arguments
///
/// * `expression`: The text to split.
///
/// returns: The tokens of the expression, in the order they were written.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("x1 + 2.5*(y)");
/// let texts: Vec<&str> = tokens.iter().map(|token| token.as_str()).collect();
/// assert_eq!(texts, ["x1", "+", "2.5", "*", "(", "y", ")"]);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut operand_start: Option<usize> = None;

    for (index, character) in expression.char_indices() {
        if is_operand_character(character) {
            operand_start.get_or_insert(index);
            continue;
        }

        if let Some(start) = operand_start.take() {
            tokens.push(Token::new(&expression[start..index]));
        }
        if character != ' ' {
            let end = index + character.len_utf8();
            tokens.push(Token::new(&expression[index..end]));
        }
    }

    if let Some(start) = operand_start {
        tokens.push(Token::new(&expression[start..]));
    }

    tokens
}

fn is_operand_character(character: char) -> bool {
    is_letter_or_digit(character) || character == '.'
}
