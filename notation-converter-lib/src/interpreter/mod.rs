pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::ConversionResult;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::{debug, warn};

/// What a failed conversion is displayed as.
pub const ERROR_OUTPUT: &str = "ERROR";

/// Converts an infix expression into postfix notation, for display.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The postfix tokens separated by single spaces, or `"ERROR"` if the
/// expression could not be converted.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::convert_infix_to_postfix;
///
/// assert_eq!(convert_infix_to_postfix("A + B * C"), "A B C * +");
/// assert_eq!(convert_infix_to_postfix("(A + B"), "ERROR");
/// ```
pub fn convert_infix_to_postfix(expression: &str) -> String {
    let tokens = lexer::tokenize(expression);
    format_conversion(parser::to_postfix(tokens))
}

/// Converts a postfix expression into fully parenthesized infix notation, for display.
///
/// # Arguments
///
/// * `expression`: A text expression in postfix format.
///
/// returns: The infix expression, or `"ERROR"` if the expression could not be converted.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::convert_postfix_to_infix;
///
/// assert_eq!(convert_postfix_to_infix("A B C ^ ^"), "A ^ (B ^ C)");
/// assert_eq!(convert_postfix_to_infix("A +"), "ERROR");
/// ```
pub fn convert_postfix_to_infix(expression: &str) -> String {
    match postfix_to_infix(expression) {
        Ok(infix) => infix,
        Err(error) => {
            warn!("Could not convert '{}' to infix: {}", expression, error);
            ERROR_OUTPUT.to_string()
        }
    }
}

/// Converts an infix expression into space separated postfix notation.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::error::ConversionError;
/// use notation_converter::interpreter::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("A^B^C"), Ok("A B C ^ ^".to_string()));
/// assert_eq!(
///     infix_to_postfix("A # B"),
///     Err(ConversionError::UnrecognizedSymbol("#".to_string()))
/// );
/// ```
pub fn infix_to_postfix(expression: &str) -> ConversionResult<String> {
    let tokens = lexer::tokenize(expression);
    debug!("Infix tokens: {:?}", tokens);
    let postfix_tokens = parser::to_postfix(tokens)?;
    debug!("Postfix tokens: {:?}", postfix_tokens);
    Ok(tokens_to_string(&postfix_tokens))
}

/// Converts a postfix expression into fully parenthesized infix notation.
pub fn postfix_to_infix(expression: &str) -> ConversionResult<String> {
    let tokens = lexer::tokenize(expression);
    debug!("Postfix tokens: {:?}", tokens);
    parser::to_infix(&tokens)
}

/// Joins the given tokens with a single space between each pair.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: The tokens as text, without leading or trailing whitespace.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::tokens_to_string;
/// use notation_converter::interpreter::token::Token;
///
/// let tokens = vec![Token::new("x"), Token::new("2"), Token::new("^")];
/// assert_eq!(tokens_to_string(&tokens), "x 2 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token<'_>]) -> String {
    tokens.iter().join(" ")
}

/// Formats the outcome of a conversion, showing any failure as [`ERROR_OUTPUT`].
pub fn format_conversion(conversion: ConversionResult<Vec<Token<'_>>>) -> String {
    match conversion {
        Ok(tokens) => tokens_to_string(&tokens),
        Err(error) => {
            warn!("Conversion failed: {}", error);
            ERROR_OUTPUT.to_string()
        }
    }
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::ConversionError;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "A + B * C",
    "A ^ B ^ C",
    "(A + B) * C",
    "A+B",
    "x1 * (y.5 - 3) / z ^ 2",
    "a > b = c < d",
    "",
    },
    expected_postfix = {
    "A B C * +",
    "A B C ^ ^",
    "A B + C *",
    "A B +",
    "x1 y.5 3 - * z 2 ^ /",
    "a b > c d < =",
    "",
    }
    )]
    fn infix_expression_converts_to_expected_postfix(expression: &str, expected_postfix: &str) {
        assert_eq!(convert_infix_to_postfix(expression), expected_postfix);
    }

    #[parameterized(expression = { "( A + B", "A + B )", "A # B", "A $", "x²", "½ + 1" })]
    fn bad_infix_expression_displays_error(expression: &str) {
        assert_eq!(convert_infix_to_postfix(expression), ERROR_OUTPUT);
    }

    #[parameterized(expression = { "A +", "A B", "A B C +" })]
    fn bad_postfix_expression_displays_error(expression: &str) {
        assert_eq!(convert_postfix_to_infix(expression), ERROR_OUTPUT);
    }

    #[test]
    fn unmatched_parentheses_are_classified() {
        assert_eq!(
            infix_to_postfix("( A + B"),
            Err(ConversionError::UnmatchedParenthesis)
        );
        assert_eq!(
            infix_to_postfix("A + B )"),
            Err(ConversionError::UnmatchedParenthesis)
        );
    }

    #[test]
    fn missing_operand_is_classified() {
        assert_eq!(postfix_to_infix("A +"), Err(ConversionError::MissingOperand));
    }

    #[test]
    fn degenerate_postfix_inputs() {
        assert_eq!(convert_postfix_to_infix(""), "");
        assert_eq!(convert_postfix_to_infix("A"), "A");
    }

    #[test]
    fn parenthesized_expression_survives_round_trip() {
        let postfix = convert_infix_to_postfix("(A + B)");
        assert_eq!(postfix, "A B +");
        assert_eq!(convert_postfix_to_infix(&postfix), "A + B");
    }

    #[parameterized(
    expression = {
    "((A + B) * (C - D))",
    "(A ^ (B ^ C))",
    "(((a < b) & (c = d)) | e)",
    },
    expected_infix = {
    "(A + B) * (C - D)",
    "A ^ (B ^ C)",
    "((a < b) & (c = d)) | e",
    }
    )]
    fn fully_parenthesized_expression_survives_round_trip(
        expression: &str,
        expected_infix: &str,
    ) {
        let postfix = convert_infix_to_postfix(expression);
        assert_eq!(convert_postfix_to_infix(&postfix), expected_infix);
    }

    #[test]
    fn postfix_output_is_stable_when_retokenized() {
        let postfix = convert_infix_to_postfix("a + b * (c - d) / e ^ 2");
        let retokenized = tokens_to_string(&lexer::tokenize(&postfix));
        assert_eq!(retokenized, postfix);
    }

    #[test]
    fn tokens_to_string_has_no_surrounding_whitespace() {
        let tokens = lexer::tokenize("  a  +  b  ");
        assert_eq!(tokens_to_string(&tokens), "a + b");
        assert_eq!(tokens_to_string(&[]), "");
    }

    #[test]
    fn failed_conversion_formats_as_error() {
        let failed: ConversionResult<Vec<Token>> = Err(ConversionError::MalformedPostfix);
        assert_eq!(format_conversion(failed), ERROR_OUTPUT);
    }
}
