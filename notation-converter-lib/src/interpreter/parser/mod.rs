mod infix_converter;
mod postfix_converter;

use crate::interpreter::error::ConversionResult;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::parser::postfix_converter::postfix_to_infix;
use crate::interpreter::token::Token;

/// Rearranges the given infix tokens into postfix (reverse Polish) order.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to rearrange, in infix format.
///
/// returns: The same operands and operators in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use notation_converter::interpreter::error::ConversionError;
/// # fn main() -> Result<(), ConversionError> {
/// use notation_converter::interpreter::parser::to_postfix;
/// use notation_converter::interpreter::token::Token;
///
/// let infix_tokens = vec![Token::new("x"), Token::new("^"), Token::new("2")];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens, [Token::new("x"), Token::new("2"), Token::new("^")]);
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token<'_>>) -> ConversionResult<Vec<Token<'_>>> {
    infix_to_postfix(infix_tokens)
}

/// Rebuilds a fully parenthesized infix expression from the given postfix tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to rebuild, in postfix format.
///
/// returns: The infix text, with every operation but the outermost in parentheses.
///
/// # Examples
///
/// ```
/// # use notation_converter::interpreter::error::ConversionError;
/// # fn main() -> Result<(), ConversionError> {
/// use notation_converter::interpreter::parser::to_infix;
/// use notation_converter::interpreter::token::Token;
///
/// let postfix_tokens = [Token::new("a"), Token::new("b"), Token::new("c"), Token::new("*"), Token::new("+")];
/// assert_eq!(to_infix(&postfix_tokens)?, "a + (b * c)");
/// # Ok(()) }
/// ```
pub fn to_infix(postfix_tokens: &[Token<'_>]) -> ConversionResult<String> {
    postfix_to_infix(postfix_tokens)
}
