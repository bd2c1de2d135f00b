use crate::interpreter::error::{ConversionError, ConversionResult};
use crate::interpreter::operator::Operator;
use crate::interpreter::token::{Token, TokenKind};
use std::collections::VecDeque;

/// Rearranges infix tokens into postfix order using the shunting-yard algorithm.
///
/// Nothing is emitted unless the whole conversion succeeds.
pub(crate) fn infix_to_postfix(
    original_tokens: Vec<Token<'_>>,
) -> ConversionResult<Vec<Token<'_>>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    while let Some(token) = tokens.pop_front() {
        match token.kind() {
            TokenKind::Operand => output.push(token),
            TokenKind::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, token, operator)
            }
            TokenKind::OpenParenthesis => operators.push_front(token),
            TokenKind::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            TokenKind::Unrecognized => {
                return Err(ConversionError::UnrecognizedSymbol(token.to_string()))
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators<'a>(
    operators: &mut VecDeque<Token<'a>>,
    output: &mut Vec<Token<'a>>,
) -> ConversionResult<()> {
    while let Some(operator) = operators.pop_front() {
        if operator.is_parenthesis() {
            return Err(ConversionError::UnmatchedParenthesis);
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token<'a>(
    operators: &mut VecDeque<Token<'a>>,
    output: &mut Vec<Token<'a>>,
) -> ConversionResult<()> {
    loop {
        match operators.pop_front() {
            None => return Err(ConversionError::UnmatchedParenthesis),
            Some(top_of_operator_stack) => match top_of_operator_stack.kind() {
                // Discard the open parenthesis.
                TokenKind::OpenParenthesis => return Ok(()),
                _ => output.push(top_of_operator_stack),
            },
        }
    }
}

fn parse_operator_token<'a>(
    operators: &mut VecDeque<Token<'a>>,
    output: &mut Vec<Token<'a>>,
    token: Token<'a>,
    operator: &Operator,
) {
    let must_pop = |top_of_operator_stack: &Token| match top_of_operator_stack.kind() {
        TokenKind::Operator(other_operator) => operator.yields_to(other_operator),
        _ => false,
    };
    while operators.front().map_or(false, must_pop) {
        output.extend(operators.pop_front());
    }

    operators.push_front(token);
}
