use crate::interpreter::error::{ConversionError, ConversionResult};
use crate::interpreter::operator;
use crate::interpreter::token::Token;
use itertools::{Itertools, Position};

/// Rebuilds a fully parenthesized infix expression from postfix tokens.
///
/// Every operation is wrapped in parentheses except the outermost one. Anything that is
/// not a known operator is taken to be an operand.
pub(crate) fn postfix_to_infix(tokens: &[Token<'_>]) -> ConversionResult<String> {
    match tokens {
        [] => return Ok(String::new()),
        [only] => return Ok(only.to_string()),
        _ => {}
    }

    let mut values: Vec<String> = Vec::with_capacity(tokens.len());
    for position in tokens.iter().with_position() {
        let is_last_token = matches!(position, Position::Last(_) | Position::Only(_));
        let token = position.into_inner();

        if !token.is_operator() {
            values.push(token.to_string());
            continue;
        }

        let operation = combine_operands(&mut values, token)?;
        values.push(operation);

        if is_last_token && values.len() == 1 {
            return values
                .pop()
                .as_deref()
                .and_then(strip_outer_parentheses)
                .map(str::to_string)
                .ok_or(ConversionError::MalformedPostfix);
        }
    }

    // Either operands were left over or the last token was not an operator.
    Err(ConversionError::MalformedPostfix)
}

/// Pops the two most recent values and joins them with the operator, in parentheses.
fn combine_operands(values: &mut Vec<String>, token: &Token<'_>) -> ConversionResult<String> {
    if values.len() < 2 {
        return Err(ConversionError::MissingOperand);
    }
    let (right_operand, left_operand) = match (values.pop(), values.pop()) {
        (Some(right), Some(left)) => (right, left),
        _ => return Err(ConversionError::MissingOperand),
    };

    let operator = operator::lookup(token.as_str())
        .ok_or_else(|| ConversionError::InvalidOperator(token.to_string()))?;

    Ok(format!("({} {} {})", left_operand, operator, right_operand))
}

fn strip_outer_parentheses(expression: &str) -> Option<&str> {
    expression.strip_prefix('(')?.strip_suffix(')')
}
