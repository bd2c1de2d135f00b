use thiserror::Error;

/// Why an expression could not be converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("could not pair all brackets in the input")]
    UnmatchedParenthesis,

    #[error("unsupported symbol '{0}' in the input")]
    UnrecognizedSymbol(String),

    #[error("not enough operands present to evaluate the postfix expression")]
    MissingOperand,

    #[error("postfix expression does not reduce to a single expression")]
    MalformedPostfix,

    #[error("invalid operator '{0}'")]
    InvalidOperator(String),
}

pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_symbol_names_the_symbol() {
        let error = ConversionError::UnrecognizedSymbol("#".into());
        assert_eq!(error.to_string(), "unsupported symbol '#' in the input");
    }

    #[test]
    fn converts_into_anyhow_error() {
        let error: anyhow::Error = ConversionError::MissingOperand.into();
        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::MissingOperand)
        );
    }
}
