use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};
use notation_converter::interpreter::{infix_to_postfix, postfix_to_infix, ERROR_OUTPUT};
use notation_converter::ConversionError;
use std::io;
use std::io::{BufRead, Write};

/// Converts expressions between infix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    /// Stop at the first expression that cannot be converted instead of printing ERROR
    #[clap(long, global = true)]
    strict: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Converts an infix expression to postfix notation
    #[clap(alias = "postfix")]
    ToPostfix {
        /// The expression to convert, read line by line from standard input if left out
        expression: Option<String>,
    },
    /// Converts a postfix expression to fully parenthesized infix notation
    #[clap(alias = "infix")]
    ToInfix {
        /// The expression to convert, read line by line from standard input if left out
        expression: Option<String>,
    },
}

type Conversion = fn(&str) -> Result<String, ConversionError>;

impl Command {
    fn conversion(&self) -> Conversion {
        match self {
            Command::ToPostfix { .. } => infix_to_postfix,
            Command::ToInfix { .. } => postfix_to_infix,
        }
    }

    fn expression(&self) -> Option<&str> {
        match self {
            Command::ToPostfix { expression } | Command::ToInfix { expression } => {
                expression.as_deref()
            }
        }
    }
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();
    debug!("{:?}", arguments);

    let conversion = arguments.command.conversion();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let failures = match arguments.command.expression() {
        Some(expression) => {
            convert_and_print(conversion, expression, arguments.strict, &mut output)? as usize
        }
        None => {
            let stdin = io::stdin();
            let mut failures = 0;
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read expression from standard input")?;
                failures += convert_and_print(conversion, &line, arguments.strict, &mut output)?
                    as usize;
            }
            failures
        }
    };

    if failures > 0 {
        bail!("{} expression(s) could not be converted", failures);
    }
    Ok(())
}

/// Converts one expression and prints the result, returning whether the conversion failed.
fn convert_and_print(
    conversion: Conversion,
    expression: &str,
    strict: bool,
    output: &mut impl Write,
) -> Result<bool> {
    match conversion(expression) {
        Ok(converted) => {
            writeln!(output, "{}", converted).context("Failed to write result")?;
            Ok(false)
        }
        Err(conversion_error) if strict => Err(anyhow::Error::new(conversion_error)
            .context(format!("Could not convert '{}'", expression))),
        Err(conversion_error) => {
            error!("Could not convert '{}': {}", expression, conversion_error);
            writeln!(output, "{}", ERROR_OUTPUT).context("Failed to write result")?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn printed(conversion: Conversion, expression: &str, strict: bool) -> Result<(bool, String)> {
        let mut output = Vec::new();
        let failed = convert_and_print(conversion, expression, strict, &mut output)?;
        Ok((failed, String::from_utf8(output)?))
    }

    #[test]
    fn arguments_are_well_formed() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn parses_expression_after_subcommand() {
        let arguments =
            Arguments::try_parse_from(["notation-converter", "to-postfix", "A + B"]).unwrap();
        assert_eq!(
            arguments.command,
            Command::ToPostfix {
                expression: Some("A + B".to_string())
            }
        );
        assert!(!arguments.strict);
    }

    #[test]
    fn short_aliases_select_the_same_conversion() {
        let arguments =
            Arguments::try_parse_from(["notation-converter", "infix", "--strict"]).unwrap();
        assert_eq!(arguments.command, Command::ToInfix { expression: None });
        assert!(arguments.strict);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Arguments::try_parse_from(["notation-converter"]).is_err());
    }

    #[test]
    fn successful_conversion_is_printed() {
        let (failed, text) = printed(infix_to_postfix, "A + B * C", false).unwrap();
        assert!(!failed);
        assert_eq!(text, "A B C * +\n");
    }

    #[test]
    fn failed_conversion_prints_error() {
        let (failed, text) = printed(postfix_to_infix, "A +", false).unwrap();
        assert!(failed);
        assert_eq!(text, "ERROR\n");
    }

    #[test]
    fn strict_mode_returns_the_reason() {
        let error = printed(infix_to_postfix, "A # B", true).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::UnrecognizedSymbol("#".to_string()))
        );
    }
}
