//! Converts arithmetic and logical expressions between infix and postfix notation.

pub mod interpreter;

pub use interpreter::error::ConversionError;
pub use interpreter::{
    convert_infix_to_postfix, convert_postfix_to_infix, infix_to_postfix, postfix_to_infix,
};
