//! The Scanner module is in charge of taking a single
//! line of 68HC12 assembly and classifying it into a
//! label, an opcode and an operand.
//!
//! It does not assemble: no symbols are resolved and
//! operands are kept as plain text.

pub mod lexer;
pub mod token;
pub mod validate;

pub use lexer::tokenize_line;
pub use token::{Line, Token};
