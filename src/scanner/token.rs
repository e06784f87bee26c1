//! The token model produced by the line scanner.
//!
//! Every source line is decomposed into exactly three tokens:
//! a label, an opcode and an operand. Each may be absent.
//!
//! ```nasm
//! LOOP1:  LDAA  #$10   ; label, opcode, operand, comment
//!         NOP          ; opcode only
//! ; a line holding nothing but a comment
//!         END          ; stops the scan
//! ```
//!
//! Text carried by a token is always an owned copy of the source,
//! so a `Line` never borrows from the buffer it was read from.

use std::fmt;

/// Fixed message stored in the opcode slot when no opcode follows a label.
pub const MISSING_OPCODE: &str = "Missing opcode";

/// Fixed message stored in the opcode slot when a line is too long.
pub const LINE_TOO_LONG: &str = "Line exceeds 80 characters";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    None,
    Comment,
    Label(String),
    Opcode(String),
    Operand(String),
    End,
    Error(String),
}

impl Default for Token {
    fn default() -> Self {
        Token::None
    }
}

impl Token {
    /// The text payload, for the variants that carry one.
    pub fn text(&self) -> Option<&str> {
        use Token::*;
        match self {
            Label(s) | Opcode(s) | Operand(s) | Error(s) => Some(s.as_str()),
            None | Comment | End => Option::None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Token::*;
        match self {
            None    => write!(f, "NULL"),
            Comment => write!(f, "COMMENT"),
            End     => write!(f, "END"),
            Label(s) | Opcode(s) | Operand(s) | Error(s) => write!(f, "{}", s),
        }
    }
}

/// The classified result for a single source line.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Line {
    pub label:   Token,
    pub opcode:  Token,
    pub operand: Token,
}

impl Line {
    pub fn comment() -> Self {
        Line { opcode: Token::Comment, ..Default::default() }
    }

    pub fn opcode_error(msg: &str) -> Self {
        Line { opcode: Token::Error(msg.to_owned()), ..Default::default() }
    }

    pub fn is_comment(&self) -> bool {
        self.opcode == Token::Comment
    }

    pub fn is_end(&self) -> bool {
        self.opcode == Token::End
    }

    /// Classifies the error token of this line, if it has one.
    /// The label is checked first; a line never carries two errors.
    pub fn error(&self) -> Option<ScanError> {
        if let Token::Error(label) = &self.label {
            return Some(ScanError::InvalidLabel(label.clone()));
        }

        match &self.opcode {
            Token::Error(msg) if msg == MISSING_OPCODE => Some(ScanError::MissingOpcode),
            Token::Error(msg) if msg == LINE_TOO_LONG  => Some(ScanError::LineTooLong),
            Token::Error(op) => Some(ScanError::InvalidOpcode(op.clone())),
            _ => None,
        }
    }
}

/// Line-scoped scan errors. None of these stop the scan of a file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScanError {
    LineTooLong,
    InvalidLabel(String),
    MissingOpcode,
    InvalidOpcode(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ScanError::*;
        match self {
            LineTooLong => write!(f, "{}", LINE_TOO_LONG),
            InvalidLabel(label) => write!(f,
                "invalid label `{}`: labels must be 3 to 8 characters long, \
                 start with a letter and contain only letters, digits or underscores", label),
            MissingOpcode => write!(f, "missing opcode"),
            InvalidOpcode(op) => write!(f,
                "invalid opcode `{}`: opcodes must be 1 to 5 characters long, \
                 start with a letter and contain only letters or dots", op),
        }
    }
}

impl std::error::Error for ScanError {}
