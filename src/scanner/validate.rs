//! Lexical rules for labels and opcodes.
use once_cell::sync::Lazy;
use regex::Regex;

// A letter followed by 2-7 letters, digits or underscores.
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{2,7}$").unwrap());

// A letter followed by up to 4 letters or dots (pseudo-operations use dots).
static OPCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z.]{0,4}$").unwrap());

/// Checks a label candidate. The trailing `:` must already be stripped.
pub fn is_valid_label(label: &str) -> bool {
    LABEL.is_match(label)
}

/// Checks an opcode candidate.
pub fn is_valid_opcode(opcode: &str) -> bool {
    OPCODE.is_match(opcode)
}
