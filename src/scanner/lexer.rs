//! This lexer tokenizes 68HC12 assembly, one line at a time.
use super::token::{Line, Token, LINE_TOO_LONG, MISSING_OPCODE};
use super::validate::{is_valid_label, is_valid_opcode};

pub const COMMENT_MARKER: char = ';';
pub const LABEL_TERMINATOR: char = ':';
pub const END_DIRECTIVE: &str = "END";
pub const MAX_LINE_LENGTH: usize = 80;

/// Only a single instruction is supported per line.
/// The expected sequence of words is [LABEL:] OPCODE [OPERAND] [; comment].
/// Words past the operand are ignored.
pub fn tokenize_line(line: &str) -> Line {
    let line = strip_newline(line);

    if line.chars().count() > MAX_LINE_LENGTH {
        return Line::opcode_error(LINE_TOO_LONG);
    }

    let mut cursor = skip_whitespace(line, 0);
    match line[cursor..].chars().next() {
        None => return Line::default(),
        Some(COMMENT_MARKER) => return Line::comment(),
        Some(_) => {},
    }

    let mut out = Line::default();

    let first = match next_word(line, &mut cursor) {
        Some(word) => word,
        None => return out,
    };

    let opcode = if first.ends_with(LABEL_TERMINATOR) {
        let label = first[..first.len() - LABEL_TERMINATOR.len_utf8()].to_owned();
        if !is_valid_label(&label) {
            out.label = Token::Error(label);
            return out;
        }
        out.label = Token::Label(label);

        match next_word(line, &mut cursor) {
            Some(word) => word,
            None => {
                out.opcode = Token::Error(MISSING_OPCODE.to_owned());
                return out;
            },
        }
    } else {
        first
    };

    if opcode == END_DIRECTIVE {
        out.opcode = Token::End;
        return out;
    }
    if !is_valid_opcode(&opcode) {
        out.opcode = Token::Error(opcode);
        return out;
    }
    out.opcode = Token::Opcode(opcode);

    if let Some(operand) = next_word(line, &mut cursor) {
        out.operand = Token::Operand(operand);
    }

    out
}

/// Extracts the next word starting at `cursor`, moving the cursor past it.
/// Returns `None`, leaving the cursor on the delimiter, at end of line
/// or at the start of a comment.
pub fn next_word(line: &str, cursor: &mut usize) -> Option<String> {
    let start = skip_whitespace(line, *cursor);
    *cursor = start;

    match line[start..].chars().next() {
        None | Some(COMMENT_MARKER) => return None,
        Some(_) => {},
    }

    let end = line[start..]
        .find(|c: char| c.is_whitespace() || c == COMMENT_MARKER)
        .map_or(line.len(), |offset| start + offset);

    *cursor = end;
    Some(line[start..end].to_owned())
}

fn skip_whitespace(line: &str, cursor: usize) -> usize {
    line[cursor..]
        .find(|c: char| !c.is_whitespace())
        .map_or(line.len(), |offset| cursor + offset)
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
