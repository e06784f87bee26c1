//! The Reporter takes ownership of each scanned `Line`,
//! formats it, and writes it to the display and the logs sink.
use std::io::{self, Write};
use std::path::Path;

use term_grid::{Cell, Direction, Filling, Grid, GridOptions};

use crate::output::OutputSinks;
use crate::scanner::{Line, Token};

/// Totals for a single scan.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Summary {
    pub lines:  usize,
    pub errors: usize,
    pub ended:  bool,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

pub struct Reporter<W: Write> {
    out:     W,
    sinks:   Option<OutputSinks>,
    summary: Summary,
    table:   Option<Vec<[String; 4]>>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, sinks: Option<OutputSinks>) -> Self {
        Reporter { out, sinks, summary: Summary::default(), table: None }
    }

    /// Collect a row per line and print them as a table on `finish`.
    pub fn with_table(mut self) -> Self {
        self.table = Some(Vec::new());
        self
    }

    /// Writes the analysis banner to the logs sink.
    pub fn begin(&mut self, input: &Path) {
        self.log_sink(&format!("=== Analyzing ===\n\nUsing file {}", input.display()));
    }

    pub fn report(&mut self, number: usize, line: Line) -> io::Result<()> {
        debug!("line {}: {:?}", number, line);
        let msg = format_line(number, &line);

        self.summary.lines += 1;
        if line.error().is_some() {
            self.summary.errors += 1;
        }
        if line.is_end() {
            self.summary.ended = true;
        }

        if let Some(rows) = self.table.as_mut() {
            rows.push([
                number.to_string(),
                line.label.to_string(),
                line.opcode.to_string(),
                line.operand.to_string(),
            ]);
        }

        writeln!(self.out, "{}", msg)?;
        self.log_sink(&msg);
        Ok(())
    }

    /// Prints the table if requested, flushes every output and
    /// returns the totals. Sinks are closed when the reporter drops.
    pub fn finish(mut self) -> io::Result<Summary> {
        if let Some(rows) = self.table.take() {
            let mut grid = Grid::new(GridOptions {
                filling:   Filling::Spaces(2),
                direction: Direction::LeftToRight,
            });

            for header in &["LINE", "LABEL", "OPCODE", "OPERAND"] {
                grid.add(Cell::from(header.to_string()));
            }
            for row in rows {
                for cell in row.iter() {
                    grid.add(Cell::from(cell.clone()));
                }
            }

            write!(self.out, "{}", grid.fit_into_columns(4))?;
        }

        self.out.flush()?;
        if let Some(sinks) = self.sinks.as_mut() {
            if let Err(err) = sinks.flush() {
                error!("unable to flush output files in `{}`: {}", sinks.dir().display(), err);
            }
        }

        Ok(self.summary)
    }

    // Failure to write a sink is reported once, then the sinks are dropped.
    fn log_sink(&mut self, msg: &str) {
        let failed = match self.sinks.as_mut() {
            Some(sinks) => match writeln!(sinks.logs(), "{}", msg) {
                Ok(()) => false,
                Err(err) => {
                    error!("unable to write logs file in `{}`: {}", sinks.dir().display(), err);
                    true
                },
            },
            None => false,
        };
        if failed {
            self.sinks = None;
        }
    }
}

/// Formats a scanned line for display.
pub fn format_line(number: usize, line: &Line) -> String {
    if line.is_comment() {
        return format!("Line {}: comment", number);
    }

    if let Some(err) = line.error() {
        return format!("Line {}: error: {}", number, err);
    }

    format!("Line {}: label: {}  opcode: {}  operand: {}",
        number, display(&line.label), display(&line.opcode), display(&line.operand))
}

fn display(token: &Token) -> String {
    match token {
        Token::End => "END".to_owned(),
        other => other.text().unwrap_or("NULL").to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tokenize_line;
    use std::fs;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(1, &tokenize_line("; hi")), "Line 1: comment");
        assert_eq!(format_line(2, &tokenize_line("   ")), "Line 2: label: NULL  opcode: NULL  operand: NULL");
        assert_eq!(format_line(3, &tokenize_line("LOOP1: LDAA #$10  ; load")),
            "Line 3: label: LOOP1  opcode: LDAA  operand: #$10");
        assert_eq!(format_line(4, &tokenize_line("NOP")),
            "Line 4: label: NULL  opcode: NOP  operand: NULL");
        assert_eq!(format_line(5, &tokenize_line("FIN: END")),
            "Line 5: label: FIN  opcode: END  operand: NULL");
    }

    #[test]
    fn test_format_errors() {
        assert!(format_line(1, &tokenize_line("AB: NOP")).starts_with("Line 1: error: invalid label `AB`"));
        assert_eq!(format_line(2, &tokenize_line("LOOP1:")), "Line 2: error: missing opcode");
        assert!(format_line(3, &tokenize_line("LD2 #1")).starts_with("Line 3: error: invalid opcode `LD2`"));
        assert_eq!(format_line(4, &tokenize_line(&"x".repeat(81))), "Line 4: error: Line exceeds 80 characters");
    }

    #[test]
    fn test_reporter_summary() {
        let mut out = Vec::new();
        let mut reporter = Reporter::new(&mut out, None);
        reporter.report(1, tokenize_line("NOP")).unwrap();
        reporter.report(2, tokenize_line("AB: NOP")).unwrap();
        reporter.report(3, tokenize_line("LD2")).unwrap();
        reporter.report(4, tokenize_line("END")).unwrap();
        let summary = reporter.finish().unwrap();

        assert_eq!(summary, Summary { lines: 4, errors: 2, ended: true });
        assert!(!summary.is_clean());

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().last(), Some("Line 4: label: NULL  opcode: END  operand: NULL"));
    }

    #[test]
    fn test_reporter_table() {
        let mut out = Vec::new();
        let mut reporter = Reporter::new(&mut out, None).with_table();
        reporter.report(1, tokenize_line("LOOP1: LDAA #$10")).unwrap();
        reporter.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        let table: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(table.len(), 2);
        assert!(table[0].starts_with("LINE"));
        assert!(table[1].contains("LOOP1"));
        assert!(table[1].contains("#$10"));
    }

    #[test]
    fn test_reporter_writes_logs_sink() {
        let root = tempfile::tempdir().unwrap();
        let sinks = OutputSinks::create(root.path(), Path::new("prog.asm")).unwrap();

        let mut reporter = Reporter::new(io::sink(), Some(sinks));
        reporter.begin(Path::new("prog.asm"));
        reporter.report(1, tokenize_line("NOP")).unwrap();
        reporter.finish().unwrap();

        let logs = fs::read_to_string(root.path().join("prog").join("logs.txt")).unwrap();
        assert_eq!(logs,
            "=== Analyzing ===\n\nUsing file prog.asm\nLine 1: label: NULL  opcode: NOP  operand: NULL\n");
    }
}
