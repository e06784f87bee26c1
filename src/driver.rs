//! The driver opens a source file, feeds it to the scanner line by line,
//! and hands every result to the `Reporter`.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::config::Config;
use crate::output::OutputSinks;
use crate::report::{Reporter, Summary};
use crate::scanner::tokenize_line;

/// Scans `input`, writing one message per line to `out`.
///
/// Failing to open the input is fatal and returned as an error.
/// Failing to create the auxiliary files is reported and the scan
/// goes on without them.
pub fn analyze_file<W: Write>(input: &Path, config: &Config, out: W) -> io::Result<Summary> {
    let file = match File::open(input) {
        Err(err) => {
            error!("unable to open input file `{}`: {}", input.display(), err);
            return Err(err);
        },
        Ok(file) => file,
    };

    let sinks = match OutputSinks::create(&config.output_root, input) {
        Err(err) => {
            error!("unable to create auxiliary files under `{}`: {}", config.output_root.display(), err);
            None
        },
        Ok(sinks) => Some(sinks),
    };

    let mut reporter = Reporter::new(out, sinks);
    if config.print_table {
        reporter = reporter.with_table();
    }
    reporter.begin(input);

    if let Err(err) = scan(BufReader::new(file), &mut reporter) {
        error!("error while scanning `{}`: {}", input.display(), err);
        return Err(err);
    }

    let summary = reporter.finish()?;
    info!("scanned {} line(s) of `{}`, {} with errors", summary.lines, input.display(), summary.errors);
    if !summary.ended {
        warn!("`{}` has no END directive", input.display());
    }
    Ok(summary)
}

/// Tokenizes lines from `reader` until an END directive or end of input.
/// Bytes that are not valid UTF-8 are replaced, never rejected.
pub fn scan<R: BufRead, W: Write>(mut reader: R, reporter: &mut Reporter<W>) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let line = tokenize_line(&String::from_utf8_lossy(&buf));
        let end = line.is_end();
        reporter.report(number, line)?;

        if end {
            debug!("END directive on line {}, stopping", number);
            break;
        }
    }

    Ok(())
}
