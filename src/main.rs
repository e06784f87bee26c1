extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;

pub mod config;
pub mod driver;
pub mod output;
pub mod report;
pub mod scanner;

use config::Config;

fn main() {
    let config = Config::from_args();
    initialize_logging(config.level_filter());

    debug!("Arguments:\n\tVerbosity: {}\n\tPrint Table: {}\n\tStrict: {}\n\tOutput Root: {}\n\tInfile: {}",
        config.level_filter(),
        config.print_table,
        config.strict,
        config.output_root.display(),
        config.input.as_ref().map_or("None".to_owned(), |p| p.display().to_string())
    );

    let input = match config.input.as_ref() {
        Some(path) => path,
        None => {
            println!("{}", config::usage());
            return;
        },
    };

    let stdout = std::io::stdout();
    // Failures have already been reported by the driver.
    let outcome = driver::analyze_file(input, &config, stdout.lock());

    let status = config.exit_status(&outcome);
    if status != 0 {
        std::process::exit(status);
    }
}

fn initialize_logging(level: log::LevelFilter) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply().ok();
}
