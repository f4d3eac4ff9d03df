extern crate log;
extern crate simplelog;

use std::{io::stdout, path::Path, process::exit};

use lint6502::diagnostics::{ConsoleWriter, JsonWriter, Writer};
use lint6502::*;

fn main() {
    let config = match configure_cli().get_matches_safe() {
        Ok(config) => config,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e.message);
            exit(ERR_FATAL)
        }
        Err(e) => e.exit(),
    };

    if let Some(level) = get_log_level(&config) {
        if let Err(e) = configure_logging(level) {
            eprintln!("Failed to configure logger: {}", e);
        }
    }

    let input = match config.value_of("input") {
        Some(input) => input,
        None => {
            eprintln!("Expected a main source file to lint");
            exit(ERR_FATAL)
        }
    };

    let lint_config = match build_config(&config) {
        Ok(c) => c,
        Err(e) => {
            print_err(&e);
            exit(ERR_FATAL)
        }
    };

    let report = match run(Path::new(input), &lint_config, &FsReader) {
        Ok(report) => report,
        Err(e) => {
            print_err(&e);
            exit(ERR_FATAL)
        }
    };

    let written = match get_format(&config) {
        OutputFormat::Console => ConsoleWriter::new(stdout()).write_report(&report),
        OutputFormat::Json => JsonWriter::new(stdout()).write_report(&report),
    };
    if let Err(e) = written {
        eprintln!("Failed to write report: {}", e);
        exit(ERR_FATAL)
    }

    if report.has_violations() {
        exit(ERR_LINT)
    }
}
