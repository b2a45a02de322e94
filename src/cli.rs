// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::options::RunOptions;
use crate::core::net::HttpFetcher;
use crate::enrich;
use crate::progress::Progress;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut opts = RunOptions::new();
    parse_cli(&mut opts)?;

    let fetcher = HttpFetcher::new();
    let mut progress = ConsoleProgress::default();
    let count = enrich::run(&opts, &fetcher, Some(&mut progress))?;
    println!("Enhanced {count} books.");
    Ok(())
}

// Positionals in order: first_row, doi_col, issn_col, filename.
// All optional; defaults match the usual Springer COUNTER export.
fn parse_cli(opts: &mut RunOptions) -> Result<(), Box<dyn Error>> {
    let mut positional = 0usize;
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--rerun" => opts.rerun = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {flag}").into()),
            value => {
                match positional {
                    0 => opts.first_row = parse_row(value)?,
                    1 => opts.doi_col = parse_column(value)?,
                    2 => opts.issn_col = parse_column(value)?,
                    3 => opts.filename = s!(value),
                    _ => return Err(format!("Unexpected arg: {value}").into()),
                }
                positional += 1;
            }
        }
    }
    Ok(())
}

fn parse_row(s: &str) -> Result<u32, Box<dyn Error>> {
    match s.parse::<u32>() {
        Ok(v) if v >= 1 => Ok(v),
        _ => Err(format!("Bad first row: {s}").into()),
    }
}

fn parse_column(s: &str) -> Result<char, Box<dyn Error>> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(format!("Bad column letter: {s}").into()),
    }
}

/// Coarse progress on stderr; per-row detail goes to the log file.
#[derive(Default)]
struct ConsoleProgress {
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Scanning {total} rows…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _row: u32) {
        self.done += 1;
        if self.done % 100 == 0 {
            eprintln!("{} books so far…", self.done);
        }
    }
    fn finish(&mut self) {
        eprintln!("Done. {} books enriched.", self.done);
    }
}
