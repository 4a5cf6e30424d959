//! CLI entry point for the `srec-to-cc65` converter.

use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use converter::{
    disposition, parse_address, write_lines, Disposition, Emitter, EmitterConfig,
    InitialOrgStyle,
};
use srec_core::{decode_reader, ReadError, Record};
use thiserror as _;

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use tempfile as _;

const USAGE_TEXT: &str = "\
Usage: srec-to-cc65 [options] [input]

Reads Motorola S-records from <input> (default: stdin) and writes ca65
source that places every data byte at its original load address.

Options:
  -start <addr>        Start address of the program (default: 0)
  -o, --output <file>  Output file path (default: stdout)
  --pad-initial-org    Zero-pad the start address .org to four digits
  -v, --verbose        Print decoded records to stderr
  -h, --help           Show this help message

Addresses may be decimal, 0x/$ hex, 0o octal, or 0b binary.

Examples:
  srec-to-cc65 -start 0x8000 < rom.s19 > rom.s
  srec-to-cc65 rom.s19 -o rom.s --verbose
";

#[derive(Debug, PartialEq, Eq)]
struct Options {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: EmitterConfig,
    verbose: bool,
}

#[derive(Debug)]
enum ParseResult {
    Run(Options),
    Help,
}

#[allow(clippy::while_let_on_iterator)]
fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut config = EmitterConfig::default();
    let mut verbose = false;

    while let Some(arg) = args.next() {
        let arg_str = arg.to_string_lossy().to_string();

        match arg_str.as_str() {
            "-h" | "-help" | "--help" => return Ok(ParseResult::Help),
            "-v" | "--verbose" => verbose = true,
            "-pad-initial-org" | "--pad-initial-org" => {
                config.initial_org = InitialOrgStyle::Padded;
            }
            "-o" | "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for -o".to_string())?;
                output = Some(PathBuf::from(value));
            }
            "-start" | "--start" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for -start".to_string())?;
                config.start_address = parse_start(&value.to_string_lossy())?;
            }
            "-" => input = Some(PathBuf::from("-")),
            other => {
                if let Some(value) = other
                    .strip_prefix("-start=")
                    .or_else(|| other.strip_prefix("--start="))
                {
                    config.start_address = parse_start(value)?;
                    continue;
                }

                if other.starts_with('-') {
                    return Err(format!("unknown option: {other}"));
                }

                if input.is_some() {
                    return Err("multiple input paths provided".to_string());
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    // `-` is an explicit request for stdin.
    let input = input.filter(|path| path.as_os_str() != "-");

    Ok(ParseResult::Run(Options {
        input,
        output,
        config,
        verbose,
    }))
}

fn parse_start(value: &str) -> Result<u32, String> {
    parse_address(value).map_err(|e| format!("invalid value for -start: {e}"))
}

fn read_records(options: &Options) -> Result<Vec<Record>, i32> {
    let result = match &options.input {
        Some(path) => match File::open(path) {
            Ok(file) => decode_reader(BufReader::new(file)),
            Err(e) => {
                eprintln!("error: failed to open {}: {e}", path.display());
                return Err(1);
            }
        },
        None => decode_reader(io::stdin().lock()),
    };

    result.map_err(|e| {
        report_read_error(&e);
        1
    })
}

fn report_read_error(e: &ReadError) {
    eprintln!("error: parsing srec: {e}");
}

fn print_listing(records: &[Record]) {
    for record in records {
        let note = match disposition(record.kind) {
            Disposition::Retain => "",
            Disposition::Skip => " (skipped)",
        };
        eprintln!(
            "{} {:04X}: {} bytes{note}",
            record.kind,
            record.address,
            record.data.len()
        );
    }
}

fn open_output(options: &Options) -> io::Result<Box<dyn Write>> {
    match &options.output {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn run(options: &Options) -> Result<(), i32> {
    let records = read_records(options)?;

    if options.verbose {
        print_listing(&records);
    }

    let mut emitter = Emitter::new(&options.config);
    for record in &records {
        emitter.push(record);
    }
    let lines = emitter.finish();

    let written = open_output(options).and_then(|mut out| {
        write_lines(&mut out, &lines)?;
        out.flush()
    });

    if let Err(e) = written {
        eprintln!("error: failed to write output: {e}");
        return Err(1);
    }

    Ok(())
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Run(options)) => match run(&options) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            2
        }
    };

    std::process::exit(exit_code);
}
