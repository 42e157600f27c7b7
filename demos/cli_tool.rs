//! CLI Tool Example
//!
//! This example demonstrates how to build a command-line tool
//! using uxtidfmt for turning tabular refund exports into the
//! ready-to-paste SQL approval message.

use std::fs::{self, File};
use std::io::{self, Write};
use std::process;
use uxtidfmt::{default_output_filename, FormatterBuilder, UxtidFmtError};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input-file> [output-file] [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --keyword <word>   Heading keyword to locate (default: UXTID)");
        eprintln!("  --copy             Also copy the result to the system clipboard");
        eprintln!("  --stdout           Write output to stdout instead of a file");
        eprintln!("\nAccepted input formats: TXT, CSV, Excel (.xlsx, .xls)");
        eprintln!("\nExamples:");
        eprintln!("  {} refund_export.txt", args[0]);
        eprintln!("  {} refund_export.xlsx query.txt", args[0]);
        eprintln!("  {} refund_export.csv --keyword UTXID --copy", args[0]);
        eprintln!("  {} refund_export.txt - --stdout", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;
    let mut keyword = "UXTID".to_string();
    let mut copy_to_clipboard = false;
    let mut use_stdout = false;

    // Parse options
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--keyword" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --keyword requires a value");
                    process::exit(1);
                }
                keyword = args[i + 1].clone();
                i += 2;
            }
            "--copy" => {
                copy_to_clipboard = true;
                i += 1;
            }
            "--stdout" => {
                use_stdout = true;
                i += 1;
            }
            "-" => {
                use_stdout = true;
                i += 1;
            }
            other if other.starts_with("--") => {
                eprintln!("Error: Unknown option: {}", other);
                process::exit(1);
            }
            other => {
                if output_path.is_some() {
                    eprintln!("Error: Unexpected argument: {}", other);
                    process::exit(1);
                }
                output_path = Some(other.to_string());
                i += 1;
            }
        }
    }

    // Run the pipeline
    let query = match run(input_path, &keyword) {
        Ok(query) => query,
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    };

    // Clipboard copy is best-effort: a failure never discards the result
    if copy_to_clipboard {
        match copy_result(&query) {
            Ok(()) => println!("Result copied to clipboard."),
            Err(e) => eprintln!(
                "Warning: Failed to copy to clipboard ({}). The output is still written below.",
                e
            ),
        }
    }

    if use_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = handle
            .write_all(query.as_bytes())
            .and_then(|_| handle.flush())
        {
            eprintln!("Error: Failed to write output: {}", e);
            process::exit(1);
        }
    } else {
        let output_path = output_path.unwrap_or_else(default_output_filename);
        match File::create(&output_path).and_then(|mut f| f.write_all(query.as_bytes())) {
            Ok(()) => {
                let size = describe_file_size(input_path);
                println!("Processed {}{} -> {}", input_path, size, output_path);
            }
            Err(e) => {
                eprintln!("Error: Failed to write '{}': {}", output_path, e);
                process::exit(1);
            }
        }
    }
}

fn run(input_path: &str, keyword: &str) -> Result<String, UxtidFmtError> {
    let formatter = FormatterBuilder::new()
        .with_heading_keyword(keyword)
        .build()?;

    formatter.format_path(input_path)
}

fn copy_result(query: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(query.to_string())
}

/// Render the input file size as a human-readable suffix, if available.
fn describe_file_size(path: &str) -> String {
    match fs::metadata(path) {
        Ok(meta) => format!(" ({})", format_file_size(meta.len())),
        Err(_) => String::new(),
    }
}

/// Format a byte count as Bytes/KB/MB/GB with two decimals.
fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    // Round to two decimals, dropping trailing zeros (1.50 -> 1.5, 2.00 -> 2)
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

fn handle_error(error: UxtidFmtError) {
    match error {
        UxtidFmtError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        UxtidFmtError::UnsupportedFormat(ext) => {
            eprintln!("Unsupported Format: {}", ext);
            eprintln!("Please provide a valid file (TXT, CSV, or Excel format).");
        }
        UxtidFmtError::Spreadsheet(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid Excel file or may be corrupted.");
        }
        UxtidFmtError::Delimited(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid CSV file or may be corrupted.");
        }
        UxtidFmtError::HeadingNotFound(keyword) => {
            eprintln!("No {} values found.", keyword);
            eprintln!(
                "Please ensure the file contains a \"{}\" heading followed by values.",
                keyword
            );
        }
        UxtidFmtError::NoValuesFound(keyword) => {
            eprintln!("No {} values found.", keyword);
            eprintln!(
                "The \"{}\" heading was found, but no line below it contained a value of the expected shape.",
                keyword
            );
        }
        UxtidFmtError::SizeExceeded { size, max } => {
            eprintln!(
                "File too large: {} exceeds the {} limit.",
                format_file_size(size),
                format_file_size(max)
            );
            eprintln!("Please choose a smaller file.");
        }
        UxtidFmtError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check the keyword or template options.");
        }
    }
}
