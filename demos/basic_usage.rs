//! Basic Usage Example
//!
//! This example demonstrates the most basic usage of uxtidfmt:
//! turning a refund export into the formatted SQL approval message
//! using default settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_usage -- refund_export.txt
//! ```
//!
//! If no argument is provided, it will try to use `refund_export.txt`
//! in the current directory as input. The result is printed to stdout.

use uxtidfmt::FormatterBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "refund_export.txt".to_string());

    // Create a formatter with default settings
    let formatter = FormatterBuilder::new().build()?;

    // Process the export; the input format is inferred from the extension
    let query = formatter.format_path(&input_path).map_err(|e| {
        eprintln!("Error: Could not process input file '{}'", input_path);
        eprintln!("  {}", e);
        eprintln!("\nHint: The file must contain a UXTID heading followed by identifier values.");
        e
    })?;

    println!("{}", query);

    Ok(())
}
