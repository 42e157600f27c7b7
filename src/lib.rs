//! uxtidfmt - Tabular UXTID extractor and SQL refund-query formatter
//!
//! This crate locates a labeled column of transaction identifiers (UXTID values)
//! in a loosely formatted tabular export (plain text, CSV, or Excel), extracts
//! the identifier tokens, and renders them as a quoted literal list inside a
//! fixed refund-approval SQL message, ready to paste elsewhere.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use uxtidfmt::FormatterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a formatter with default settings
//!     let formatter = FormatterBuilder::new().build()?;
//!
//!     // Process an export file; the input format is inferred from the extension
//!     let query = formatter.format_path("refund_export.xlsx")?;
//!
//!     println!("{}", query);
//!     Ok(())
//! }
//! ```
//!
//! For in-memory processing, use `Cursor` and name the format explicitly:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use uxtidfmt::{FormatterBuilder, InputFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let formatter = FormatterBuilder::new().build()?;
//! let content = "UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n";
//! let query = formatter.format_to_string(
//!     Cursor::new(content.as_bytes()),
//!     InputFormat::PlainText,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use uxtidfmt::FormatterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Some exports spell the heading keyword as "UTXID"
//!     let formatter = FormatterBuilder::new()
//!         .with_heading_keyword("UTXID")
//!         .with_template("SELECT * FROM txns WHERE id IN (\n{values}\n);")
//!         .build()?;
//!
//!     let query = formatter.format_path("refund_export.csv")?;
//!     println!("{}", query);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Writing to a File
//!
//! ```rust,no_run
//! use std::fs::File;
//! use uxtidfmt::{default_output_filename, FormatterBuilder, InputFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let formatter = FormatterBuilder::new().build()?;
//!
//!     let input = File::open("refund_export.txt")?;
//!     let output = File::create(default_output_filename())?;
//!
//!     formatter.format(input, InputFormat::PlainText, output)?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod extract;
mod normalize;
mod render;
mod security;
mod types;

// 公開API
pub use api::InputFormat;
pub use builder::{Formatter, FormatterBuilder};
pub use error::UxtidFmtError;
pub use render::default_output_filename;
