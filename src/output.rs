//! # Output Formatting
//!
//! Command results go to stdout (JSON or a one-line status); errors go to
//! stderr. Colors are dropped when the stream is not a terminal or `NO_COLOR`
//! is set.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// Print text exactly as received
pub fn print_raw(text: &str) -> Result<()> {
  println!("{text}");
  Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
  println!(
    "{} {}",
    "✓".if_supports_color(Stream::Stdout, |t| t.green()),
    message
  );
}

/// Print a warning message
pub fn print_warning(message: &str) {
  println!(
    "{} {}",
    "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()),
    message
  );
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "✗".if_supports_color(Stream::Stderr, |t| t.red()),
    message
  );
}
