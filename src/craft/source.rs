//! Text sources for recipe documents.
//!
//! A document arrives as one string: from a named file when a path is
//! given, otherwise from standard input read to end. No other I/O happens
//! anywhere in the pipeline.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Materialize the document text from a file or standard input.
pub fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
