pub mod output;

pub use output::{create_writer, CalculatorReport, OutputFormat, OutputWriter};

use crate::errors::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system(path, e))
}

/// Report destination: a file when given, stdout otherwise.
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| Error::file_system(path, e))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
