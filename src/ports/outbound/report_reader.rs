use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a dependency report is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    File(PathBuf),
    Stdin,
}

impl ReportSource {
    /// `-` means standard input, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            ReportSource::Stdin
        } else {
            ReportSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::File(path) => write!(f, "{}", path.display()),
            ReportSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// ReportReader port for obtaining the raw text of a dependency report
///
/// The parser never touches the filesystem; this port is the only I/O
/// boundary on the input side.
pub trait ReportReader {
    /// Reads the complete report text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    /// - The content is not valid UTF-8
    fn read_report(&self, source: &ReportSource) -> Result<String>;
}
