use crate::ports::outbound::{ReportReader, ReportSource};
use crate::shared::error::TreeError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading dependency reports
///
/// Implements the ReportReader port for files on disk and for standard
/// input. Both paths enforce the same size limit.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a report file after checking it is a regular, reasonably sized file
    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(TreeError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "Generate a report with `./gradlew dependencies > deps.txt`, or pipe it in with `-`"
                    .to_string(),
            }
            .into());
        }

        validate_regular_file(path, "Dependency report")?;

        fs::read_to_string(path).map_err(|e| {
            TreeError::InputReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads everything from `reader`, refusing input larger than [`MAX_FILE_SIZE`]
    fn read_stream<R: Read>(&self, reader: R, label: &Path) -> Result<String> {
        let mut buffer = Vec::new();
        reader
            .take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| TreeError::InputReadError {
                path: label.to_path_buf(),
                details: e.to_string(),
            })?;

        if buffer.len() as u64 > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large. Maximum allowed size is {} bytes.",
                label.display(),
                MAX_FILE_SIZE
            );
        }

        String::from_utf8(buffer).map_err(|e| {
            TreeError::InputReadError {
                path: label.to_path_buf(),
                details: format!("Input is not valid UTF-8: {}", e),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, source: &ReportSource) -> Result<String> {
        match source {
            ReportSource::File(path) => self.read_file(path),
            ReportSource::Stdin => {
                self.read_stream(io::stdin().lock(), &PathBuf::from(source.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_read_report_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deps.txt");
        fs::write(&path, "+--- a:b:1.0\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_report(&ReportSource::File(path)).unwrap();

        assert_eq!(content, "+--- a:b:1.0\n");
    }

    #[test]
    fn test_read_report_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let reader = FileSystemReader::new();
        let result = reader.read_report(&ReportSource::File(path));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Dependency report not found"));
        assert!(err_string.contains("gradlew dependencies"));
    }

    #[test]
    fn test_read_report_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&ReportSource::File(temp_dir.path().to_path_buf()));

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("is not a regular file"));
    }

    #[test]
    fn test_read_report_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deps.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&ReportSource::File(path));

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to read dependency report"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_report_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "+--- a:b:1.0\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&ReportSource::File(link));

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Security violation"));
    }

    #[test]
    fn test_read_stream() {
        let reader = FileSystemReader::new();
        let content = reader
            .read_stream(Cursor::new("\\--- a:b:1.0\n"), Path::new("<stdin>"))
            .unwrap();
        assert_eq!(content, "\\--- a:b:1.0\n");
    }

    #[test]
    fn test_read_stream_invalid_utf8() {
        let reader = FileSystemReader::new();
        let result = reader.read_stream(Cursor::new(vec![0xc3, 0x28]), Path::new("<stdin>"));

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("not valid UTF-8"));
    }
}
