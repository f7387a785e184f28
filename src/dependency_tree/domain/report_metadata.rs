/// ReportMetadata value object describing where a rendered tree came from
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    source: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, source: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            source,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// Input file path, or `<stdin>`
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "gradle-deptree".to_string(),
            "0.1.0".to_string(),
            "deps.txt".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "gradle-deptree");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.source(), "deps.txt");
    }
}
