use crate::dependency_tree::domain::ReportMetadata;
use chrono::Utc;

/// MetadataGenerator service stamping a rendered report with tool and source info
pub struct MetadataGenerator;

impl MetadataGenerator {
    pub fn generate_metadata(tool_name: &str, tool_version: &str, source: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            source.to_string(),
        )
    }

    /// Uses this crate's name and compile-time version
    pub fn generate_default_metadata(source: &str) -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), source)
    }
}
