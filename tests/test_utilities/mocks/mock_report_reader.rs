use gradle_deptree::prelude::*;

/// Mock ReportReader for testing
///
/// Returns fixed content for every source, or fails when configured to.
pub struct MockReportReader {
    content: String,
    should_fail: bool,
}

impl MockReportReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, source: &ReportSource) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock report read failure for {}", source);
        }
        Ok(self.content.clone())
    }
}
