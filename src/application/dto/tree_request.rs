use crate::dependency_tree::policies::OrphanPolicy;
use crate::ports::outbound::ReportSource;
use crate::shared::error::TreeError;
use crate::shared::Result;

/// Maximum search query length (security limit)
const MAX_QUERY_LENGTH: usize = 256;

/// TreeRequest - Request DTO for the view-dependency-tree use case
#[derive(Debug, Clone)]
pub struct TreeRequest {
    /// Where to read the dependency report from
    pub source: ReportSource,
    /// Search query; `None` shows the whole tree
    pub query: Option<String>,
    /// Placement of nested lines that have no parent
    pub orphan_policy: OrphanPolicy,
}

impl TreeRequest {
    pub fn builder() -> TreeRequestBuilder {
        TreeRequestBuilder::default()
    }

    /// The query to filter with, if it is non-empty
    pub fn active_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// Builder for [`TreeRequest`]
#[derive(Debug, Default)]
pub struct TreeRequestBuilder {
    source: Option<ReportSource>,
    query: Option<String>,
    orphan_policy: OrphanPolicy,
}

impl TreeRequestBuilder {
    pub fn source(mut self, source: ReportSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    pub fn orphan_policy(mut self, orphan_policy: OrphanPolicy) -> Self {
        self.orphan_policy = orphan_policy;
        self
    }

    /// Validates the collected values and builds the request
    ///
    /// # Errors
    /// Returns `TreeError::Validation` if:
    /// - no source was set
    /// - the query is longer than 256 bytes
    /// - the query contains a line break
    pub fn build(self) -> Result<TreeRequest> {
        let source = self.source.ok_or_else(|| TreeError::Validation {
            message: "a report source is required".to_string(),
        })?;

        if let Some(query) = &self.query {
            if query.len() > MAX_QUERY_LENGTH {
                return Err(TreeError::Validation {
                    message: format!(
                        "search query is too long ({} bytes). Maximum allowed: {} bytes",
                        query.len(),
                        MAX_QUERY_LENGTH
                    ),
                }
                .into());
            }
            if query.contains(['\n', '\r']) {
                return Err(TreeError::Validation {
                    message: "search query must be a single line".to_string(),
                }
                .into());
            }
        }

        Ok(TreeRequest {
            source,
            query: self.query,
            orphan_policy: self.orphan_policy,
        })
    }
}
