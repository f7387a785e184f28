//! Tree read model for rendering
//!
//! A denormalized, display-ready copy of a [`TreeResponse`](crate::application::dto::TreeResponse):
//! versions are pre-formatted, depths and match flags precomputed.

/// Main read model handed to formatters
#[derive(Debug, Clone)]
pub struct TreeReadModel {
    pub metadata: ReportMetadataView,
    /// Active search query, if any
    pub query: Option<String>,
    pub statistics: StatisticsView,
    /// Roots to render (already filtered when a query is active)
    pub roots: Vec<NodeView>,
}

/// View representation of report metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub source: String,
}

/// View representation of tree statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsView {
    pub total_dependencies: usize,
    pub matching_dependencies: usize,
    pub root_count: usize,
    pub max_depth: usize,
    pub resolved_versions: usize,
}

/// View representation of one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub name: String,
    /// `original` or `original -> target`
    pub version: String,
    pub original_version: String,
    pub target_version: Option<String>,
    /// 0 for roots
    pub depth: usize,
    /// True when the node itself matches the active query
    pub matched: bool,
    /// Number of nodes below this one
    pub descendant_count: usize,
    pub children: Vec<NodeView>,
}

impl NodeView {
    /// `name:version`, as printed in Gradle reports
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

impl TreeReadModel {
    /// True when a query is active and no root survived it
    pub fn is_empty_search(&self) -> bool {
        self.query.is_some() && self.roots.is_empty()
    }
}
