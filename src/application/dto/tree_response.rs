use crate::dependency_tree::domain::{DependencyNode, ReportMetadata, TreeStatistics};

/// TreeResponse - Response DTO from the view-dependency-tree use case
///
/// Carries both the full forest and its filtered view, so a caller can go
/// back to the full tree when the query is cleared without re-parsing.
#[derive(Debug, Clone)]
pub struct TreeResponse {
    /// Every root parsed from the report
    pub forest: Vec<DependencyNode>,
    /// Roots surviving the search (equal to `forest` without a query)
    pub filtered: Vec<DependencyNode>,
    /// The query that produced `filtered`, if any
    pub query: Option<String>,
    pub statistics: TreeStatistics,
    pub metadata: ReportMetadata,
}

impl TreeResponse {
    pub fn new(
        forest: Vec<DependencyNode>,
        filtered: Vec<DependencyNode>,
        query: Option<String>,
        statistics: TreeStatistics,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            forest,
            filtered,
            query,
            statistics,
            metadata,
        }
    }

    pub fn is_search(&self) -> bool {
        self.query.is_some()
    }

    /// False only when a search was run and nothing matched
    pub fn has_matches(&self) -> bool {
        !self.is_search() || !self.filtered.is_empty()
    }
}
