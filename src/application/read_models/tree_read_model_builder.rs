//! Builder for constructing TreeReadModel from a use-case response

use super::tree_read_model::{NodeView, ReportMetadataView, StatisticsView, TreeReadModel};
use crate::application::dto::TreeResponse;
use crate::dependency_tree::domain::{DependencyNode, ReportMetadata, SearchQuery, TreeStatistics};
use crate::dependency_tree::services::SearchFilter;

/// Builder for constructing TreeReadModel from domain objects
pub struct TreeReadModelBuilder;

impl TreeReadModelBuilder {
    /// Builds the read model for the filtered view of `response`
    pub fn build(response: &TreeResponse) -> TreeReadModel {
        let query = response.query.as_deref().map(SearchQuery::new);

        TreeReadModel {
            metadata: Self::build_metadata(&response.metadata),
            query: response.query.clone(),
            statistics: Self::build_statistics(&response.statistics),
            roots: response
                .filtered
                .iter()
                .map(|root| Self::build_node(root, 0, query.as_ref()))
                .collect(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            source: metadata.source().to_string(),
        }
    }

    fn build_statistics(statistics: &TreeStatistics) -> StatisticsView {
        StatisticsView {
            total_dependencies: statistics.total_dependencies(),
            matching_dependencies: statistics.matching_dependencies(),
            root_count: statistics.root_count(),
            max_depth: statistics.max_depth(),
            resolved_versions: statistics.resolved_versions(),
        }
    }

    fn build_node(node: &DependencyNode, depth: usize, query: Option<&SearchQuery>) -> NodeView {
        let children: Vec<NodeView> = node
            .children()
            .iter()
            .map(|child| Self::build_node(child, depth + 1, query))
            .collect();

        let descendant_count = children
            .iter()
            .map(|child| child.descendant_count + 1)
            .sum();

        NodeView {
            name: node.name().to_string(),
            version: node.version(),
            original_version: node.original_version().to_string(),
            target_version: node.target_version().map(str::to_string),
            depth,
            matched: query.is_some_and(|q| SearchFilter::matches_self(node, q)),
            descendant_count,
            children,
        }
    }
}
