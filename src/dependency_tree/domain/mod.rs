pub mod dependency_node;
pub mod report_metadata;
pub mod search_query;
pub mod tree_statistics;

pub use dependency_node::DependencyNode;
pub use report_metadata::ReportMetadata;
pub use search_query::SearchQuery;
pub use tree_statistics::{count_total_nodes, TreeStatistics};
