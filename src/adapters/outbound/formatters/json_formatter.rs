use crate::application::read_models::{NodeView, StatisticsView, TreeReadModel};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    metadata: Metadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    statistics: Statistics,
    dependencies: Vec<Dependency<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    total_dependencies: usize,
    matching_dependencies: usize,
    root_count: usize,
    max_depth: usize,
    resolved_versions: usize,
}

impl From<&StatisticsView> for Statistics {
    fn from(view: &StatisticsView) -> Self {
        Self {
            total_dependencies: view.total_dependencies,
            matching_dependencies: view.matching_dependencies,
            root_count: view.root_count,
            max_depth: view.max_depth,
            resolved_versions: view.resolved_versions,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dependency<'a> {
    name: &'a str,
    version: &'a str,
    original_version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Dependency<'a>>,
}

/// JsonFormatter adapter producing a pretty-printed JSON document
///
/// The document keeps the full nesting of the (filtered) tree; `matched`
/// is only emitted while a search is active.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_dependency(node: &NodeView, searching: bool) -> Dependency<'_> {
        Dependency {
            name: &node.name,
            version: &node.version,
            original_version: &node.original_version,
            target_version: node.target_version.as_deref(),
            matched: searching.then_some(node.matched),
            children: node
                .children
                .iter()
                .map(|child| Self::build_dependency(child, searching))
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, model: &TreeReadModel) -> Result<String> {
        let searching = model.query.is_some();
        let document = Document {
            metadata: Metadata {
                timestamp: &model.metadata.timestamp,
                tool: Tool {
                    name: &model.metadata.tool_name,
                    version: &model.metadata.tool_version,
                },
                source: &model.metadata.source,
            },
            query: model.query.as_deref(),
            statistics: Statistics::from(&model.statistics),
            dependencies: model
                .roots
                .iter()
                .map(|root| Self::build_dependency(root, searching))
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize dependency tree: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
