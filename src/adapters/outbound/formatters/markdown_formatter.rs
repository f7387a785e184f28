use crate::application::read_models::{NodeView, TreeReadModel};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// Markdown table header for the statistics section
const TABLE_HEADER: &str = "| Statistic | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|-------|\n";

/// MarkdownFormatter adapter rendering the tree as a nested bullet list
///
/// Dependencies matching the active query are emphasised in bold.
pub struct MarkdownFormatter {
    max_depth: Option<usize>,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Wraps text in a code span, widening the fence if the text has backticks
    fn code_span(text: &str) -> String {
        if text.contains('`') {
            format!("`` {} ``", text)
        } else {
            format!("`{}`", text)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String) {
        output.push_str("# Dependency Tree\n\n");
    }

    fn render_statistics(&self, output: &mut String, model: &TreeReadModel) {
        let stats = &model.statistics;
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        output.push_str(&format!(
            "| Source | {} |\n",
            Self::escape_markdown_table_cell(&model.metadata.source)
        ));
        if let Some(query) = &model.query {
            output.push_str(&format!(
                "| Search | {} |\n",
                Self::escape_markdown_table_cell(query)
            ));
        }
        output.push_str(&format!(
            "| Total dependencies | {} |\n",
            stats.total_dependencies
        ));
        output.push_str(&format!(
            "| Matching dependencies | {} |\n",
            stats.matching_dependencies
        ));
        output.push_str(&format!("| Root dependencies | {} |\n", stats.root_count));
        output.push_str(&format!("| Maximum depth | {} |\n", stats.max_depth));
        output.push_str(&format!(
            "| Resolved versions | {} |\n",
            stats.resolved_versions
        ));
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, model: &TreeReadModel) {
        output.push_str("## Dependencies\n\n");

        if model.is_empty_search() {
            output.push_str("*No matching dependencies found*\n");
            return;
        }
        if model.roots.is_empty() {
            output.push_str("*No dependencies found*\n");
            return;
        }

        for root in &model.roots {
            self.render_node(output, root);
        }
    }

    fn render_node(&self, output: &mut String, node: &NodeView) {
        let name = Self::code_span(&node.name);
        let label = if node.matched {
            format!("**{}**", name)
        } else {
            name
        };

        output.push_str(&"  ".repeat(node.depth));
        output.push_str(&format!("- {} {}", label, node.version));

        let collapsed = self.max_depth.is_some_and(|levels| node.depth + 1 >= levels);
        if collapsed && !node.children.is_empty() {
            output.push_str(&format!(" *(+{} hidden)*", node.descendant_count));
        }
        output.push('\n');

        if !collapsed {
            for child in &node.children {
                self.render_node(output, child);
            }
        }
    }
}

impl TreeFormatter for MarkdownFormatter {
    fn format(&self, model: &TreeReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output);
        self.render_statistics(&mut output, model);
        self.render_dependencies(&mut output, model);

        Ok(output)
    }
}
