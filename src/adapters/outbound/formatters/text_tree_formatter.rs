use crate::application::read_models::{NodeView, TreeReadModel};
use crate::dependency_tree::domain::SearchQuery;
use crate::dependency_tree::services::MatchHighlighter;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Indentation added per nesting level
const INDENT: &str = "  ";

/// TextTreeFormatter adapter rendering an indented `name:version` tree
///
/// Each line is one dependency, two spaces deeper than its parent. With
/// colour enabled, query occurrences are highlighted and versions dimmed.
/// With `max_depth` set, only that many levels are printed; nodes on the
/// last level that have children get a `[+N]` marker giving the number of
/// hidden descendants.
pub struct TextTreeFormatter {
    color: bool,
    max_depth: Option<usize>,
}

impl TextTreeFormatter {
    pub fn new() -> Self {
        Self {
            color: false,
            max_depth: None,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn render_statistics(&self, output: &mut String, model: &TreeReadModel) {
        output.push_str(&format!(
            "Total dependencies: {}\n",
            model.statistics.total_dependencies
        ));
        output.push_str(&format!(
            "Matching dependencies: {}\n",
            model.statistics.matching_dependencies
        ));
        output.push('\n');
    }

    fn render_node(&self, output: &mut String, node: &NodeView, query: Option<&SearchQuery>) {
        output.push_str(&INDENT.repeat(node.depth));
        output.push_str(&self.paint(&node.name, query, false));
        output.push(':');
        output.push_str(&self.paint(&node.version, query, true));

        let collapsed = self.max_depth.is_some_and(|levels| node.depth + 1 >= levels);
        if collapsed && !node.children.is_empty() {
            output.push_str(&format!(" [+{}]", node.descendant_count));
        }
        output.push('\n');

        if !collapsed {
            for child in &node.children {
                self.render_node(output, child, query);
            }
        }
    }

    fn paint(&self, text: &str, query: Option<&SearchQuery>, dimmed: bool) -> String {
        if !self.color {
            return text.to_string();
        }

        let Some(query) = query else {
            return Self::plain(text, dimmed);
        };

        MatchHighlighter::segments(text, query)
            .into_iter()
            .map(|segment| {
                if segment.highlighted {
                    segment.text.yellow().bold().to_string()
                } else {
                    Self::plain(segment.text, dimmed)
                }
            })
            .collect()
    }

    fn plain(text: &str, dimmed: bool) -> String {
        if dimmed {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TextTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, model: &TreeReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_statistics(&mut output, model);

        if model.is_empty_search() {
            output.push_str("No matching dependencies found\n");
            return Ok(output);
        }
        if model.roots.is_empty() {
            output.push_str("No dependencies found\n");
            return Ok(output);
        }

        let query = model.query.as_deref().map(SearchQuery::new);
        for root in &model.roots {
            self.render_node(&mut output, root, query.as_ref());
        }

        Ok(output)
    }
}
