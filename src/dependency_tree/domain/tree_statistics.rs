use super::DependencyNode;

/// Counts every node in a forest (each root plus all of its descendants)
pub fn count_total_nodes(nodes: &[DependencyNode]) -> usize {
    nodes.iter().map(DependencyNode::subtree_size).sum()
}

/// TreeStatistics value object summarising a parsed forest and its filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStatistics {
    total_dependencies: usize,
    matching_dependencies: usize,
    root_count: usize,
    max_depth: usize,
    resolved_versions: usize,
}

impl TreeStatistics {
    /// Collects statistics for `original`; the matching count comes from `filtered`
    pub fn collect(original: &[DependencyNode], filtered: &[DependencyNode]) -> Self {
        Self {
            total_dependencies: count_total_nodes(original),
            matching_dependencies: count_total_nodes(filtered),
            root_count: original.len(),
            max_depth: Self::deepest_level(original),
            resolved_versions: Self::resolved_count(original),
        }
    }

    pub fn total_dependencies(&self) -> usize {
        self.total_dependencies
    }

    pub fn matching_dependencies(&self) -> usize {
        self.matching_dependencies
    }

    pub fn root_count(&self) -> usize {
        self.root_count
    }

    /// Deepest nesting level; a root without children is depth 0
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of nodes whose version was resolved to a different target
    pub fn resolved_versions(&self) -> usize {
        self.resolved_versions
    }

    fn deepest_level(forest: &[DependencyNode]) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&DependencyNode, usize)> =
            forest.iter().map(|root| (root, 0)).collect();

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().iter().map(|child| (child, depth + 1)));
        }

        deepest
    }

    fn resolved_count(forest: &[DependencyNode]) -> usize {
        let mut resolved = 0;
        let mut pending: Vec<&DependencyNode> = forest.iter().collect();

        while let Some(node) = pending.pop() {
            resolved += usize::from(node.target_version().is_some());
            pending.extend(node.children().iter());
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<DependencyNode> {
        let grandchild = DependencyNode::leaf("e:f", "1.0", Some("1.2"));
        let child = DependencyNode::new("c:d".into(), "2.0".into(), None, vec![grandchild]);
        vec![
            DependencyNode::new("a:b".into(), "1.0".into(), Some("1.1".into()), vec![child]),
            DependencyNode::leaf("g:h", "3.0", None),
        ]
    }

    #[test]
    fn test_count_total_nodes() {
        assert_eq!(count_total_nodes(&sample_forest()), 4);
    }

    #[test]
    fn test_count_total_nodes_empty() {
        assert_eq!(count_total_nodes(&[]), 0);
    }

    #[test]
    fn test_collect() {
        let forest = sample_forest();
        let filtered = vec![forest[1].clone()];
        let stats = TreeStatistics::collect(&forest, &filtered);

        assert_eq!(stats.total_dependencies(), 4);
        assert_eq!(stats.matching_dependencies(), 1);
        assert_eq!(stats.root_count(), 2);
        assert_eq!(stats.max_depth(), 2);
        assert_eq!(stats.resolved_versions(), 2);
    }

    #[test]
    fn test_collect_very_deep_chain() {
        let mut chain = DependencyNode::leaf("g:bottom", "1.0", Some("1.1"));
        for level in 0..100_000 {
            chain = DependencyNode::new(format!("g:a{}", level), "1.0".into(), None, vec![chain]);
        }
        let forest = vec![chain];

        let stats = TreeStatistics::collect(&forest, &forest);
        assert_eq!(stats.total_dependencies(), 100_001);
        assert_eq!(stats.max_depth(), 100_000);
        assert_eq!(stats.resolved_versions(), 1);
    }

    #[test]
    fn test_collect_empty_forest() {
        let stats = TreeStatistics::collect(&[], &[]);
        assert_eq!(stats.total_dependencies(), 0);
        assert_eq!(stats.root_count(), 0);
        assert_eq!(stats.max_depth(), 0);
    }
}
