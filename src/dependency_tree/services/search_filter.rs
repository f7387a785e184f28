use crate::dependency_tree::domain::{DependencyNode, SearchQuery};

/// SearchFilter service pruning a forest down to the paths that lead to matches
///
/// A node survives when its name or one of its versions contains the query
/// (case-insensitively) or when any descendant survives. Surviving nodes are
/// rebuilt with only their surviving children; the input is never modified.
pub struct SearchFilter;

impl SearchFilter {
    /// Filters every root independently, dropping roots with no match in their subtree
    pub fn filter_forest(forest: &[DependencyNode], query: &str) -> Vec<DependencyNode> {
        let query = SearchQuery::new(query);
        forest
            .iter()
            .filter_map(|root| Self::filter_with(root, &query))
            .collect()
    }

    /// Filters a single subtree. An empty query returns the subtree unchanged.
    pub fn filter_node(node: &DependencyNode, query: &str) -> Option<DependencyNode> {
        Self::filter_with(node, &SearchQuery::new(query))
    }

    /// Whether the node itself (ignoring descendants) matches the query
    pub fn matches_self(node: &DependencyNode, query: &SearchQuery) -> bool {
        query.matches(node.name())
            || query.matches(node.original_version())
            || node
                .target_version()
                .is_some_and(|target| query.matches(target))
    }

    /// Post-order walk over an explicit stack, so depth is bounded by memory
    /// and not by the thread's stack
    fn filter_with(node: &DependencyNode, query: &SearchQuery) -> Option<DependencyNode> {
        let mut stack = vec![PendingNode::new(node)];

        loop {
            let top = stack.last_mut()?;
            let current: &DependencyNode = top.node;
            if let Some(child) = current.children().get(top.next_child) {
                top.next_child += 1;
                stack.push(PendingNode::new(child));
                continue;
            }

            let done = stack.pop()?;
            let survivor = (Self::matches_self(done.node, query) || !done.kept.is_empty())
                .then(|| done.node.with_children(done.kept));

            match stack.last_mut() {
                Some(parent) => parent.kept.extend(survivor),
                None => return survivor,
            }
        }
    }
}

/// A node whose children are still being filtered
struct PendingNode<'a> {
    node: &'a DependencyNode,
    next_child: usize,
    kept: Vec<DependencyNode>,
}

impl<'a> PendingNode<'a> {
    fn new(node: &'a DependencyNode) -> Self {
        Self {
            node,
            next_child: 0,
            kept: Vec::new(),
        }
    }
}
