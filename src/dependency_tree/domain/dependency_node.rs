/// DependencyNode value object representing one line of a dependency report
///
/// Nodes are immutable once built: the parser assembles them bottom-up and the
/// search filter produces new nodes instead of editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    name: String,
    original_version: String,
    target_version: Option<String>,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(
        name: String,
        original_version: String,
        target_version: Option<String>,
        children: Vec<DependencyNode>,
    ) -> Self {
        Self {
            name,
            original_version,
            target_version,
            children,
        }
    }

    /// Creates a node without children
    #[cfg(test)]
    pub fn leaf(name: &str, original_version: &str, target_version: Option<&str>) -> Self {
        Self::new(
            name.to_string(),
            original_version.to_string(),
            target_version.map(str::to_string),
            Vec::new(),
        )
    }

    /// `<group>:<artifact>`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn original_version(&self) -> &str {
        &self.original_version
    }

    /// Resolved version, present only for `original -> target` lines
    pub fn target_version(&self) -> Option<&str> {
        self.target_version.as_deref()
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Display version: `original` or `original -> target`
    pub fn version(&self) -> String {
        match &self.target_version {
            Some(target) => format!("{} -> {}", self.original_version, target),
            None => self.original_version.clone(),
        }
    }

    /// Returns a copy of this node carrying `children` instead of its own
    pub fn with_children(&self, children: Vec<DependencyNode>) -> Self {
        Self {
            name: self.name.clone(),
            original_version: self.original_version.clone(),
            target_version: self.target_version.clone(),
            children,
        }
    }

    /// Number of nodes in this subtree, self included
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

/// Releases descendants from an explicit list so very deep chains do not
/// recurse once per level
impl Drop for DependencyNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl std::fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.version())
    }
}
