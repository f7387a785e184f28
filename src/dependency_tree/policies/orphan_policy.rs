use crate::dependency_tree::domain::DependencyNode;

/// OrphanPolicy decides what happens to a nested line with no open ancestor
///
/// An orphan is a line at depth > 0 that appears when no shallower line is
/// open, e.g. a report snippet copied from the middle of a tree. Either way
/// the orphan still collects the deeper lines that follow it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Drop the orphan and its subtree (matches Gradle viewers that only
    /// trust depth-0 lines as roots)
    #[default]
    Discard,
    /// Append the orphan, with its subtree, to the forest in source order
    PromoteToRoot,
}

impl OrphanPolicy {
    pub fn from_promote_flag(promote: bool) -> Self {
        if promote {
            OrphanPolicy::PromoteToRoot
        } else {
            OrphanPolicy::Discard
        }
    }

    /// Returns the node to append to the forest, if any
    pub fn adopt(self, orphan: DependencyNode) -> Option<DependencyNode> {
        match self {
            OrphanPolicy::Discard => None,
            OrphanPolicy::PromoteToRoot => Some(orphan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_discard() {
        assert_eq!(OrphanPolicy::default(), OrphanPolicy::Discard);
    }

    #[test]
    fn test_from_promote_flag() {
        assert_eq!(
            OrphanPolicy::from_promote_flag(true),
            OrphanPolicy::PromoteToRoot
        );
        assert_eq!(OrphanPolicy::from_promote_flag(false), OrphanPolicy::Discard);
    }

    #[test]
    fn test_adopt() {
        let orphan = DependencyNode::leaf("a:b", "1.0", None);
        assert!(OrphanPolicy::Discard.adopt(orphan.clone()).is_none());
        assert_eq!(OrphanPolicy::PromoteToRoot.adopt(orphan.clone()), Some(orphan));
    }
}
