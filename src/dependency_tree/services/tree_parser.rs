use crate::dependency_tree::domain::DependencyNode;
use crate::dependency_tree::policies::OrphanPolicy;
use regex::Regex;
use std::sync::OnceLock;

/// Space characters that make up one nesting level in a Gradle report
const SPACES_PER_LEVEL: usize = 3;

/// Deepest depth the parser assigns; lines nested further are attached at
/// this depth, so parsed trees have at most `MAX_NESTING_DEPTH + 1` levels
pub const MAX_NESTING_DEPTH: usize = 256;

/// `+--- group:artifact:version[ -> target][ (*)]`, matched against a trimmed line
fn dependency_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[+\\]--- (.*?):(.*?):(.*?)(?:\s+->\s+(.*?))?(?:\s+\(\*\))?$")
            .expect("dependency line pattern must compile")
    })
}

/// Fields captured from a single report line
struct LineFields {
    name: String,
    original_version: String,
    target_version: Option<String>,
}

impl LineFields {
    fn capture(line: &str) -> Option<Self> {
        let captures = dependency_line_pattern().captures(line.trim())?;
        let group = captures.get(1).map_or("", |m| m.as_str());
        let artifact = captures.get(2).map_or("", |m| m.as_str());
        let original_version = captures.get(3).map_or("", |m| m.as_str());
        let target_version = captures
            .get(4)
            .map(|m| m.as_str())
            .filter(|target| !target.is_empty());

        Some(Self {
            name: format!("{}:{}", group, artifact),
            original_version: original_version.to_string(),
            target_version: target_version.map(str::to_string),
        })
    }
}

/// A node whose children are still being collected
struct OpenNode {
    depth: usize,
    fields: LineFields,
    children: Vec<DependencyNode>,
}

impl OpenNode {
    fn close(self) -> DependencyNode {
        DependencyNode::new(
            self.fields.name,
            self.fields.original_version,
            self.fields.target_version,
            self.children,
        )
    }
}

/// TreeParser service turning a Gradle dependency report into a forest
///
/// Parsing is lenient: lines that do not look like dependency lines
/// (task headers, configuration names, legends, blank lines) are skipped,
/// and no input makes it fail.
pub struct TreeParser;

impl TreeParser {
    /// Parses `text` with the default [`OrphanPolicy`]
    pub fn parse(text: &str) -> Vec<DependencyNode> {
        Self::parse_with_policy(text, OrphanPolicy::default())
    }

    /// Parses `text`, placing parentless nested lines according to `policy`
    ///
    /// Keeps the chain of open ancestors on a stack. A node is closed (and
    /// handed to the entry beneath it) once a line at the same or a shallower
    /// depth arrives, so children keep their source order. Depths are capped
    /// at [`MAX_NESTING_DEPTH`].
    pub fn parse_with_policy(text: &str, policy: OrphanPolicy) -> Vec<DependencyNode> {
        let mut roots = Vec::new();
        let mut open: Vec<OpenNode> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let depth = Self::line_depth(line).min(MAX_NESTING_DEPTH);
            let Some(fields) = LineFields::capture(line) else {
                continue;
            };

            while open.last().is_some_and(|top| top.depth >= depth) {
                Self::close_top(&mut open, &mut roots, policy);
            }

            open.push(OpenNode {
                depth,
                fields,
                children: Vec::new(),
            });
        }

        while !open.is_empty() {
            Self::close_top(&mut open, &mut roots, policy);
        }

        roots
    }

    /// Nesting depth of a line: spaces in the leading run of spaces and `|`,
    /// divided by three. Bars are skipped but not counted.
    pub fn line_depth(line: &str) -> usize {
        line.chars()
            .take_while(|&c| c == ' ' || c == '|')
            .filter(|&c| c == ' ')
            .count()
            / SPACES_PER_LEVEL
    }

    /// Parses one line into a childless node, or `None` if it is not a dependency line
    pub fn parse_line(line: &str) -> Option<DependencyNode> {
        if line.trim().is_empty() {
            return None;
        }
        LineFields::capture(line).map(|fields| {
            OpenNode {
                depth: 0,
                fields,
                children: Vec::new(),
            }
            .close()
        })
    }

    fn close_top(open: &mut Vec<OpenNode>, roots: &mut Vec<DependencyNode>, policy: OrphanPolicy) {
        let Some(top) = open.pop() else {
            return;
        };
        let depth = top.depth;
        let node = top.close();

        match open.last_mut() {
            Some(parent) => parent.children.push(node),
            None if depth == 0 => roots.push(node),
            None => roots.extend(policy.adopt(node)),
        }
    }
}
