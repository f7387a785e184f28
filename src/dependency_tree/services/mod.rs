mod match_highlighter;
mod metadata_generator;
mod search_filter;
mod tree_parser;

pub use match_highlighter::{MatchHighlighter, TextSegment};
pub use metadata_generator::MetadataGenerator;
pub use search_filter::SearchFilter;
pub use tree_parser::{TreeParser, MAX_NESTING_DEPTH};
