use crate::dependency_tree::domain::SearchQuery;

/// A slice of display text, flagged when it is an occurrence of the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// MatchHighlighter service splitting display text around query occurrences
///
/// Segments cover the input exactly and keep its original casing, so joining
/// them gives back the input string.
pub struct MatchHighlighter;

impl MatchHighlighter {
    pub fn segments<'a>(text: &'a str, query: &SearchQuery) -> Vec<TextSegment<'a>> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for range in query.find_matches(text) {
            if range.start > cursor {
                segments.push(TextSegment {
                    text: &text[cursor..range.start],
                    highlighted: false,
                });
            }
            segments.push(TextSegment {
                text: &text[range.clone()],
                highlighted: true,
            });
            cursor = range.end;
        }

        if cursor < text.len() || segments.is_empty() {
            segments.push(TextSegment {
                text: &text[cursor..],
                highlighted: false,
            });
        }

        segments
    }
}
