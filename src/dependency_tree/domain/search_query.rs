use std::ops::Range;

/// SearchQuery value object for case-insensitive substring search
///
/// Characters are compared one to one: two characters are equal when their
/// single-character uppercase forms, lowercased again, are equal. Mappings
/// that expand into several characters are not applied, so `ss` does not
/// match `ß`, while `i` matches `İ` and `I` matches `ı`. Returned ranges are
/// byte offsets into the original text and always fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    chars: Vec<char>,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            chars: raw.chars().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `text` contains the query, ignoring case.
    /// An empty query matches everything.
    pub fn matches(&self, text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        text.char_indices()
            .any(|(start, _)| self.match_len_at(&text[start..]).is_some())
    }

    /// Byte ranges of every non-overlapping occurrence, left to right.
    /// An empty query yields no ranges.
    pub fn find_matches(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        if self.is_empty() {
            return ranges;
        }

        let mut cursor = 0;
        while cursor < text.len() {
            match self.match_len_at(&text[cursor..]) {
                Some(len) => {
                    ranges.push(cursor..cursor + len);
                    cursor += len;
                }
                None => {
                    // advance one char
                    cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        ranges
    }

    /// Length in bytes of a match starting at the beginning of `text`
    fn match_len_at(&self, text: &str) -> Option<usize> {
        let mut len = 0;
        let mut haystack = text.chars();

        for &expected in &self.chars {
            let actual = haystack.next()?;
            if !chars_equal_ignore_case(expected, actual) {
                return None;
            }
            len += actual.len_utf8();
        }

        Some(len)
    }
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

/// Uppercase form when it is a single character, otherwise `c` itself
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// First character of the lowercase form (`İ` lowercases to `i` + a combining dot)
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
