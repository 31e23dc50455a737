//! Splitting text into plain and highlighted segments for a search query.

use regex::RegexBuilder;

/// A run of text that is either part of a match or between matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    #[must_use]
    pub fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Splits `text` around every case-insensitive occurrence of `query`.
///
/// The query is matched literally (metacharacters are escaped) and untrimmed.
/// A blank query yields the whole text as one plain segment. Empty segments are
/// dropped, and concatenating the result always reproduces `text`.
///
/// # Examples
///
/// ```
/// use dirbrowse::directory::highlight;
///
/// let segments = highlight("Leanne Graham", "an");
/// let marked: Vec<&str> = segments
///     .iter()
///     .filter(|s| s.highlighted)
///     .map(|s| s.text.as_str())
///     .collect();
/// assert_eq!(marked, vec!["an"]);
/// ```
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.trim().is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build();

    let Ok(pattern) = pattern else {
        tracing::debug!(query_len = query.len(), "highlight pattern rejected");
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::plain(&text[cursor..found.start()]));
        }
        if !found.as_str().is_empty() {
            segments.push(Segment::marked(found.as_str()));
        }
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn blank_query_is_verbatim() {
        assert_eq!(highlight("Ervin Howell", "  "), vec![Segment::plain("Ervin Howell")]);
    }

    #[test]
    fn every_occurrence_is_marked_and_text_reconstructs() {
        let text = "Sincere@April.biz";
        let segments = highlight(text, "a");

        let marked: Vec<&str> = segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(marked, vec!["A"]);
        assert_eq!(joined(&segments), text);

        let text = "Anastasia@yesenia.net";
        let segments = highlight(text, "a");
        assert_eq!(segments.iter().filter(|s| s.highlighted).count(), 5);
        assert_eq!(joined(&segments), text);
        assert!(segments.iter().all(|s| !s.text.is_empty()));
    }

    #[test]
    fn two_matches_in_email() {
        let text = "Lucio_Hettinger@annie.ca";
        let segments = highlight(text, "A");
        assert_eq!(
            segments,
            vec![
                Segment::plain("Lucio_Hettinger@"),
                Segment::marked("a"),
                Segment::plain("nnie.c"),
                Segment::marked("a"),
            ]
        );
        assert_eq!(segments.iter().filter(|s| s.highlighted).count(), 2);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn metacharacters_are_literal() {
        let segments = highlight("a.b (c) a*b", "(c)");
        assert_eq!(
            segments,
            vec![Segment::plain("a.b "), Segment::marked("(c)"), Segment::plain(" a*b")]
        );
        assert_eq!(highlight("axb", ".").len(), 1);
    }

    #[test]
    fn match_at_both_ends_has_no_empty_segments() {
        let segments = highlight("abcab", "ab");
        assert_eq!(
            segments,
            vec![Segment::marked("ab"), Segment::plain("c"), Segment::marked("ab")]
        );
    }

    #[test]
    fn preserves_original_casing() {
        let segments = highlight("GRAHAM", "graham");
        assert_eq!(segments, vec![Segment::marked("GRAHAM")]);
    }
}
