//! Profile content model for the Home view

/// One run of profile text, shown as-is or concealed behind a censor bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    /// Concealed text; rendered as a flickering bar of the same width
    Redacted(String),
}

impl Segment {
    /// The underlying text of the run
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Redacted(s) => s,
        }
    }

    /// Rendered width in terminal cells
    pub fn display_width(&self) -> usize {
        self.text().chars().count()
    }
}

/// Split a profile line on `{{...}}` redaction markers.
/// An unterminated marker is kept as plain text.
pub fn parse_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("{{") {
        let Some(inner_len) = remaining[start + 2..].find("}}") else {
            break;
        };
        if start > 0 {
            segments.push(Segment::Plain(remaining[..start].to_string()));
        }
        let inner = &remaining[start + 2..start + 2 + inner_len];
        segments.push(Segment::Redacted(inner.to_string()));
        remaining = &remaining[start + 2 + inner_len + 2..];
    }

    if !remaining.is_empty() {
        segments.push(Segment::Plain(remaining.to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_one_segment() {
        let segments = parse_segments("just text");
        assert_eq!(segments, vec![Segment::Plain("just text".to_string())]);
    }

    #[test]
    fn test_empty_line_has_no_segments() {
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn test_single_marker_in_the_middle() {
        let segments = parse_segments("a {{secret}} b");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("a ".to_string()),
                Segment::Redacted("secret".to_string()),
                Segment::Plain(" b".to_string()),
            ]
        );
    }

    #[test]
    fn test_marker_at_line_start() {
        let segments = parse_segments("{{secret}} b");
        assert_eq!(
            segments,
            vec![
                Segment::Redacted("secret".to_string()),
                Segment::Plain(" b".to_string()),
            ]
        );
    }

    #[test]
    fn test_marker_at_line_end() {
        let segments = parse_segments("a {{secret}}");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("a ".to_string()),
                Segment::Redacted("secret".to_string()),
            ]
        );
    }

    #[test]
    fn test_multiple_markers() {
        let segments = parse_segments("{{one}} and {{two}}");
        assert_eq!(
            segments,
            vec![
                Segment::Redacted("one".to_string()),
                Segment::Plain(" and ".to_string()),
                Segment::Redacted("two".to_string()),
            ]
        );
    }

    #[test]
    fn test_adjacent_markers() {
        let segments = parse_segments("{{a}}{{b}}");
        assert_eq!(
            segments,
            vec![
                Segment::Redacted("a".to_string()),
                Segment::Redacted("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_marker_stays_plain() {
        let segments = parse_segments("abc {{oops");
        assert_eq!(segments, vec![Segment::Plain("abc {{oops".to_string())]);
    }

    #[test]
    fn test_empty_marker_is_kept() {
        let segments = parse_segments("a{{}}b");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("a".to_string()),
                Segment::Redacted(String::new()),
                Segment::Plain("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_width_counts_chars() {
        let segment = Segment::Redacted("naïve".to_string());
        assert_eq!(segment.display_width(), 5);
    }
}
