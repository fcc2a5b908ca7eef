use regex::Regex;

/// Byte offset of the earliest match of any pattern in `text`.
///
/// Patterns that do not match are ignored. Returns `None` for empty text,
/// an empty pattern set, or when nothing matches.
pub fn first_match_offset(text: &str, patterns: &[&Regex]) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    patterns
        .iter()
        .filter_map(|re| re.find(text).map(|m| m.start()))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_empty_text() {
        let a = re(r"(?mi)^\s*INTRODUCTION\b");
        assert_eq!(first_match_offset("", &[&a]), None);
    }

    #[test]
    fn test_no_patterns() {
        assert_eq!(first_match_offset("INTRODUCTION", &[]), None);
    }

    #[test]
    fn test_earliest_wins_regardless_of_order() {
        let intro = re(r"(?mi)^\s*INTRODUCTION\b");
        let issues = re(r"(?mi)^\s*ISSUES?\b");
        let text = "Title\nISSUES\nfoo\nINTRODUCTION\nbar";
        assert_eq!(first_match_offset(text, &[&intro, &issues]), Some(6));
        assert_eq!(first_match_offset(text, &[&issues, &intro]), Some(6));
    }

    #[test]
    fn test_line_anchor_ignores_mid_sentence_keyword() {
        let intro = re(r"(?mi)^\s*INTRODUCTION\b");
        let text = "This is an introduction to the case.\nMore prose.";
        assert_eq!(first_match_offset(text, &[&intro]), None);
    }

    #[test]
    fn test_unmatched_patterns_are_skipped() {
        let intro = re(r"(?mi)^\s*INTRODUCTION\b");
        let synopsis = re(r"(?mi)^\s*CASE\s+SYNOPSIS\b");
        let text = "Heading\ncase synopsis\n";
        assert_eq!(first_match_offset(text, &[&intro, &synopsis]), Some(8));
    }
}
