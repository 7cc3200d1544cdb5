//! Review batch formatting

/// Render a batch of reviews as one markdown document
///
/// Each review goes under a numbered heading in input order, entries
/// separated by a blank line. Review text is embedded literally. An empty
/// batch yields an empty document.
pub fn format_reviews(reviews: &[String]) -> String {
    reviews
        .iter()
        .enumerate()
        .map(|(i, review)| format!("# User review {}\n{}", i + 1, review))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_single_review() {
        let reviews = vec!["Great product!".to_string()];
        assert_eq!(format_reviews(&reviews), "# User review 1\nGreat product!");
    }

    #[test]
    fn test_format_preserves_input_order() {
        let reviews = vec![
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string(),
        ];
        let doc = format_reviews(&reviews);
        assert_eq!(
            doc,
            "# User review 1\nFirst\n\n# User review 2\nSecond\n\n# User review 3\nThird"
        );
    }

    #[test]
    fn test_format_heading_count_matches_batch_size() {
        let reviews: Vec<String> = (0..7).map(|i| format!("review {}", i)).collect();
        let doc = format_reviews(&reviews);
        let headings = doc
            .lines()
            .filter(|l| l.starts_with("# User review "))
            .count();
        assert_eq!(headings, 7);
    }

    #[test]
    fn test_format_keeps_markdown_special_characters_literal() {
        let reviews = vec!["# Fake heading\n* bullet\n`code`".to_string()];
        let doc = format_reviews(&reviews);
        assert_eq!(doc, "# User review 1\n# Fake heading\n* bullet\n`code`");
    }

    #[test]
    fn test_format_empty_batch() {
        assert_eq!(format_reviews(&[]), "");
    }
}
