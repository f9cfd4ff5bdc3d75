//! Display-name derivation for uploaded attachments.

/// Derive an attachment's display name from its storage URL.
///
/// Takes the last non-empty path segment, ignoring any query string or
/// fragment. Falls back to the full URL when no segment can be extracted
/// (the name column is NOT NULL, so we always store something).
pub fn attachment_name_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);

    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_path_segment() {
        assert_eq!(
            attachment_name_from_url("https://files.example.com/uploads/syllabus.pdf"),
            "syllabus.pdf"
        );
    }

    #[test]
    fn ignores_query_string() {
        assert_eq!(
            attachment_name_from_url("https://files.example.com/notes.pdf?token=abc"),
            "notes.pdf"
        );
    }

    #[test]
    fn ignores_fragment() {
        assert_eq!(
            attachment_name_from_url("https://files.example.com/notes.pdf#page=2"),
            "notes.pdf"
        );
    }

    #[test]
    fn trailing_slash_uses_previous_segment() {
        assert_eq!(
            attachment_name_from_url("https://files.example.com/uploads/"),
            "uploads"
        );
    }

    #[test]
    fn degenerate_url_falls_back_to_input() {
        assert_eq!(attachment_name_from_url("///"), "///");
    }
}
