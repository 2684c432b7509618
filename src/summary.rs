/// Title/description pair parsed out of the model's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrSummary {
    pub title: String,
    pub description: String,
}

impl PrSummary {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Render the summary as the Markdown document shown to the user and
    /// optionally written to disk.
    pub fn render_markdown(&self) -> String {
        format!("# {}\n\n{}", self.title, self.description)
    }
}

/// Split a free-text reply into title and description.
///
/// The first line is the title, minus any leading `#` heading markers and
/// surrounding whitespace. Everything after the first line, trimmed, is the
/// description. A single-line reply has an empty description; an empty reply
/// yields an empty summary for the caller to flag.
pub fn parse_summary(raw: &str) -> PrSummary {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, '\n');

    let title_line = parts.next().unwrap_or("");
    let title = title_line.trim_start_matches('#').trim().to_string();

    let description = parts.next().unwrap_or("").trim().to_string();

    PrSummary { title, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_marker_is_stripped_from_title() {
        let summary = parse_summary("# Fix bug\n\nBody line 1\nBody line 2");
        assert_eq!(summary.title, "Fix bug");
        assert_eq!(summary.description, "Body line 1\nBody line 2");
    }

    #[test]
    fn repeated_heading_markers_are_stripped() {
        let summary = parse_summary("### Release notes\nDetails");
        assert_eq!(summary.title, "Release notes");
        assert_eq!(summary.description, "Details");
    }

    #[test]
    fn single_line_reply_has_empty_description() {
        let summary = parse_summary("Single title only");
        assert_eq!(summary.title, "Single title only");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn empty_reply_yields_empty_summary() {
        let summary = parse_summary("");
        assert_eq!(summary.title, "");
        assert_eq!(summary.description, "");
        assert!(summary.is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let summary = parse_summary("\n\n  Tidy imports  \n\n  dropped unused modules  \n\n");
        assert_eq!(summary.title, "Tidy imports");
        assert_eq!(summary.description, "dropped unused modules");
    }

    #[test]
    fn renders_title_and_body_as_markdown() {
        let summary = PrSummary {
            title: "Add retry budget".to_string(),
            description: "Covers the flaky path.".to_string(),
        };
        assert_eq!(
            summary.render_markdown(),
            "# Add retry budget\n\nCovers the flaky path."
        );
    }
}
