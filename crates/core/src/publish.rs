//! Publish-eligibility evaluation for courses and chapters.
//!
//! A course or chapter only becomes visible on the student surface once
//! published, and publishing is gated on required fields being present.
//! Evaluation is pure: callers load the row (and for courses, the count of
//! published chapters) and receive the full set of missing requirements,
//! not just the first, so the UI can show everything at once.

use serde::Serialize;

/// A requirement that blocks publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRequirement {
    Title,
    Description,
    Image,
    Category,
    /// The course has no published chapter to show students.
    PublishedChapter,
    Video,
}

impl MissingRequirement {
    /// Stable label used in validation error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Image => "image",
            Self::Category => "category",
            Self::PublishedChapter => "published_chapter",
            Self::Video => "video",
        }
    }
}

fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Requirements still missing before a course can be published.
///
/// A course needs a title, description, image, category, and at least one
/// published chapter.
pub fn course_missing_requirements(
    title: &str,
    description: Option<&str>,
    image_url: Option<&str>,
    has_category: bool,
    published_chapters: usize,
) -> Vec<MissingRequirement> {
    let mut missing = Vec::new();
    if title.trim().is_empty() {
        missing.push(MissingRequirement::Title);
    }
    if blank(description) {
        missing.push(MissingRequirement::Description);
    }
    if blank(image_url) {
        missing.push(MissingRequirement::Image);
    }
    if !has_category {
        missing.push(MissingRequirement::Category);
    }
    if published_chapters == 0 {
        missing.push(MissingRequirement::PublishedChapter);
    }
    missing
}

/// Requirements still missing before a chapter can be published.
///
/// A chapter needs a title, description, and video URL.
pub fn chapter_missing_requirements(
    title: &str,
    description: Option<&str>,
    video_url: Option<&str>,
) -> Vec<MissingRequirement> {
    let mut missing = Vec::new();
    if title.trim().is_empty() {
        missing.push(MissingRequirement::Title);
    }
    if blank(description) {
        missing.push(MissingRequirement::Description);
    }
    if blank(video_url) {
        missing.push(MissingRequirement::Video);
    }
    missing
}

/// Render a missing-requirement list into a validation error message.
pub fn missing_requirements_message(missing: &[MissingRequirement]) -> String {
    let labels: Vec<&str> = missing.iter().map(|m| m.label()).collect();
    format!("Missing required fields: {}", labels.join(", "))
}
