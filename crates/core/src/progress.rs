//! Course completion arithmetic.
//!
//! Progress is always computed over *published* chapters; draft chapters
//! neither count toward nor against a student's percentage. Callers load
//! the published-chapter ids and the count of completed ones among them,
//! then evaluate here.

/// A course counts as completed at exactly this percentage.
pub const COMPLETE_PCT: f64 = 100.0;

/// Percentage of published chapters the user has completed.
///
/// Defined as `0.0` when the course has no published chapters, so a course
/// whose chapters were all unpublished after purchase reads as "not
/// started" rather than dividing by zero.
pub fn completion_pct(published_chapters: usize, completed_chapters: usize) -> f64 {
    if published_chapters == 0 {
        return 0.0;
    }
    (completed_chapters as f64 / published_chapters as f64) * 100.0
}

/// Whether a progress percentage counts as a fully completed course.
pub fn is_complete(pct: f64) -> bool {
    pct >= COMPLETE_PCT
}
