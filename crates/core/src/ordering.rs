//! Chapter position bookkeeping.
//!
//! Chapters carry a per-course integer `position` that the drag-and-drop
//! editor rewrites wholesale: the client sends the `(id, position)` pairs
//! it wants, and the server validates that the request stays inside the
//! course before applying it in one transaction.

use std::collections::HashSet;

use crate::types::DbId;

/// Position assigned to a chapter appended at the end of a course.
///
/// The first chapter of a course takes position 1.
pub fn next_position(current_max: Option<i32>) -> i32 {
    current_max.map_or(1, |max| max + 1)
}

/// Validate a reorder request against the course's actual chapter ids.
///
/// Rejects duplicate ids and ids that do not belong to the course. The
/// request may cover only a subset of chapters (the editor sends just the
/// range that moved).
pub fn validate_reorder(
    course_chapter_ids: &[DbId],
    requested: &[(DbId, i32)],
) -> Result<(), String> {
    let known: HashSet<DbId> = course_chapter_ids.iter().copied().collect();
    let mut seen = HashSet::with_capacity(requested.len());

    for &(id, position) in requested {
        if !known.contains(&id) {
            return Err(format!("Chapter {id} does not belong to this course"));
        }
        if !seen.insert(id) {
            return Err(format!("Chapter {id} appears more than once"));
        }
        if position < 1 {
            return Err(format!("Invalid position {position} for chapter {id}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_chapter_takes_position_one() {
        assert_eq!(next_position(None), 1);
    }

    #[test]
    fn appended_chapter_takes_max_plus_one() {
        assert_eq!(next_position(Some(4)), 5);
    }

    #[test]
    fn reorder_full_permutation_is_valid() {
        let ids = [1, 2, 3];
        let req = [(3, 1), (1, 2), (2, 3)];
        assert!(validate_reorder(&ids, &req).is_ok());
    }

    #[test]
    fn reorder_subset_is_valid() {
        // The editor only sends the moved range.
        let ids = [1, 2, 3, 4];
        let req = [(2, 3), (3, 2)];
        assert!(validate_reorder(&ids, &req).is_ok());
    }

    #[test]
    fn reorder_rejects_foreign_chapter() {
        let ids = [1, 2];
        let req = [(1, 1), (99, 2)];
        let err = validate_reorder(&ids, &req).unwrap_err();
        assert!(err.contains("99"));
        assert!(err.contains("does not belong"));
    }

    #[test]
    fn reorder_rejects_duplicate_id() {
        let ids = [1, 2];
        let req = [(1, 1), (1, 2)];
        let err = validate_reorder(&ids, &req).unwrap_err();
        assert!(err.contains("more than once"));
    }

    #[test]
    fn reorder_rejects_non_positive_position() {
        let ids = [1];
        let req = [(1, 0)];
        assert!(validate_reorder(&ids, &req).is_err());
    }

    #[test]
    fn empty_reorder_is_valid() {
        assert!(validate_reorder(&[1, 2], &[]).is_ok());
    }
}
