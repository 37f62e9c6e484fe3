//! Offset pagination with slice semantics: `items[skip : skip + limit]`.
//!
//! Negative bounds count from the end and every bound is clamped to `[0, len]`, so any
//! `skip`/`limit` pair yields a (possibly empty) page and never an error.

use std::ops::Range;

fn clamp_index(index: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 {
        index.saturating_add(len_i).max(0)
    } else {
        index.min(len_i)
    };
    // resolved is within [0, len]
    resolved as usize
}

/// Index range of the page within a collection of `len` items.
pub fn page_range(len: usize, skip: i64, limit: i64) -> Range<usize> {
    let start = clamp_index(skip, len);
    let stop = clamp_index(skip.saturating_add(limit), len);
    start..stop.max(start)
}

#[cfg(test)]
mod tests {
    use super::page_range;

    #[test]
    fn in_range_bounds_slice_normally() {
        assert_eq!(page_range(5, 0, 10), 0..5);
        assert_eq!(page_range(5, 1, 2), 1..3);
        assert_eq!(page_range(5, 0, 0), 0..0);
    }

    #[test]
    fn past_the_end_is_empty() {
        assert!(page_range(3, 10, 10).is_empty());
        assert!(page_range(0, 0, 10).is_empty());
        assert!(page_range(3, i64::MAX, i64::MAX).is_empty());
    }

    #[test]
    fn negative_bounds_count_from_the_end() {
        // [-1 : 9] on three items is the last one
        assert_eq!(page_range(3, -1, 10), 2..3);
        // [0 : -1] drops the last one
        assert_eq!(page_range(3, 0, -1), 0..2);
        // [-10 : -5] is clamped to nothing
        assert!(page_range(3, -10, 5).is_empty());
        assert!(page_range(3, 2, -5).is_empty());
        assert!(page_range(3, i64::MIN, i64::MIN).is_empty());
    }
}
