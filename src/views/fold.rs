//! Single-pass reductions shared by every view.
//!
//! All results are integers; an empty input or a zero denominator yields 0.

/// Stand-in for a missing ETA when looking for the shortest one.
pub const MISSING_ETA: i64 = 999;

/// Round half up, so 86.5 becomes 87 and 26.0 stays 26.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn count_where<T>(rows: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    rows.iter().filter(|row| predicate(row)).count()
}

/// Sum a nullable column, treating missing values as 0.
pub fn sum_of<T>(rows: &[T], field: impl Fn(&T) -> Option<i64>) -> i64 {
    rows.iter().fold(0, |acc, row| acc + field(row).unwrap_or(0))
}

pub fn mean_of<T>(rows: &[T], field: impl Fn(&T) -> Option<i64>) -> i64 {
    if rows.is_empty() {
        return 0;
    }
    round_half_up(sum_of(rows, field) as f64 / rows.len() as f64)
}

/// Smallest value of a nullable column, missing values counting as
/// `sentinel`.
pub fn min_of<T>(rows: &[T], field: impl Fn(&T) -> Option<i64>, sentinel: i64) -> i64 {
    rows.iter()
        .map(|row| field(row).unwrap_or(sentinel))
        .min()
        .unwrap_or(0)
}

pub fn percent(part: i64, total: i64) -> i64 {
    if total > 0 {
        round_half_up(part as f64 / total as f64 * 100.0)
    } else {
        0
    }
}
