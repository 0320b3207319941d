//! # Customer Id Formatting
//!
//! Customer ids are the integers `1..=N` rendered with a shared width, the number of
//! decimal digits in `N`:
//!
//! ```text
//!   N = 9    →  1 2 … 9
//!   N = 10   →  01 02 … 10
//!   N = 100  →  001 002 … 100
//! ```
//!
//! Equal widths make the lexicographic order of the strings match their numeric order,
//! which is what lets every listing sort on the id column directly.
//!
//! Widths are computed by counting digits on integers, never with floating point.

use crate::error::{Result, RosterError};

/// Width of every id in a collection of `count` records. An empty collection uses 1.
pub fn padding_width(count: usize) -> usize {
    let mut n = count;
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Renders `n` left-padded with zeros to `width` characters.
pub fn format_id(n: usize, width: usize) -> Result<String> {
    if n == 0 {
        return Err(RosterError::InvalidArgument(
            "customer ids start at 1".to_string(),
        ));
    }
    if width == 0 {
        return Err(RosterError::InvalidArgument(
            "id width must be positive".to_string(),
        ));
    }
    let natural = padding_width(n);
    if natural > width {
        return Err(RosterError::InvalidArgument(format!(
            "{} needs {} digits but the id width is {}",
            n, natural, width
        )));
    }
    Ok(format!("{:0>width$}", n, width = width))
}

/// True when growing or shrinking from `previous_count` to `new_count` changes the id width.
pub fn width_changed(new_count: usize, previous_count: usize) -> bool {
    padding_width(new_count) != padding_width(previous_count)
}

/// Numeric value of a stored id. Only used to order records, never to derive new ids.
pub fn parse_rank(id: &str) -> Option<usize> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_matches_digit_count() {
        let cases = [
            (0, 1),
            (1, 1),
            (9, 1),
            (10, 2),
            (11, 2),
            (99, 2),
            (100, 3),
            (101, 3),
            (999, 3),
            (1000, 4),
        ];
        for (count, expected) in cases {
            assert_eq!(
                padding_width(count),
                expected,
                "padding_width({}) should be {}",
                count,
                expected
            );
            assert_eq!(padding_width(count), count.max(1).to_string().len());
        }
    }

    #[test]
    fn width_at_large_powers_of_ten() {
        assert_eq!(padding_width(999_999), 6);
        assert_eq!(padding_width(1_000_000), 7);
        assert_eq!(padding_width(usize::MAX), usize::MAX.to_string().len());
    }

    #[test]
    fn format_pads_with_zeros() {
        assert_eq!(format_id(1, 1).unwrap(), "1");
        assert_eq!(format_id(7, 2).unwrap(), "07");
        assert_eq!(format_id(42, 3).unwrap(), "042");
        assert_eq!(format_id(100, 3).unwrap(), "100");
    }

    #[test]
    fn format_rejects_values_wider_than_width() {
        let err = format_id(100, 2).unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));
    }

    #[test]
    fn format_rejects_zero_inputs() {
        assert!(matches!(
            format_id(0, 1),
            Err(RosterError::InvalidArgument(_))
        ));
        assert!(matches!(
            format_id(1, 0),
            Err(RosterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn width_changes_only_at_milestones() {
        assert!(!width_changed(1, 0));
        assert!(width_changed(10, 9));
        assert!(!width_changed(11, 10));
        assert!(width_changed(100, 99));
        assert!(width_changed(9, 10));
        assert!(!width_changed(50, 51));
    }

    #[test]
    fn parse_rank_reads_padded_ids() {
        assert_eq!(parse_rank("007"), Some(7));
        assert_eq!(parse_rank("10"), Some(10));
        assert_eq!(parse_rank(""), None);
        assert_eq!(parse_rank("+1"), None);
        assert_eq!(parse_rank("1a"), None);
    }
}
