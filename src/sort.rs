//! Row sorting by one column, numbers before strings.

use std::cmp::Ordering;

use crate::table::Row;
use crate::utils::parse_number;

/// Compare two cells: numerically when both parse completely as numbers,
/// case-insensitive lexicographically otherwise.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    if let (Some(a_num), Some(b_num)) = (parse_number(a), parse_number(b)) {
        return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
    }
    let a_lower = a.to_ascii_lowercase();
    let b_lower = b.to_ascii_lowercase();
    a_lower.cmp(&b_lower)
}

/// Sort rows in place by the given column. Missing cells compare as empty
/// strings. The sort is stable, so equal keys keep input order.
pub fn sort_rows(rows: &mut [Row], column: usize, descending: bool) {
    rows.sort_by(|a, b| {
        let left = a.get(column).unwrap_or("");
        let right = b.get(column).unwrap_or("");
        let ordering = compare_cells(left, right);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Resolve a sort-column argument: a non-negative integer is an index, any
/// other token is looked up in the header.
pub fn resolve_sort_column(spec: &str, header: Option<&Row>) -> Option<usize> {
    let spec = spec.trim();
    if let Ok(index) = spec.parse::<usize>() {
        return Some(index);
    }
    header.and_then(|h| h.find_column(spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_before_string() {
        assert_eq!(compare_cells("9", "10"), Ordering::Less);
        assert_eq!(compare_cells("10", "9"), Ordering::Greater);
    }

    #[test]
    fn test_string_fallback_is_case_insensitive() {
        assert_eq!(compare_cells("Apple", "apple"), Ordering::Equal);
        assert_eq!(compare_cells("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_mixed_falls_back_to_string() {
        // "9" < "abc" lexicographically once numeric parsing fails for "abc"
        assert_eq!(compare_cells("9", "abc"), Ordering::Less);
    }
}
