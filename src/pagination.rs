pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest value bound as LIMIT/OFFSET; drivers bind these as signed 64-bit.
const MAX_BOUND: u64 = i64::MAX.unsigned_abs();

/// 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parse a positive integer, or `None` for anything else (including `0`).
fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v.min(MAX_BOUND))
}

impl Pagination {
    /// Coerce raw `page`/`limit` query values. Each falls back to its
    /// default on its own when missing, non-numeric, or zero.
    #[must_use]
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_BOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let pagination = Pagination::from_params(None, None);
        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_explicit_values() {
        let pagination = Pagination::from_params(Some("3"), Some("15"));
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.limit, 15);
        assert_eq!(pagination.offset(), 30);
    }

    #[test]
    fn test_invalid_values_fall_back_independently() {
        let pagination = Pagination::from_params(Some("abc"), Some("20"));
        assert_eq!(pagination.page, DEFAULT_PAGE);
        assert_eq!(pagination.limit, 20);

        let pagination = Pagination::from_params(Some("2"), Some("-5"));
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_zero_is_not_positive() {
        let pagination = Pagination::from_params(Some("0"), Some("0"));
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_decimal_and_padded_input() {
        let pagination = Pagination::from_params(Some(" 4 "), Some("2.5"));
        assert_eq!(pagination.page, 4);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_offset_saturates() {
        let pagination = Pagination {
            page: u64::MAX,
            limit: u64::MAX,
        };
        assert_eq!(pagination.offset(), MAX_BOUND);
    }

    #[test]
    fn test_huge_values_clamped() {
        let pagination = Pagination::from_params(Some("18446744073709551615"), Some("18446744073709551615"));
        assert_eq!(pagination.page, MAX_BOUND);
        assert_eq!(pagination.limit, MAX_BOUND);
    }
}
