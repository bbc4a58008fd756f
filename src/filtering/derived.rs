use sea_orm::{
    DatabaseBackend,
    sea_query::{Expr, SimpleExpr},
};

/// Numeric fields computed at query time from a formatted text field.
///
/// Calories are stored as free text such as `"389 kcal"`, so comparisons
/// run against the leading integer extracted per row, never against the raw
/// stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedField {
    Calories,
}

impl DerivedField {
    /// JSON path of the source text inside the `nutrients` column.
    #[must_use]
    pub const fn json_key(self) -> &'static str {
        match self {
            Self::Calories => "calories",
        }
    }

    /// SQL expression yielding the leading integer of the source text for
    /// every candidate row, `0` when the text is missing or has no leading
    /// digits. Follows [`leading_integer`] exactly: leading spaces, tabs, and
    /// line breaks are skipped, and values beyond `i64::MAX` saturate.
    #[must_use]
    pub fn expr(self, backend: DatabaseBackend) -> SimpleExpr {
        let key = self.json_key();
        let sql = match backend {
            DatabaseBackend::Postgres => format!(
                "COALESCE(CAST(LEAST(CAST(substring(nutrients->>'{key}' from '^[ \\t\\n\\r]*([0-9]+)') AS NUMERIC), \
                 {max}) AS BIGINT), 0)",
                max = i64::MAX
            ),
            DatabaseBackend::MySql => format!(
                "COALESCE(CAST(LEAST(CAST(REGEXP_SUBSTR(REGEXP_REPLACE(JSON_UNQUOTE(JSON_EXTRACT(nutrients, '$.{key}')), \
                 '^[ \\t\\n\\r]+', ''), '^[0-9]+') AS DECIMAL(65, 0)), {max}) AS SIGNED), 0)",
                max = i64::MAX
            ),
            // CAST saturates at i64::MAX on its own.
            DatabaseBackend::Sqlite => format!(
                "COALESCE(CASE WHEN ltrim(json_extract(nutrients, '$.{key}'), {ws}) GLOB '[0-9]*' \
                 THEN CAST(ltrim(json_extract(nutrients, '$.{key}'), {ws}) AS INTEGER) END, 0)",
                ws = "char(32, 9, 10, 13)"
            ),
        };
        Expr::cust(sql)
    }
}

/// Characters skipped before the leading digits.
const LEADING_BLANKS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Leading integer of a formatted value: `"389 kcal"` is `389`, `"kcal"` is `0`.
///
/// Leading spaces, tabs, and line breaks are skipped; digits beyond
/// `i64::MAX` saturate.
#[must_use]
pub fn leading_integer(value: &str) -> i64 {
    value
        .trim_start_matches(LEADING_BLANKS)
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::comparison::parse_comparison;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("389 kcal"), 389);
        assert_eq!(leading_integer("389kcal"), 389);
        assert_eq!(leading_integer("  42 kcal"), 42);
        assert_eq!(leading_integer("kcal"), 0);
        assert_eq!(leading_integer(""), 0);
        assert_eq!(leading_integer("-5 kcal"), 0);
        assert_eq!(leading_integer("12.7 kcal"), 12);
        assert_eq!(leading_integer("\t389 kcal"), 389);
        assert_eq!(leading_integer("\r\n 7 kcal"), 7);
        assert_eq!(leading_integer("\u{a0}389 kcal"), 0);
    }

    #[test]
    fn test_leading_integer_saturates() {
        assert_eq!(leading_integer("99999999999999999999999 kcal"), i64::MAX);
    }

    #[test]
    fn test_calories_filter_against_derived_value() {
        let derived = leading_integer("389 kcal");
        #[allow(clippy::cast_precision_loss)]
        let derived = derived as f64;
        assert!(parse_comparison("<=400").unwrap().matches(derived));
        assert!(!parse_comparison(">400").unwrap().matches(derived));
    }

    #[test]
    fn test_missing_digits_only_match_upper_bounds() {
        #[allow(clippy::cast_precision_loss)]
        let derived = leading_integer("unknown") as f64;
        assert!(parse_comparison("<1").unwrap().matches(derived));
        assert!(parse_comparison("<=5").unwrap().matches(derived));
        assert!(!parse_comparison(">0").unwrap().matches(derived));
        assert!(!parse_comparison(">=1").unwrap().matches(derived));
        assert!(!parse_comparison("<0").unwrap().matches(derived));
    }

    #[test]
    fn test_expr_per_backend() {
        let sqlite = format!("{:?}", DerivedField::Calories.expr(DatabaseBackend::Sqlite));
        assert!(sqlite.contains("json_extract(nutrients, '$.calories')"));
        assert!(sqlite.contains("GLOB '[0-9]*'"));
        assert!(sqlite.contains("char(32, 9, 10, 13)"));

        let postgres = format!("{:?}", DerivedField::Calories.expr(DatabaseBackend::Postgres));
        assert!(postgres.contains("nutrients->>'calories'"));
        assert!(postgres.contains("LEAST("));
        assert!(postgres.contains("9223372036854775807"));

        let mysql = format!("{:?}", DerivedField::Calories.expr(DatabaseBackend::MySql));
        assert!(mysql.contains("REGEXP_SUBSTR"));
    }
}
