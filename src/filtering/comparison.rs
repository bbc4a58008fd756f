use sea_orm::sea_query::{Expr, SimpleExpr};
use std::fmt;

/// Comparison operators accepted at the start of a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
}

impl ComparisonOperator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed `{operator, operand}` pair such as `>=4` or `<600`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPredicate {
    pub operator: ComparisonOperator,
    pub operand: i64,
}

impl FilterPredicate {
    #[must_use]
    pub const fn new(operator: ComparisonOperator, operand: i64) -> Self {
        Self { operator, operand }
    }

    /// Compare an arbitrary numeric SQL expression against the operand.
    #[must_use]
    pub fn apply(&self, expr: SimpleExpr) -> SimpleExpr {
        let target = Expr::expr(expr);
        match self.operator {
            ComparisonOperator::Lt => target.lt(self.operand),
            ComparisonOperator::Lte => target.lte(self.operand),
            ComparisonOperator::Gt => target.gt(self.operand),
            ComparisonOperator::Gte => target.gte(self.operand),
            ComparisonOperator::Eq => target.eq(self.operand),
        }
    }

    /// Evaluate the predicate against an in-memory value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn matches(&self, value: f64) -> bool {
        let operand = self.operand as f64;
        match self.operator {
            ComparisonOperator::Lt => value < operand,
            ComparisonOperator::Lte => value <= operand,
            ComparisonOperator::Gt => value > operand,
            ComparisonOperator::Gte => value >= operand,
            ComparisonOperator::Eq => (value - operand).abs() < f64::EPSILON,
        }
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}

/// Split a leading comparison operator off a filter value.
/// Two-character operators are tried first so `<=` is never read as `<`.
fn strip_operator(value: &str) -> Option<(ComparisonOperator, &str)> {
    const OPERATORS: [(&str, ComparisonOperator); 5] = [
        ("<=", ComparisonOperator::Lte),
        (">=", ComparisonOperator::Gte),
        ("<", ComparisonOperator::Lt),
        (">", ComparisonOperator::Gt),
        ("=", ComparisonOperator::Eq),
    ];

    OPERATORS.iter().find_map(|(symbol, operator)| {
        value
            .strip_prefix(symbol)
            .map(|remainder| (*operator, remainder))
    })
}

/// Parse a comparison filter of the form `<op><digits>`, e.g. `>=4` or `<600`.
///
/// The whole value must match `^(<=|>=|<|>|=)(\d+)$`. Anything else (decimals,
/// signs, whitespace, trailing text) returns `None`, which callers treat as
/// "no filter" rather than as a request error.
#[must_use]
pub fn parse_comparison(value: &str) -> Option<FilterPredicate> {
    let (operator, digits) = strip_operator(value)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let operand = digits.parse::<i64>().ok()?;
    Some(FilterPredicate::new(operator, operand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        let cases = [
            ("<5", ComparisonOperator::Lt),
            ("<=5", ComparisonOperator::Lte),
            (">5", ComparisonOperator::Gt),
            (">=5", ComparisonOperator::Gte),
            ("=5", ComparisonOperator::Eq),
        ];
        for (input, expected) in cases {
            let predicate = parse_comparison(input).unwrap();
            assert_eq!(predicate.operator, expected, "operator for {input}");
            assert_eq!(predicate.operand, 5, "operand for {input}");
        }
    }

    #[test]
    fn test_two_char_operators_not_shadowed() {
        assert_eq!(
            parse_comparison("<=400"),
            Some(FilterPredicate::new(ComparisonOperator::Lte, 400))
        );
        assert_eq!(
            parse_comparison(">=4"),
            Some(FilterPredicate::new(ComparisonOperator::Gte, 4))
        );
    }

    #[test]
    fn test_zero_and_leading_zeros() {
        assert_eq!(parse_comparison("=0").map(|p| p.operand), Some(0));
        assert_eq!(parse_comparison(">007").map(|p| p.operand), Some(7));
    }

    #[test]
    fn test_decimals_and_negatives_rejected() {
        assert_eq!(parse_comparison(">=4.5"), None);
        assert_eq!(parse_comparison("<-3"), None);
        assert_eq!(parse_comparison("<+3"), None);
    }

    #[test]
    fn test_shape_mismatches_rejected() {
        for input in [
            "", "<", ">=", "600", "abc", "< 600", " <600", "<600 ", "<600kcal", "a<600", "=>5",
            "<<5", "≤5",
        ] {
            assert_eq!(parse_comparison(input), None, "{input:?} should not parse");
        }
    }

    #[test]
    fn test_operand_overflow_rejected() {
        assert_eq!(parse_comparison("<99999999999999999999999"), None);
        assert_eq!(
            parse_comparison(&format!("<{}", i64::MAX)).map(|p| p.operand),
            Some(i64::MAX)
        );
    }

    #[test]
    fn test_matches() {
        let lte = parse_comparison("<=400").unwrap();
        assert!(lte.matches(389.0));
        assert!(lte.matches(400.0));
        assert!(!lte.matches(401.0));

        let gt = parse_comparison(">400").unwrap();
        assert!(!gt.matches(389.0));

        let eq = parse_comparison("=3").unwrap();
        assert!(eq.matches(3.0));
        assert!(!eq.matches(3.5));
    }

    #[test]
    fn test_display_round_trips_symbol() {
        let predicate = FilterPredicate::new(ComparisonOperator::Gte, 4);
        assert_eq!(predicate.to_string(), ">=4");
    }
}
