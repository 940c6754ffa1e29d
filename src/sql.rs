//! Helpers producing PostgreSQL range expressions as SQL text.
//!
//! These are pure string builders with no runtime behaviour of their own:
//! each takes already-rendered SQL expressions and wraps them in the
//! corresponding range operator or function.

fn binary(left: &str, operator: &str, right: &str) -> String {
    format!("({} {} {})", left, operator, right)
}

fn call(function: &str, expression: &str) -> String {
    format!("{}({})", function, expression)
}

/// `left @> right`
pub fn contains(left: &str, right: &str) -> String {
    binary(left, "@>", right)
}

/// `left <@ right`
pub fn contained_by(left: &str, right: &str) -> String {
    binary(left, "<@", right)
}

/// `left && right`
pub fn overlaps(left: &str, right: &str) -> String {
    binary(left, "&&", right)
}

/// `left << right`
pub fn strictly_left_of(left: &str, right: &str) -> String {
    binary(left, "<<", right)
}

/// `left >> right`
pub fn strictly_right_of(left: &str, right: &str) -> String {
    binary(left, ">>", right)
}

/// `left &< right`
pub fn does_not_extend_right_of(left: &str, right: &str) -> String {
    binary(left, "&<", right)
}

/// `left &> right`
pub fn does_not_extend_left_of(left: &str, right: &str) -> String {
    binary(left, "&>", right)
}

/// `left -|- right`
pub fn adjacent_to(left: &str, right: &str) -> String {
    binary(left, "-|-", right)
}

/// `left + right`
pub fn union_of(left: &str, right: &str) -> String {
    binary(left, "+", right)
}

/// `left * right`
pub fn intersection_of(left: &str, right: &str) -> String {
    binary(left, "*", right)
}

/// `left - right`
pub fn difference_of(left: &str, right: &str) -> String {
    binary(left, "-", right)
}

/// `LOWER(expression)`
pub fn lower(expression: &str) -> String {
    call("LOWER", expression)
}

/// `UPPER(expression)`
pub fn upper(expression: &str) -> String {
    call("UPPER", expression)
}

/// `ISEMPTY(expression)`
pub fn isempty(expression: &str) -> String {
    call("ISEMPTY", expression)
}

/// `LOWER_INC(expression)`
pub fn lower_inc(expression: &str) -> String {
    call("LOWER_INC", expression)
}

/// `UPPER_INC(expression)`
pub fn upper_inc(expression: &str) -> String {
    call("UPPER_INC", expression)
}

/// `LOWER_INF(expression)`
pub fn lower_inf(expression: &str) -> String {
    call("LOWER_INF", expression)
}

/// `UPPER_INF(expression)`
pub fn upper_inf(expression: &str) -> String {
    call("UPPER_INF", expression)
}

/// `RANGE_MERGE(left, right)`
pub fn range_merge(left: &str, right: &str) -> String {
    format!("RANGE_MERGE({}, {})", left, right)
}

/// `MULTIRANGE(range, ...)`
pub fn multirange(ranges: &[&str]) -> String {
    format!("MULTIRANGE({})", ranges.join(", "))
}

/// `UNNEST(expression)`
pub fn unnest(expression: &str) -> String {
    call("UNNEST", expression)
}
