//! Parsing of string-encoded coordinate pairs such as `"(3.0, 4.0)"`.

use sg_core::{Point2, Real};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoordError {
    #[error("empty coordinate text")]
    Empty,

    #[error("unbalanced brackets in {text:?}")]
    Unbalanced { text: String },

    #[error("expected 2 values, found {count} in {text:?}")]
    Arity { count: usize, text: String },

    #[error("{value:?} is not a number")]
    NotANumber { value: String },

    #[error("{value:?} is not finite")]
    NonFinite { value: String },
}

/// Parse a 2-tuple of numbers.
///
/// Accepts an optional `(...)` or `[...]` wrapper, a single trailing comma and
/// any whitespace: `"(3, 4.5)"`, `"[-1e2, 0.]"`, `"2, 7,"`.
pub fn parse_coordinates(text: &str) -> Result<Point2, CoordError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoordError::Empty);
    }

    let inner = strip_brackets(trimmed).ok_or_else(|| CoordError::Unbalanced {
        text: text.to_string(),
    })?;

    let mut parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() == 3 && parts[2].is_empty() {
        parts.pop();
    }
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(CoordError::Arity {
            count: parts.iter().filter(|p| !p.is_empty()).count(),
            text: text.to_string(),
        });
    }

    Ok(Point2::new(parse_number(parts[0])?, parse_number(parts[1])?))
}

fn strip_brackets(text: &str) -> Option<&str> {
    let opens = text.starts_with('(') || text.starts_with('[');
    let closes = text.ends_with(')') || text.ends_with(']');
    match (opens, closes) {
        (false, false) => Some(text),
        (true, true) => {
            let inner = &text[1..text.len() - 1];
            let matched = matches!(
                (text.as_bytes()[0], text.as_bytes()[text.len() - 1]),
                (b'(', b')') | (b'[', b']')
            );
            matched.then_some(inner)
        }
        _ => None,
    }
}

fn parse_number(value: &str) -> Result<Real, CoordError> {
    // Only plain decimal literals: rule out the words `parse` also accepts.
    let is_literal = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_literal {
        return Err(CoordError::NotANumber {
            value: value.to_string(),
        });
    }

    let v: Real = value.parse().map_err(|_| CoordError::NotANumber {
        value: value.to_string(),
    })?;
    if !v.is_finite() {
        return Err(CoordError::NonFinite {
            value: value.to_string(),
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tuple_text() {
        assert_eq!(parse_coordinates("(3.0, 4.0)"), Ok(Point2::new(3.0, 4.0)));
        assert_eq!(parse_coordinates("(3,4)"), Ok(Point2::new(3.0, 4.0)));
        assert_eq!(parse_coordinates("  ( -1.5 ,  2e1 )  "), Ok(Point2::new(-1.5, 20.0)));
    }

    #[test]
    fn parses_list_and_bare_pairs() {
        assert_eq!(parse_coordinates("[0, 7]"), Ok(Point2::new(0.0, 7.0)));
        assert_eq!(parse_coordinates("5., .5"), Ok(Point2::new(5.0, 0.5)));
        assert_eq!(parse_coordinates("(1, 2,)"), Ok(Point2::new(1.0, 2.0)));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(parse_coordinates("(1)"), Err(CoordError::Arity { count: 1, .. })));
        assert!(matches!(
            parse_coordinates("(1, 2, 3)"),
            Err(CoordError::Arity { count: 3, .. })
        ));
        assert!(matches!(parse_coordinates("(,)"), Err(CoordError::Arity { .. })));
    }

    #[test]
    fn rejects_bad_brackets() {
        assert!(matches!(parse_coordinates("(1, 2"), Err(CoordError::Unbalanced { .. })));
        assert!(matches!(parse_coordinates("(1, 2]"), Err(CoordError::Unbalanced { .. })));
        assert!(matches!(parse_coordinates("1, 2)"), Err(CoordError::Unbalanced { .. })));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_coordinates(""), Err(CoordError::Empty));
        assert!(matches!(parse_coordinates("(a, 2)"), Err(CoordError::NotANumber { .. })));
        assert!(matches!(parse_coordinates("(inf, 2)"), Err(CoordError::NotANumber { .. })));
        assert!(matches!(parse_coordinates("(nan, 2)"), Err(CoordError::NotANumber { .. })));
        assert!(matches!(parse_coordinates("(1e999, 2)"), Err(CoordError::NonFinite { .. })));
        assert!(matches!(parse_coordinates("(1-, 2)"), Err(CoordError::NotANumber { .. })));
    }
}
