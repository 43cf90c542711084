//! Page-range expressions: `"1,2,5-7"` → a list of closed intervals.
//!
//! The grammar is deliberately forgiving. Whitespace around tokens and around
//! the `-` is ignored, and an inverted range like `5-3` is silently flipped
//! to `3-5` instead of rejected — users typing page numbers from memory get
//! the ranges they meant. What the parser does **not** do is deduplicate or
//! merge: `"1,1-3,2"` produces three intervals in exactly that order, and the
//! orchestrator translates each one separately. Repeating a range is a valid
//! way to request two independent translations of the same pages.

use crate::error::TarjemError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed, 1-indexed page range. Invariant: `1 <= start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// Construct an interval, flipping inverted bounds.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Short user-facing label: `"3"` for a single page, `"3-5"` otherwise.
    pub fn label(&self) -> String {
        if self.start == self.end {
            format!("{}", self.start)
        } else {
            format!("{}-{}", self.start, self.end)
        }
    }

    /// Heading placed at the top of the packaged document.
    pub fn heading(&self) -> String {
        if self.start == self.end {
            format!("Page {} Translation", self.start)
        } else {
            format!("Pages {}-{} Translation", self.start, self.end)
        }
    }

    /// Filename fragment: `page_3` or `pages_3-5`.
    pub fn slug(&self) -> String {
        if self.start == self.end {
            format!("page_{}", self.start)
        } else {
            format!("pages_{}-{}", self.start, self.end)
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Render a list of intervals back into expression form.
///
/// `parse_range_expr(&render_range_expr(&v))` yields `v` for any parser
/// output, since labels are already normalised.
pub fn render_range_expr(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(Interval::label)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a range expression into an ordered list of intervals.
///
/// Each comma-separated token is either a bare page number `N` (yielding
/// `N-N`) or a range `A-B`. Page numbers are 1-indexed; `0` is rejected
/// because no page can ever match it.
///
/// # Errors
/// [`TarjemError::InvalidRangeExpression`] on any unparseable token. The
/// caller gets all or nothing — a bad token anywhere fails the whole
/// expression rather than translating a partial selection.
pub fn parse_range_expr(expr: &str) -> Result<Vec<Interval>, TarjemError> {
    let invalid = |detail: String| TarjemError::InvalidRangeExpression {
        expr: expr.to_string(),
        detail,
    };

    let parse_page = |s: &str| -> Result<usize, TarjemError> {
        let page: usize = s
            .trim()
            .parse()
            .map_err(|_| invalid(format!("'{}' is not a page number", s.trim())))?;
        if page == 0 {
            return Err(invalid("pages are 1-indexed, 0 is not a page".into()));
        }
        Ok(page)
    };

    let mut intervals = Vec::new();
    for token in expr.split(',') {
        match token.split_once('-') {
            Some((a, b)) => {
                intervals.push(Interval::new(parse_page(a)?, parse_page(b)?));
            }
            None => {
                let page = parse_page(token)?;
                intervals.push(Interval::new(page, page));
            }
        }
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singles_and_ranges() {
        let v = parse_range_expr("1,2,5-7").unwrap();
        assert_eq!(
            v,
            vec![Interval::new(1, 1), Interval::new(2, 2), Interval::new(5, 7)]
        );
    }

    #[test]
    fn tolerates_whitespace() {
        let v = parse_range_expr(" 1 , 5 - 7 ").unwrap();
        assert_eq!(v, vec![Interval::new(1, 1), Interval::new(5, 7)]);
    }

    #[test]
    fn normalises_inverted_ranges() {
        assert_eq!(
            parse_range_expr("5-3").unwrap(),
            parse_range_expr("3-5").unwrap()
        );
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let v = parse_range_expr("1,1-3,2").unwrap();
        assert_eq!(
            v,
            vec![Interval::new(1, 1), Interval::new(1, 3), Interval::new(2, 2)]
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_range_expr("1,x-3").is_err());
        assert!(parse_range_expr("").is_err());
        assert!(parse_range_expr("1,,3").is_err());
        assert!(parse_range_expr("1-2-3").is_err());
    }

    #[test]
    fn rejects_page_zero() {
        assert!(parse_range_expr("0").is_err());
        assert!(parse_range_expr("0-3").is_err());
    }

    #[test]
    fn render_parse_round_trip() {
        let v = parse_range_expr("7-5, 2 ,2,9-9").unwrap();
        let rendered = render_range_expr(&v);
        assert_eq!(rendered, "5-7,2,2,9");
        assert_eq!(parse_range_expr(&rendered).unwrap(), v);
    }

    #[test]
    fn labels_and_slugs() {
        assert_eq!(Interval::new(3, 3).label(), "3");
        assert_eq!(Interval::new(3, 5).label(), "3-5");
        assert_eq!(Interval::new(3, 3).heading(), "Page 3 Translation");
        assert_eq!(Interval::new(1, 3).heading(), "Pages 1-3 Translation");
        assert_eq!(Interval::new(3, 3).slug(), "page_3");
        assert_eq!(Interval::new(3, 5).slug(), "pages_3-5");
    }
}
