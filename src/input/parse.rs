//! Comma-separated text parsing.

use std::str::FromStr;

use crate::cost::CostMatrix;
use crate::error::TransportError;
use crate::models::TransportProblem;

fn parse_line<T: FromStr>(line: &str, line_no: usize) -> Result<Vec<T>, TransportError> {
    line.split(',')
        .enumerate()
        .map(|(idx, token)| {
            let token = token.trim();
            token.parse().map_err(|_| TransportError::Parse {
                line: line_no,
                field: idx + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses a comma-separated list of non-negative integer quantities.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Fails on empty input or on any token that is not a `u64` (including
/// negative numbers and empty fields).
///
/// # Examples
///
/// ```
/// use u_transport::input::parse_quantities;
///
/// assert_eq!(parse_quantities("7, 9,18").unwrap(), vec![7, 9, 18]);
/// assert!(parse_quantities("7,-1").is_err());
/// ```
pub fn parse_quantities(text: &str) -> Result<Vec<u64>, TransportError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TransportError::EmptyInput);
    }
    parse_line(text, 1)
}

/// Parses a cost matrix: one row per line, entries separated by commas.
///
/// Blank lines are skipped; line numbers in errors refer to the original
/// text.
///
/// # Errors
///
/// Fails on empty input, unparsable tokens, ragged rows, or costs that are
/// negative or non-finite. Parse and ragged-row errors carry the one-based
/// line of the input text.
///
/// # Examples
///
/// ```
/// use u_transport::input::parse_costs;
///
/// let costs = parse_costs("4, 6\n5, 3\n").unwrap();
/// assert_eq!(costs.rows(), 2);
/// assert_eq!(costs.get(1, 1), 3.0);
/// ```
pub fn parse_costs(text: &str) -> Result<CostMatrix, TransportError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_line::<f64>(line, idx + 1)?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(TransportError::RaggedLine {
                    line: idx + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(TransportError::EmptyInput);
    }
    CostMatrix::from_rows(rows)
}

/// Parses supply, demand, and cost texts into a problem.
///
/// # Examples
///
/// ```
/// use u_transport::input::parse_problem;
///
/// let problem = parse_problem("20,30", "25,25", "4,6\n5,3").unwrap();
/// assert!(problem.is_balanced());
/// ```
pub fn parse_problem(
    supply: &str,
    demand: &str,
    costs: &str,
) -> Result<TransportProblem, TransportError> {
    let supply = parse_quantities(supply)?;
    let demand = parse_quantities(demand)?;
    let costs = parse_costs(costs)?;
    TransportProblem::new(costs, supply, demand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantities() {
        assert_eq!(parse_quantities("7,9,18").expect("valid"), vec![7, 9, 18]);
        assert_eq!(parse_quantities("  5 ").expect("valid"), vec![5]);
    }

    #[test]
    fn test_parse_quantities_errors() {
        assert_eq!(parse_quantities("   "), Err(TransportError::EmptyInput));
        assert_eq!(
            parse_quantities("1,,3"),
            Err(TransportError::Parse {
                line: 1,
                field: 2,
                token: String::new()
            })
        );
        assert_eq!(
            parse_quantities("1,abc"),
            Err(TransportError::Parse {
                line: 1,
                field: 2,
                token: "abc".into()
            })
        );
        assert!(parse_quantities("-4").is_err());
    }

    #[test]
    fn test_parse_costs() {
        let cm = parse_costs("19,30,50,10\n70,30,40,60\n\n40,8,70,20").expect("valid");
        assert_eq!(cm.rows(), 3);
        assert_eq!(cm.cols(), 4);
        assert_eq!(cm.get(2, 1), 8.0);
    }

    #[test]
    fn test_parse_costs_decimal() {
        let cm = parse_costs("1.5, 2.25").expect("valid");
        assert_eq!(cm.row(0), &[1.5, 2.25]);
    }

    #[test]
    fn test_parse_costs_errors() {
        assert_eq!(parse_costs("\n\n"), Err(TransportError::EmptyInput));
        assert_eq!(
            parse_costs("1,2\n\n3,x"),
            Err(TransportError::Parse {
                line: 3,
                field: 2,
                token: "x".into()
            })
        );
        assert_eq!(
            parse_costs("1,2\n3"),
            Err(TransportError::RaggedLine {
                line: 2,
                expected: 2,
                found: 1
            })
        );
        assert!(matches!(
            parse_costs("1,-2"),
            Err(TransportError::InvalidCost { .. })
        ));
    }

    #[test]
    fn test_ragged_line_counts_blank_lines() {
        // Same numbering as parse errors: blank lines still count.
        assert_eq!(
            parse_costs("\n1,2,3\n\n\n4,5"),
            Err(TransportError::RaggedLine {
                line: 5,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_costs("\n1,2,3\n\n\n4,y"),
            Err(TransportError::Parse {
                line: 5,
                field: 2,
                token: "y".into()
            })
        );
    }

    #[test]
    fn test_parse_problem_mismatch() {
        let err = parse_problem("1,2,3", "6", "1\n2").unwrap_err();
        assert_eq!(
            err,
            TransportError::SupplyLengthMismatch {
                expected: 2,
                found: 3
            }
        );
    }
}
